//! Network topology module.
//!
//! This module contains the immutable distance matrix describing the
//! simulated network and the random generation strategy that produces it.

pub mod generator;
pub mod types;

// Re-export key types and functions for easier access
pub use generator::{generate_topology, seeded_rng, DistanceRange};
pub use types::{HostId, Topology, TopologyError, UNREACHABLE};
