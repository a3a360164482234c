//! Shortest-path routing module.
//!
//! This module contains the per-source routing table representation, the
//! label-setting algorithm that populates it, and route reconstruction
//! from a populated table.

pub mod builder;
pub mod table;
pub mod trace;

// Re-export key types and functions for easier access
pub use builder::build_routing_table;
pub use table::{RouteEntry, RoutingTable};
pub use trace::{trace_route, Hop};

use crate::topology::HostId;

/// Errors raised by routing queries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    #[error("Host {host} is out of range for a network of {host_count} hosts")]
    HostOutOfRange { host: HostId, host_count: usize },

    #[error("Host {destination} is unreachable from host {source_host}")]
    Unreachable {
        source_host: HostId,
        destination: HostId,
    },

    #[error(
        "Route chain from host {source_host} to host {destination} did not reach \
         the source within {limit} hops"
    )]
    BrokenRouteChain {
        source_host: HostId,
        destination: HostId,
        limit: usize,
    },
}
