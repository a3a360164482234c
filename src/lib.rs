//! # Routesim - Shortest-path routing simulator for fully connected host networks
//!
//! This library simulates a small, fully connected network of hosts with
//! randomized link distances and computes, for every host, a shortest-path
//! routing table to all other hosts.
//!
//! ## Overview
//!
//! A network is described by an immutable N×N distance matrix. At
//! construction time the model runs a label-setting shortest-path
//! computation once per host (in parallel, since per-host builds are
//! independent) and stores the resulting routing tables. Queries --
//! distances, table views, route traces -- are answered from the
//! precomputed tables without any recomputation.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `topology`: immutable distance matrix and random topology generation
//! - `routing`: per-source routing tables, the label-setting builder, and
//!   route reconstruction
//! - `network`: the composed network model and its query operations
//! - `report`: text rendering and JSON export of simulation results
//! - `config`: type-safe configuration structures and YAML parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use routesim::network::NetworkModel;
//! use routesim::topology::Topology;
//!
//! let topology = Topology::from_matrix(vec![
//!     vec![0, 1, 4, 1],
//!     vec![1, 0, 2, 5],
//!     vec![4, 2, 0, 1],
//!     vec![1, 5, 1, 0],
//! ])?;
//! let model = NetworkModel::build(topology);
//!
//! // The cheapest route from host 0 to host 2 goes through host 3.
//! assert_eq!(model.distance_between(0, 2)?, 2);
//! let hops = model.trace_route(0, 2)?;
//! assert_eq!(hops.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Domain errors (topology validation, out-of-range hosts, unreachable
//! destinations, broken route chains) are typed `thiserror` enums. The
//! binary entry point uses `color_eyre` for error reporting with context.

pub mod config;
pub mod network;
pub mod report;
pub mod routing;
pub mod topology;
