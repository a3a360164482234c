//! Route reconstruction from a populated routing table.
//!
//! Walks the first-hop-source chain backward from the destination until it
//! reaches the table's source, then reverses the collected hops into
//! forward order. The walk is bounded by the host count; a chain that
//! fails to reach the source within that bound indicates a corrupted
//! table and is reported as an error rather than looping.

use serde::Serialize;

use crate::topology::HostId;

use super::table::RoutingTable;
use super::RoutingError;

/// One hop on a reconstructed route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: HostId,
    pub to: HostId,
    /// Cost of this hop alone; hop costs along a route sum to the total
    /// shortest distance
    pub distance: u32,
}

/// Reconstruct the route from the table's source to `destination`.
///
/// Returns the hops in forward order. Tracing the source itself yields an
/// empty route; an unreachable destination is reported as
/// [`RoutingError::Unreachable`].
pub fn trace_route(
    table: &RoutingTable,
    destination: HostId,
) -> Result<Vec<Hop>, RoutingError> {
    let host_count = table.host_count();
    let source = table.source();

    if destination >= host_count {
        return Err(RoutingError::HostOutOfRange {
            host: destination,
            host_count,
        });
    }
    if destination == source {
        return Ok(Vec::new());
    }
    if !table.entry(destination).is_reachable() {
        return Err(RoutingError::Unreachable {
            source_host: source,
            destination,
        });
    }

    let broken_chain = || RoutingError::BrokenRouteChain {
        source_host: source,
        destination,
        limit: host_count,
    };

    // Each backward step lands on a distinct host on a correct table, so
    // the source must appear within host_count steps.
    let mut hops = Vec::new();
    let mut current = destination;
    for _ in 0..host_count {
        let entry = table.entry(current);
        let Some(previous) = entry.first_hop_source else {
            return Err(broken_chain());
        };
        hops.push(Hop {
            from: previous,
            to: current,
            distance: entry
                .distance
                .saturating_sub(table.entry(previous).distance),
        });
        if previous == source {
            hops.reverse();
            return Ok(hops);
        }
        current = previous;
    }

    Err(broken_chain())
}
