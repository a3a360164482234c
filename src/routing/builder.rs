//! Per-source routing table construction.
//!
//! Implements label-setting (Dijkstra) shortest paths over the full
//! distance matrix. Each round settles exactly one host, so construction
//! finishes in `host_count - 1` rounds after seeding the source entry.
//! Ties on the minimum estimate are broken toward the lowest host index,
//! which makes table construction fully deterministic.

use log::debug;

use crate::topology::{HostId, Topology, UNREACHABLE};

use super::table::{RouteEntry, RoutingTable};

/// Compute the shortest-path routing table for `source`.
///
/// Every destination is seeded with the direct link distance, then the
/// standard select/settle/relax loop runs until all hosts are settled.
/// Relaxation uses the settled host's cumulative distance and saturating
/// addition, so an unreachable host can never improve another estimate.
///
/// Panics if `source` is out of range for the topology.
pub fn build_routing_table(topology: &Topology, source: HostId) -> RoutingTable {
    let host_count = topology.host_count();

    // Seed every destination with the direct link from the source.
    let mut entries: Vec<RouteEntry> = (0..host_count)
        .map(|dest| {
            let direct = topology.distance(source, dest);
            RouteEntry {
                distance: direct,
                first_hop_source: if direct < UNREACHABLE {
                    Some(source)
                } else {
                    None
                },
                settled: false,
            }
        })
        .collect();

    // The source itself is settled from the start at distance zero.
    entries[source] = RouteEntry {
        distance: 0,
        first_hop_source: Some(source),
        settled: true,
    };

    let mut settled_count = 1;
    while settled_count < host_count {
        let Some(closest) = select_closest_unsettled(&entries) else {
            break;
        };
        entries[closest].settled = true;
        settled_count += 1;

        let base = entries[closest].distance;
        if base == UNREACHABLE {
            // Every remaining host is unreachable; settling them one per
            // round preserves the termination bound without changing any
            // distance.
            continue;
        }

        // Relax all still-unsettled hosts through the newly settled one.
        for dest in 0..host_count {
            if entries[dest].settled {
                continue;
            }
            let candidate = base.saturating_add(topology.distance(closest, dest));
            if candidate < entries[dest].distance {
                entries[dest].distance = candidate;
                entries[dest].first_hop_source = Some(closest);
            }
        }
    }

    debug!(
        "Routing table for host {} settled ({} hosts)",
        source, host_count
    );

    RoutingTable::new(source, entries)
}

/// Find the unsettled host with the smallest distance estimate.
///
/// The scan runs in ascending index order with a strict comparison, so the
/// lowest host index wins ties.
fn select_closest_unsettled(entries: &[RouteEntry]) -> Option<HostId> {
    let mut best: Option<HostId> = None;
    for (host, entry) in entries.iter().enumerate() {
        if entry.settled {
            continue;
        }
        match best {
            Some(current) if entries[current].distance <= entry.distance => {}
            _ => best = Some(host),
        }
    }
    best
}
