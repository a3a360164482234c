//! Routing table storage.

use serde::Serialize;

use crate::topology::{HostId, UNREACHABLE};

/// Best known route from a table's source to one destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Total shortest distance from the source to this destination, or
    /// [`UNREACHABLE`] if no path exists
    pub distance: u32,
    /// Host from which the last distance improvement was derived. `None`
    /// only for destinations that were never reached.
    pub first_hop_source: Option<HostId>,
    /// Whether the distance has been finalized and excluded from further
    /// relaxation
    pub settled: bool,
}

impl RouteEntry {
    /// Returns true if a path to this destination exists
    pub fn is_reachable(&self) -> bool {
        self.distance < UNREACHABLE
    }
}

/// Shortest-path routing table for a single source host.
///
/// One entry per destination, indexed by host id. Fully populated during
/// network construction and read-only thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct RoutingTable {
    source: HostId,
    entries: Vec<RouteEntry>,
}

impl RoutingTable {
    pub(crate) fn new(source: HostId, entries: Vec<RouteEntry>) -> Self {
        Self { source, entries }
    }

    /// The host this table was computed for
    pub fn source(&self) -> HostId {
        self.source
    }

    /// Number of hosts covered by this table
    pub fn host_count(&self) -> usize {
        self.entries.len()
    }

    /// Route entry for `destination`.
    ///
    /// Panics if `destination` is out of range.
    pub fn entry(&self, destination: HostId) -> &RouteEntry {
        &self.entries[destination]
    }

    /// All entries, indexed by destination host id
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachability_of_entries() {
        let reachable = RouteEntry {
            distance: 42,
            first_hop_source: Some(0),
            settled: true,
        };
        let unreachable = RouteEntry {
            distance: UNREACHABLE,
            first_hop_source: None,
            settled: true,
        };

        assert!(reachable.is_reachable());
        assert!(!unreachable.is_reachable());
    }

    #[test]
    fn test_table_accessors() {
        let entries = vec![
            RouteEntry {
                distance: 0,
                first_hop_source: Some(0),
                settled: true,
            },
            RouteEntry {
                distance: 7,
                first_hop_source: Some(0),
                settled: true,
            },
        ];
        let table = RoutingTable::new(0, entries);

        assert_eq!(table.source(), 0);
        assert_eq!(table.host_count(), 2);
        assert_eq!(table.entry(1).distance, 7);
        assert_eq!(table.entries().len(), 2);
    }
}
