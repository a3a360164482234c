//! Network model: a topology plus one routing table per host.
//!
//! All tables are computed at construction time; queries only read the
//! precomputed tables. Table builds are independent per source host and
//! only share the read-only topology, so they run in parallel.

use log::{debug, info};
use rayon::prelude::*;

use crate::routing::{build_routing_table, trace_route, Hop, RoutingError, RoutingTable};
use crate::topology::{HostId, Topology};

/// Computed, immutable snapshot of the simulated network
#[derive(Debug, Clone)]
pub struct NetworkModel {
    topology: Topology,
    tables: Vec<RoutingTable>,
}

impl NetworkModel {
    /// Build routing tables for every host in the topology.
    ///
    /// One table build per host, fanned out across the rayon pool; the
    /// collect is the only synchronization point. Queries are served once
    /// this returns, never against a partially built model.
    pub fn build(topology: Topology) -> Self {
        let host_count = topology.host_count();
        info!("Building routing tables for {} hosts", host_count);

        let tables: Vec<RoutingTable> = (0..host_count)
            .into_par_iter()
            .map(|source| build_routing_table(&topology, source))
            .collect();

        debug!("All {} routing tables settled", tables.len());

        Self { topology, tables }
    }

    /// Number of hosts in the network
    pub fn host_count(&self) -> usize {
        self.topology.host_count()
    }

    /// The distance matrix the model was built from
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// All per-host routing tables, indexed by source host id
    pub fn tables(&self) -> &[RoutingTable] {
        &self.tables
    }

    /// Read-only view of the routing table computed for `source`
    pub fn table_for(&self, source: HostId) -> Result<&RoutingTable, RoutingError> {
        self.check_host(source)?;
        Ok(&self.tables[source])
    }

    /// Shortest distance from `source` to `destination`
    pub fn distance_between(
        &self,
        source: HostId,
        destination: HostId,
    ) -> Result<u32, RoutingError> {
        self.check_host(source)?;
        self.check_host(destination)?;

        let entry = self.tables[source].entry(destination);
        if !entry.is_reachable() {
            return Err(RoutingError::Unreachable {
                source_host: source,
                destination,
            });
        }
        Ok(entry.distance)
    }

    /// Ordered hops of the shortest route from `source` to `destination`
    pub fn trace_route(
        &self,
        source: HostId,
        destination: HostId,
    ) -> Result<Vec<Hop>, RoutingError> {
        self.check_host(source)?;
        trace_route(&self.tables[source], destination)
    }

    fn check_host(&self, host: HostId) -> Result<(), RoutingError> {
        if self.topology.contains(host) {
            Ok(())
        } else {
            Err(RoutingError::HostOutOfRange {
                host,
                host_count: self.topology.host_count(),
            })
        }
    }
}
