//! Rendering and export of simulation results.
//!
//! Text rendering of the distance matrix, per-host routing tables, and
//! traced routes for console diagnostics, plus a JSON report with summary
//! statistics over all host pairs.

use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use serde::Serialize;

use crate::network::NetworkModel;
use crate::routing::{Hop, RoutingTable};
use crate::topology::{HostId, Topology, UNREACHABLE};

/// Render the distance matrix as a tab-separated grid with host indices
/// on both axes
pub fn render_topology(topology: &Topology) -> String {
    let host_count = topology.host_count();
    let mut out = String::new();

    out.push('\t');
    for j in 0..host_count {
        let _ = write!(out, "{}\t", j);
    }
    out.push('\n');

    for i in 0..host_count {
        let _ = write!(out, "{}\t", i);
        for j in 0..host_count {
            out.push_str(&format_distance(topology.distance(i, j)));
            out.push('\t');
        }
        out.push('\n');
    }

    out
}

/// Render one host's routing table, one destination per line as
/// `distance(first_hop)`; a trailing `*` marks settled entries
pub fn render_table(table: &RoutingTable) -> String {
    let mut out = format!("FOR HOST {}:\n", table.source());

    for (dest, entry) in table.entries().iter().enumerate() {
        let first_hop = match entry.first_hop_source {
            Some(host) => host.to_string(),
            None => "-".to_string(),
        };
        let _ = write!(
            out,
            "  {}: {}({})",
            dest,
            format_distance(entry.distance),
            first_hop
        );
        if entry.settled {
            out.push('*');
        }
        out.push('\n');
    }

    out
}

/// Render a traced route, one line per hop with the running total distance
pub fn render_trace(source: HostId, destination: HostId, hops: &[Hop]) -> String {
    let mut out = format!(
        "*********** TRACE FROM {} TO {} ***********\n",
        source, destination
    );

    if hops.is_empty() {
        let _ = writeln!(out, "Host {} is the source; no hops required", source);
        return out;
    }

    let mut total = 0u32;
    for hop in hops {
        total += hop.distance;
        let _ = writeln!(
            out,
            "Hop from host {} to host {} for a total distance of {}",
            hop.from, hop.to, total
        );
    }

    out
}

fn format_distance(distance: u32) -> String {
    if distance == UNREACHABLE {
        "INF".to_string()
    } else {
        distance.to_string()
    }
}

/// Summary statistics over all ordered pairs of distinct hosts
#[derive(Debug, Clone, Serialize)]
pub struct DistanceStats {
    pub reachable_pairs: usize,
    pub unreachable_pairs: usize,
    pub min_distance: u32,
    pub max_distance: u32,
    pub mean_distance: f64,
}

/// One destination row in the JSON report; `distance` is absent for
/// unreachable destinations
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub destination: HostId,
    pub distance: Option<u32>,
    pub first_hop_source: Option<HostId>,
}

/// Routing table of a single source host in the JSON report
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub source: HostId,
    pub routes: Vec<RouteReport>,
}

/// Full simulation report written as JSON
#[derive(Debug, Clone, Serialize)]
pub struct RoutingReport {
    pub host_count: usize,
    pub stats: DistanceStats,
    pub tables: Vec<TableReport>,
}

impl RoutingReport {
    /// Assemble a report from a fully built network model
    pub fn from_model(model: &NetworkModel) -> Self {
        let tables: Vec<TableReport> = model
            .tables()
            .iter()
            .map(|table| TableReport {
                source: table.source(),
                routes: table
                    .entries()
                    .iter()
                    .enumerate()
                    .map(|(destination, entry)| RouteReport {
                        destination,
                        distance: entry.is_reachable().then_some(entry.distance),
                        first_hop_source: entry.first_hop_source,
                    })
                    .collect(),
            })
            .collect();

        Self {
            host_count: model.host_count(),
            stats: calculate_stats(model),
            tables,
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn write_report(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .wrap_err_with(|| format!("Failed to create report file '{}'", path.display()))?;
        serde_json::to_writer_pretty(file, self)
            .wrap_err("Failed to serialize routing report")?;
        info!("Wrote routing report to {:?}", path);
        Ok(())
    }
}

/// Shortest-distance statistics over all ordered pairs of distinct hosts
fn calculate_stats(model: &NetworkModel) -> DistanceStats {
    let mut reachable: Vec<u32> = Vec::new();
    let mut unreachable_pairs = 0usize;

    for table in model.tables() {
        for (destination, entry) in table.entries().iter().enumerate() {
            if destination == table.source() {
                continue;
            }
            if entry.is_reachable() {
                reachable.push(entry.distance);
            } else {
                unreachable_pairs += 1;
            }
        }
    }

    let min_distance = reachable.iter().copied().min().unwrap_or(0);
    let max_distance = reachable.iter().copied().max().unwrap_or(0);
    let mean_distance = if reachable.is_empty() {
        0.0
    } else {
        reachable.iter().map(|&d| d as f64).sum::<f64>() / reachable.len() as f64
    };

    DistanceStats {
        reachable_pairs: reachable.len(),
        unreachable_pairs,
        min_distance,
        max_distance,
        mean_distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;

    fn four_host_model() -> NetworkModel {
        let topology = Topology::from_matrix(vec![
            vec![0, 1, 4, 1],
            vec![1, 0, 2, 5],
            vec![4, 2, 0, 1],
            vec![1, 5, 1, 0],
        ])
        .unwrap();
        NetworkModel::build(topology)
    }

    #[test]
    fn test_render_topology_grid() {
        let model = four_host_model();
        let rendered = render_topology(model.topology());

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("0\t1\t2\t3"));
        assert!(lines[1].starts_with("0\t0\t1\t4\t1"));
    }

    #[test]
    fn test_render_table_marks_settled_entries() {
        let model = four_host_model();
        let rendered = render_table(model.tables().first().unwrap());

        assert!(rendered.starts_with("FOR HOST 0:"));
        assert!(rendered.contains("2: 2(3)*"));
    }

    #[test]
    fn test_render_table_shows_sentinel() {
        let topology = Topology::from_matrix(vec![
            vec![0, UNREACHABLE],
            vec![UNREACHABLE, 0],
        ])
        .unwrap();
        let model = NetworkModel::build(topology);
        let rendered = render_table(model.tables().first().unwrap());

        assert!(rendered.contains("1: INF(-)*"));
    }

    #[test]
    fn test_render_trace_running_total() {
        let model = four_host_model();
        let hops = model.trace_route(0, 2).unwrap();
        let rendered = render_trace(0, 2, &hops);

        assert!(rendered.contains("TRACE FROM 0 TO 2"));
        assert!(rendered.contains("Hop from host 0 to host 3 for a total distance of 1"));
        assert!(rendered.contains("Hop from host 3 to host 2 for a total distance of 2"));
    }

    #[test]
    fn test_render_trace_of_source_itself() {
        let rendered = render_trace(1, 1, &[]);
        assert!(rendered.contains("no hops required"));
    }

    #[test]
    fn test_report_stats() {
        let model = four_host_model();
        let report = RoutingReport::from_model(&model);

        assert_eq!(report.host_count, 4);
        assert_eq!(report.tables.len(), 4);
        // 12 ordered pairs of distinct hosts, all reachable.
        assert_eq!(report.stats.reachable_pairs, 12);
        assert_eq!(report.stats.unreachable_pairs, 0);
        assert_eq!(report.stats.min_distance, 1);
        assert!(report.stats.mean_distance > 0.0);
    }

    #[test]
    fn test_report_maps_sentinel_to_none() {
        let topology = Topology::from_matrix(vec![
            vec![0, UNREACHABLE],
            vec![UNREACHABLE, 0],
        ])
        .unwrap();
        let model = NetworkModel::build(topology);
        let report = RoutingReport::from_model(&model);

        let route = &report.tables[0].routes[1];
        assert_eq!(route.distance, None);
        assert_eq!(route.first_hop_source, None);
        assert_eq!(report.stats.unreachable_pairs, 2);
    }

    #[test]
    fn test_write_report_json() {
        let model = four_host_model();
        let report = RoutingReport::from_model(&model);
        let file = tempfile::NamedTempFile::new().unwrap();

        report.write_report(file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["host_count"], 4);
        assert_eq!(parsed["tables"][0]["routes"][2]["distance"], 2);
    }
}
