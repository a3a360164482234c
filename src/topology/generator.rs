//! Random topology generation.
//!
//! Produces fully connected topologies where every ordered pair of distinct
//! hosts gets an independent uniform draw from a configurable range. The
//! two directions of a link are sampled separately, so generated networks
//! are directed. The random source is injected by the caller, which keeps
//! generation reproducible under a fixed seed.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::types::{Topology, TopologyError};

/// Inclusive range of link distances for generated topologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceRange {
    pub min: u32,
    pub max: u32,
}

impl Default for DistanceRange {
    fn default() -> Self {
        // Matches the classic simulation default of 1..=1000
        Self { min: 1, max: 1000 }
    }
}

/// Generate a fully connected topology of `hosts` hosts.
///
/// Each off-diagonal entry is drawn independently from `range`; the
/// diagonal is zero. Pass a seeded [`StdRng`] for reproducible output.
pub fn generate_topology<R: Rng>(
    hosts: usize,
    range: DistanceRange,
    rng: &mut R,
) -> Result<Topology, TopologyError> {
    if hosts == 0 {
        return Err(TopologyError::Empty);
    }
    if range.min > range.max {
        return Err(TopologyError::InvalidDistanceRange {
            min: range.min,
            max: range.max,
        });
    }

    let mut distances = Vec::with_capacity(hosts * hosts);
    for i in 0..hosts {
        for j in 0..hosts {
            if i == j {
                distances.push(0);
            } else {
                distances.push(rng.gen_range(range.min..=range.max));
            }
        }
    }

    info!(
        "Generated fully connected topology: {} hosts, link distances {}..={}",
        hosts, range.min, range.max
    );

    Ok(Topology::from_raw(hosts, distances))
}

/// Random source for topology generation: seeded when a seed is configured,
/// entropy-seeded otherwise
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
