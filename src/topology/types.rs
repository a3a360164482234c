//! Topology type definitions.
//!
//! The topology is an N×N matrix of link distances between every ordered
//! pair of hosts. It is validated once at construction and never mutated,
//! so it can be shared freely across the parallel table builders.

use serde::Serialize;

/// Index of a host in the network, in `[0, host_count)`
pub type HostId = usize;

/// Sentinel distance for a link or destination that cannot be reached.
///
/// Distances are plain unsigned integers; relaxation arithmetic saturates
/// at this value so a path through an unreachable host can never look
/// cheaper than a real one.
pub const UNREACHABLE: u32 = u32::MAX;

/// Errors that can occur while constructing a topology
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("Topology must contain at least one host")]
    Empty,

    #[error("Topology matrix must be square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Self-distance of host {host} must be zero, found {found}")]
    NonZeroDiagonal { host: HostId, found: u32 },

    #[error("Invalid distance range: min {min} exceeds max {max}")]
    InvalidDistanceRange { min: u32, max: u32 },
}

/// Immutable matrix of link distances between every ordered pair of hosts.
///
/// `distance(i, j)` is the cost of the direct link from host `i` to host
/// `j`; the diagonal is always zero. The matrix need not be symmetric --
/// `(i, j)` and `(j, i)` are independent links, so the network is directed.
#[derive(Debug, Clone, Serialize)]
pub struct Topology {
    host_count: usize,
    /// Row-major link distances
    distances: Vec<u32>,
}

impl Topology {
    /// Build a topology from a square matrix of link distances.
    ///
    /// Validates that the matrix is square, non-empty, and has a zero
    /// diagonal. Off-diagonal entries may be [`UNREACHABLE`] to model an
    /// absent link.
    pub fn from_matrix(rows: Vec<Vec<u32>>) -> Result<Self, TopologyError> {
        let host_count = rows.len();
        if host_count == 0 {
            return Err(TopologyError::Empty);
        }

        let mut distances = Vec::with_capacity(host_count * host_count);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != host_count {
                return Err(TopologyError::NotSquare {
                    row: i,
                    found: row.len(),
                    expected: host_count,
                });
            }
            if row[i] != 0 {
                return Err(TopologyError::NonZeroDiagonal {
                    host: i,
                    found: row[i],
                });
            }
            distances.extend_from_slice(row);
        }

        Ok(Self {
            host_count,
            distances,
        })
    }

    /// Construct from an already-validated row-major buffer
    pub(crate) fn from_raw(host_count: usize, distances: Vec<u32>) -> Self {
        debug_assert_eq!(distances.len(), host_count * host_count);
        Self {
            host_count,
            distances,
        }
    }

    /// Number of hosts in the network
    pub fn host_count(&self) -> usize {
        self.host_count
    }

    /// Distance of the direct link from `from` to `to`.
    ///
    /// Panics if either index is out of range.
    pub fn distance(&self, from: HostId, to: HostId) -> u32 {
        self.distances[from * self.host_count + to]
    }

    /// Returns true if `host` is a valid index into this topology
    pub fn contains(&self, host: HostId) -> bool {
        host < self.host_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_matrix_valid() {
        let topology = Topology::from_matrix(vec![
            vec![0, 3, 7],
            vec![2, 0, 4],
            vec![9, 1, 0],
        ])
        .unwrap();

        assert_eq!(topology.host_count(), 3);
        assert_eq!(topology.distance(0, 1), 3);
        assert_eq!(topology.distance(1, 0), 2);
        assert_eq!(topology.distance(2, 2), 0);
    }

    #[test]
    fn test_from_matrix_rejects_empty() {
        assert!(matches!(
            Topology::from_matrix(vec![]),
            Err(TopologyError::Empty)
        ));
    }

    #[test]
    fn test_from_matrix_rejects_ragged_rows() {
        let result = Topology::from_matrix(vec![vec![0, 1], vec![1, 0, 2]]);
        assert!(matches!(
            result,
            Err(TopologyError::NotSquare {
                row: 1,
                found: 3,
                expected: 2
            })
        ));
    }

    #[test]
    fn test_from_matrix_rejects_nonzero_diagonal() {
        let result = Topology::from_matrix(vec![vec![0, 1], vec![1, 5]]);
        assert!(matches!(
            result,
            Err(TopologyError::NonZeroDiagonal { host: 1, found: 5 })
        ));
    }

    #[test]
    fn test_asymmetric_links_are_preserved() {
        let topology =
            Topology::from_matrix(vec![vec![0, 10], vec![1, 0]]).unwrap();
        assert_eq!(topology.distance(0, 1), 10);
        assert_eq!(topology.distance(1, 0), 1);
    }

    #[test]
    fn test_unreachable_sentinel_allowed_off_diagonal() {
        let topology =
            Topology::from_matrix(vec![vec![0, UNREACHABLE], vec![5, 0]]).unwrap();
        assert_eq!(topology.distance(0, 1), UNREACHABLE);
    }
}
