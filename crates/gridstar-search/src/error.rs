use std::fmt;

use gridstar_core::CellId;
use thiserror::Error;

/// Which end of a search a precondition failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors reported by [`find_path`](crate::find_path).
///
/// Not finding a path is not an error; it is an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The caller passed an endpoint the grid does not know about.
    #[error("{endpoint} cell {cell} is outside the grid ({cell_count} cells)")]
    EndpointOutOfGrid {
        endpoint: Endpoint,
        cell: CellId,
        cell_count: usize,
    },
    /// The caller passed an endpoint that is blocked.
    #[error("{endpoint} cell {cell} is an obstacle")]
    EndpointIsObstacle { endpoint: Endpoint, cell: CellId },
    /// Path reconstruction hit a cell without a predecessor before reaching
    /// the start. Indicates a bug in the search, never a missing path.
    #[error("predecessor chain broken at cell {at}")]
    BrokenPredecessorChain { at: CellId },
    /// A cell was expanded while its cost from the start was still unknown.
    #[error("cell {at} expanded without a known cost")]
    UnknownCostOnExpansion { at: CellId },
    /// The grid's `neighbors` reported a cell id it does not contain.
    #[error("neighbor {neighbor} of cell {cell} is outside the grid ({cell_count} cells)")]
    NeighborOutOfGrid {
        cell: CellId,
        neighbor: CellId,
        cell_count: usize,
    },
}
