//! A* shortest-path search over uniform 4-connected grids.
//!
//! The engine consumes any grid that implements [`GridModel`] and answers a
//! single question: what is a minimum-step path between two cells that
//! avoids obstacles? See [`find_path`].
//!
//! ```text
//! GridModel ──► find_path(grid, start, end) ──► Vec<CellId>   (empty = no path)
//! ```
//!
//! Every call is self-contained: per-cell search records and the frontier
//! are allocated at the start of a search and dropped when it returns, so
//! independent searches over distinct grids never share state.

mod astar;
mod error;
mod frontier;
mod heuristic;
mod record;
mod traits;

pub use astar::{SearchOutcome, SearchStats, find_path, find_path_with_stats};
pub use error::{Endpoint, SearchError};
pub use heuristic::{euclidean, manhattan};
pub use traits::GridModel;
