use gridstar_core::Point;
use gridstar_search::SearchError;
use thiserror::Error;

/// Errors from editing or searching a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no start cell has been placed")]
    MissingStart,
    #[error("no end cell has been placed")]
    MissingEnd,
    #[error("position {0} is outside the board")]
    OutOfBounds(Point),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Errors from parsing an ASCII layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    /// Rows must all have the same width. `line` is 1-based.
    #[error("layout line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("layout contains invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    #[error("layout has more than one {marker:?} marker (second at {pos})")]
    DuplicateMarker { marker: char, pos: Point },
}
