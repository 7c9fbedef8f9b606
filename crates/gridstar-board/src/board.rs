//! The [`Board`] grid model.

use gridstar_core::{CellId, Point, Range};
use gridstar_search::GridModel;
use log::trace;

use crate::error::BoardError;

/// Default board width: a 500-pixel canvas of 25-pixel boxes.
pub const DEFAULT_WIDTH: i32 = 20;
/// Default board height.
pub const DEFAULT_HEIGHT: i32 = 20;

/// A rectangular grid of free and blocked cells with optional start and end
/// markers.
///
/// Cells are numbered in row-major order, so the cell at `(x, y)` has id
/// `y * width + x`. A cell is never both an obstacle and a marker, and the
/// start and end never share a cell: each edit clears whatever it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rng: Range,
    obstacles: Vec<bool>,
    start: Option<CellId>,
    end: Option<CellId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Board {
    /// Create an empty board. Negative sizes are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let rng = Range::with_size(width.max(0), height.max(0));
        Self {
            rng,
            obstacles: vec![false; rng.len()],
            start: None,
            end: None,
        }
    }

    /// The board rectangle, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// The start marker, if placed.
    #[inline]
    pub fn start(&self) -> Option<CellId> {
        self.start
    }

    /// The end marker, if placed.
    #[inline]
    pub fn end(&self) -> Option<CellId> {
        self.end
    }

    /// Number of blocked cells.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.iter().filter(|&&b| b).count()
    }

    /// Whether the cell at `p` is blocked. Out-of-bounds positions are not.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.obstacles[i])
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Block the cell at `p`, removing any marker placed there.
    pub fn draw_obstacle(&mut self, p: Point) -> Result<(), BoardError> {
        let cell = self.cell(p)?;
        self.obstacles[cell.index()] = true;
        self.unmark(cell);
        trace!("board: obstacle drawn at {p}");
        Ok(())
    }

    /// Unblock the cell at `p`. Erasing a free cell is a no-op.
    pub fn erase_obstacle(&mut self, p: Point) -> Result<(), BoardError> {
        let cell = self.cell(p)?;
        self.obstacles[cell.index()] = false;
        trace!("board: obstacle erased at {p}");
        Ok(())
    }

    /// Flip the cell at `p` and return whether it is now blocked.
    pub fn toggle_obstacle(&mut self, p: Point) -> Result<bool, BoardError> {
        let cell = self.cell(p)?;
        if self.obstacles[cell.index()] {
            self.erase_obstacle(p)?;
            Ok(false)
        } else {
            self.draw_obstacle(p)?;
            Ok(true)
        }
    }

    /// Unblock every cell. Markers are kept.
    pub fn clear_obstacles(&mut self) {
        self.obstacles.fill(false);
    }

    /// Place the start marker at `p`, clearing any obstacle there. Moving the
    /// start onto the end removes the end marker.
    pub fn set_start(&mut self, p: Point) -> Result<(), BoardError> {
        let cell = self.cell(p)?;
        self.obstacles[cell.index()] = false;
        if self.end == Some(cell) {
            self.end = None;
        }
        self.start = Some(cell);
        trace!("board: start set to {p}");
        Ok(())
    }

    /// Place the end marker at `p`, clearing any obstacle there. Moving the
    /// end onto the start removes the start marker.
    pub fn set_end(&mut self, p: Point) -> Result<(), BoardError> {
        let cell = self.cell(p)?;
        self.obstacles[cell.index()] = false;
        if self.start == Some(cell) {
            self.start = None;
        }
        self.end = Some(cell);
        trace!("board: end set to {p}");
        Ok(())
    }

    pub fn clear_start(&mut self) {
        self.start = None;
    }

    pub fn clear_end(&mut self) {
        self.end = None;
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Find a shortest path between the board's own start and end markers.
    ///
    /// Both markers must be placed. An empty result means obstacles separate
    /// them.
    pub fn find_path(&self) -> Result<Vec<CellId>, BoardError> {
        let start = self.start.ok_or(BoardError::MissingStart)?;
        let end = self.end.ok_or(BoardError::MissingEnd)?;
        Ok(gridstar_search::find_path(self, start, end)?)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        Some((p.y * self.rng.width() + p.x) as usize)
    }

    /// Convert a flat index back to a `Point`.
    ///
    /// An empty board has no cells, so every index maps to `range().min`,
    /// which lies outside it.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        if self.rng.is_empty() {
            return self.rng.min;
        }
        let w = self.rng.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    fn cell(&self, p: Point) -> Result<CellId, BoardError> {
        self.idx(p).map(CellId::new).ok_or(BoardError::OutOfBounds(p))
    }

    fn unmark(&mut self, cell: CellId) {
        if self.start == Some(cell) {
            self.start = None;
        }
        if self.end == Some(cell) {
            self.end = None;
        }
    }

    pub(crate) fn set_blocked(&mut self, idx: usize, blocked: bool) {
        self.obstacles[idx] = blocked;
    }

    pub(crate) fn set_markers(&mut self, start: Option<CellId>, end: Option<CellId>) {
        self.start = start;
        self.end = end;
    }
}

impl GridModel for Board {
    #[inline]
    fn coordinates_of(&self, cell: CellId) -> Point {
        self.point(cell.index())
    }

    #[inline]
    fn cell_id_of(&self, p: Point) -> Option<CellId> {
        self.idx(p).map(CellId::new)
    }

    #[inline]
    fn is_out_of_bounds(&self, p: Point) -> bool {
        !self.rng.contains(p)
    }

    #[inline]
    fn is_obstacle(&self, cell: CellId) -> bool {
        self.obstacles.get(cell.index()).copied().unwrap_or(false)
    }

    #[inline]
    fn cell_count(&self) -> usize {
        self.obstacles.len()
    }
}
