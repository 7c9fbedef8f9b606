use gridstar_core::{CellId, Point};

/// Read-only view of a grid that the search engine can explore.
///
/// Implementors own the mapping between [`CellId`]s and coordinates; the
/// engine never mutates the grid and expects it to stay unchanged for the
/// duration of one search.
pub trait GridModel {
    /// Coordinates of `cell`. Must be injective over the grid's cells.
    fn coordinates_of(&self, cell: CellId) -> Point;

    /// Inverse of [`coordinates_of`](Self::coordinates_of), or `None` when
    /// `p` is out of bounds.
    fn cell_id_of(&self, p: Point) -> Option<CellId>;

    /// Whether `p` lies outside the grid.
    fn is_out_of_bounds(&self, p: Point) -> bool;

    /// Whether `cell` is blocked.
    fn is_obstacle(&self, cell: CellId) -> bool;

    /// Total number of addressable cells. Valid ids are `0..cell_count()`.
    fn cell_count(&self) -> usize;

    /// Append the walkable 4-neighbours of `cell` into `buf`. The caller
    /// clears `buf` before calling.
    ///
    /// The default visits up, right, down, left and keeps in-bounds,
    /// non-obstacle cells. Overrides must be deterministic for a fixed grid.
    fn neighbors(&self, cell: CellId, buf: &mut Vec<CellId>) {
        for p in self.coordinates_of(cell).neighbors_4() {
            if self.is_out_of_bounds(p) {
                continue;
            }
            if let Some(n) = self.cell_id_of(p) {
                if !self.is_obstacle(n) {
                    buf.push(n);
                }
            }
        }
    }
}
