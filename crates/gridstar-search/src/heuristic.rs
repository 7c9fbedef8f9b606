use gridstar_core::Point;

/// Euclidean (L2) distance between two points.
///
/// Never exceeds the number of unit 4-directional steps between the points,
/// so it is admissible for the search, and it satisfies the triangle
/// inequality, so it is also consistent.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Manhattan (L1) distance between two points: the step count of a shortest
/// 4-directional path when nothing is in the way.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    (a.x - b.x).unsigned_abs() + (a.y - b.y).unsigned_abs()
}
