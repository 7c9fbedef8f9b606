//! Random obstacle placement.

use log::debug;
use rand::{Rng, RngExt};

use crate::board::Board;

impl Board {
    /// Block each free cell with probability `density` (clamped to
    /// `[0, 1]`), leaving the start and end markers untouched.
    ///
    /// Returns the number of obstacles placed.
    pub fn scatter_obstacles(&mut self, rng: &mut impl Rng, density: f64) -> usize {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let markers = [self.start(), self.end()];
        let mut placed = 0;
        for (i, p) in self.range().iter().enumerate() {
            if self.is_blocked(p) || markers.iter().any(|m| m.is_some_and(|c| c.index() == i)) {
                continue;
            }
            let r: f64 = rng.random();
            if r < density {
                self.set_blocked(i, true);
                placed += 1;
            }
        }
        debug!(
            "board: scattered {placed} obstacles at density {density:.2} on {}x{}",
            self.width(),
            self.height()
        );
        placed
    }
}
