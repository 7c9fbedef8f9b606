//! Defaults for the command-line demo.

use gridstar_board::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Board width when none is given.
pub const WIDTH: i32 = DEFAULT_WIDTH;
/// Board height when none is given.
pub const HEIGHT: i32 = DEFAULT_HEIGHT;
/// Fraction of free cells turned into obstacles on generated boards.
pub const DENSITY: f64 = 0.25;
/// Seed for generated boards, fixed so runs are reproducible.
pub const SEED: u64 = 42;
/// Log filter used when `RUST_LOG` is not set.
pub const LOG_FILTER: &str = "info";
