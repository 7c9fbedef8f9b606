//! An editable obstacle board that plugs into the gridstar search engine.
//!
//! [`Board`] is a rectangular grid of free and blocked cells with optional
//! start and end markers. It implements [`GridModel`](gridstar_search::GridModel),
//! can be written and read as ASCII layouts, and can be filled with random
//! obstacles.

mod board;
mod error;
mod layout;
mod scatter;

pub use board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use error::{BoardError, LayoutError};
