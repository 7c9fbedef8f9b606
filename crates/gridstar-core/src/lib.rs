//! **gridstar-core** — foundational types for grid pathfinding.
//!
//! This crate provides the geometry primitives shared across the *gridstar*
//! workspace ([`Point`], [`Range`]) and the opaque [`CellId`] that search
//! code uses to name grid positions.

pub mod cell;
pub mod geom;

pub use cell::CellId;
pub use geom::{Point, Range, RangeIter};
