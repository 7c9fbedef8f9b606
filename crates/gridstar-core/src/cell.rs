//! Opaque cell identifiers.

use std::fmt;

/// Identifier of a single grid position.
///
/// The mapping between a `CellId` and 2D coordinates belongs to whichever
/// grid hands the id out; search code only compares, orders and indexes by
/// it. Grids in this workspace number their cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CellId(usize);

impl CellId {
    /// Wrap a raw index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index, suitable for addressing per-cell storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for CellId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<CellId> for usize {
    fn from(id: CellId) -> Self {
        id.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
