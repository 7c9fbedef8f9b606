use gridstar_core::CellId;

use crate::error::SearchError;
use crate::frontier::Priority;

/// Accumulated step cost from the start.
///
/// `Unknown` sorts after every finite cost, so any discovered cost compares
/// strictly smaller than an undiscovered cell's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Cost {
    Finite(u32),
    Unknown,
}

impl Cost {
    #[inline]
    pub(crate) fn finite(self) -> Option<u32> {
        match self {
            Self::Finite(g) => Some(g),
            Self::Unknown => None,
        }
    }
}

/// Per-cell bookkeeping for one search.
///
/// `predecessor` is `Some` exactly when `g` is finite and the cell is not
/// the start. Once `closed` is set, `g` is the true minimum cost.
#[derive(Debug, Clone)]
pub(crate) struct SearchRecord {
    pub(crate) g: Cost,
    pub(crate) f: Priority,
    pub(crate) predecessor: Option<CellId>,
    pub(crate) closed: bool,
}

impl Default for SearchRecord {
    fn default() -> Self {
        Self {
            g: Cost::Unknown,
            f: Priority::INFINITE,
            predecessor: None,
            closed: false,
        }
    }
}

impl SearchRecord {
    /// Record a cheaper route into this cell.
    #[inline]
    pub(crate) fn improve(&mut self, g: u32, h: f64, via: CellId) {
        self.g = Cost::Finite(g);
        self.f = Priority::new(f64::from(g) + h);
        self.predecessor = Some(via);
    }

    /// Whether a frontier entry carrying `priority` no longer describes this
    /// record: either the cell is already closed or a cheaper entry has
    /// replaced it.
    #[inline]
    pub(crate) fn is_stale(&self, priority: Priority) -> bool {
        self.closed || self.f != priority
    }

    /// Cost of the cell `at` being expanded. Every cell that reaches the
    /// frontier has a finite cost.
    #[inline]
    pub(crate) fn expansion_cost(&self, at: CellId) -> Result<u32, SearchError> {
        self.g.finite().ok_or(SearchError::UnknownCostOnExpansion { at })
    }
}
