use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridstar_core::CellId;

/// Totally ordered search priority (`f = g + h`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Priority(f64);

impl Priority {
    pub(crate) const INFINITE: Self = Self(f64::INFINITY);

    #[inline]
    pub(crate) fn new(f: f64) -> Self {
        Self(f)
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A pending expansion, ordered for use in `BinaryHeap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: Priority,
    pub(crate) cell: CellId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest priority first, and the
        // lower id among equal priorities.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of cells awaiting expansion.
///
/// Priorities are never updated in place: a cell that gets cheaper is pushed
/// again and the older entry is recognised as stale when popped.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    #[inline]
    pub(crate) fn push(&mut self, cell: CellId, priority: Priority) {
        self.heap.push(FrontierEntry { priority, cell });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
