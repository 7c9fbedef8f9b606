use gridstar_core::CellId;
use log::{debug, trace};

use crate::error::{Endpoint, SearchError};
use crate::frontier::{Frontier, Priority};
use crate::heuristic::euclidean;
use crate::record::{Cost, SearchRecord};
use crate::traits::GridModel;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped and closed.
    pub expanded: usize,
    /// Entries pushed onto the frontier, duplicates included.
    pub pushed: usize,
    /// Popped entries discarded because a cheaper entry superseded them.
    pub stale: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

/// Result of [`find_path_with_stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Cells from start to end inclusive, or empty when there is nothing to
    /// traverse.
    pub path: Vec<CellId>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Whether a non-trivial path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of unit steps along the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Compute a minimum-step path from `start` to `end` using A*.
///
/// Returns the cells of the path with both endpoints included. The result is
/// empty when `start == end` or when obstacles separate the two cells; both
/// are ordinary outcomes, not errors.
///
/// Fails when an endpoint is outside the grid or is an obstacle, or when the
/// grid reports a neighbour id outside its own cells.
pub fn find_path<G: GridModel + ?Sized>(
    grid: &G,
    start: CellId,
    end: CellId,
) -> Result<Vec<CellId>, SearchError> {
    find_path_with_stats(grid, start, end).map(|outcome| outcome.path)
}

/// Same as [`find_path`], also reporting [`SearchStats`].
pub fn find_path_with_stats<G: GridModel + ?Sized>(
    grid: &G,
    start: CellId,
    end: CellId,
) -> Result<SearchOutcome, SearchError> {
    check_endpoint(grid, start, Endpoint::Start)?;
    check_endpoint(grid, end, Endpoint::End)?;

    if start == end {
        return Ok(SearchOutcome::default());
    }

    let goal = grid.coordinates_of(end);
    trace!(
        "astar: start={} {} end={} {}",
        start,
        grid.coordinates_of(start),
        end,
        goal
    );

    let cell_count = grid.cell_count();
    let mut records = vec![SearchRecord::default(); cell_count];
    let mut frontier = Frontier::default();
    let mut stats = SearchStats::default();
    let mut nbuf: Vec<CellId> = Vec::with_capacity(4);

    // Initialise the start node.
    {
        let node = &mut records[start.index()];
        node.g = Cost::Finite(0);
        node.f = Priority::new(euclidean(grid.coordinates_of(start), goal));
        frontier.push(start, node.f);
        stats.pushed += 1;
        stats.peak_frontier = 1;
    }

    let found = 'search: loop {
        let Some(current) = frontier.pop() else {
            break 'search false;
        };

        let ci = current.cell.index();

        if records[ci].is_stale(current.priority) {
            stats.stale += 1;
            continue;
        }

        if current.cell == end {
            break 'search true;
        }

        records[ci].closed = true;
        stats.expanded += 1;
        let current_g = records[ci].expansion_cost(current.cell)?;

        nbuf.clear();
        grid.neighbors(current.cell, &mut nbuf);

        for &nb in nbuf.iter() {
            let n = records
                .get_mut(nb.index())
                .ok_or(SearchError::NeighborOutOfGrid {
                    cell: current.cell,
                    neighbor: nb,
                    cell_count,
                })?;
            if n.closed {
                continue;
            }
            let tentative_g = current_g + 1;
            if Cost::Finite(tentative_g) >= n.g {
                continue;
            }

            n.improve(
                tentative_g,
                euclidean(grid.coordinates_of(nb), goal),
                current.cell,
            );
            frontier.push(nb, n.f);
            stats.pushed += 1;
        }

        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    };

    if !found {
        debug!(
            "astar: no path from {} to {} (expanded {}, pushed {}, stale {})",
            start, end, stats.expanded, stats.pushed, stats.stale
        );
        return Ok(SearchOutcome {
            path: Vec::new(),
            stats,
        });
    }

    let path = reconstruct(&records, start, end)?;
    debug!(
        "astar: {} -> {} in {} steps (expanded {}, pushed {}, stale {})",
        start,
        end,
        path.len() - 1,
        stats.expanded,
        stats.pushed,
        stats.stale
    );
    Ok(SearchOutcome { path, stats })
}

fn check_endpoint<G: GridModel + ?Sized>(
    grid: &G,
    cell: CellId,
    endpoint: Endpoint,
) -> Result<(), SearchError> {
    let cell_count = grid.cell_count();
    if cell.index() >= cell_count {
        return Err(SearchError::EndpointOutOfGrid {
            endpoint,
            cell,
            cell_count,
        });
    }
    if grid.is_obstacle(cell) {
        return Err(SearchError::EndpointIsObstacle { endpoint, cell });
    }
    Ok(())
}

/// Walk predecessors back from `end` to `start`.
fn reconstruct(
    records: &[SearchRecord],
    start: CellId,
    end: CellId,
) -> Result<Vec<CellId>, SearchError> {
    let mut path = Vec::new();
    let mut ci = end;
    while ci != start {
        // A chain longer than the grid can only be a cycle.
        if path.len() >= records.len() {
            return Err(SearchError::BrokenPredecessorChain { at: ci });
        }
        path.push(ci);
        ci = records[ci.index()]
            .predecessor
            .ok_or(SearchError::BrokenPredecessorChain { at: ci })?;
    }
    path.push(start);
    path.reverse();
    Ok(path)
}
