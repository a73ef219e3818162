//! A* search animated over a [`PathGrid`].

pub mod astar;

use crate::core::actions::cancellation::Cancelled;
use crate::core::data::path_grid::PathGrid;
use crate::core::data::pseudocode::AlgorithmInfo;
use crate::core::engine::stepper::Stepper;
use serde::Serialize;
use tracing::debug;

pub const ASTAR: AlgorithmInfo = AlgorithmInfo {
    title: "A* Pathfinding Algorithm",
    complexity: "O(E log V)",
    pseudocode: &[],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    pub nodes_visited: usize,
    /// Number of moves from start to end; zero until a path is found.
    pub path_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    PathFound(SearchStats),
    Exhausted(SearchStats),
    Cancelled,
}

impl SearchOutcome {
    /// Final statistics, absent when the search was cancelled.
    #[must_use]
    pub fn stats(&self) -> Option<SearchStats> {
        match self {
            SearchOutcome::PathFound(stats) | SearchOutcome::Exhausted(stats) => Some(*stats),
            SearchOutcome::Cancelled => None,
        }
    }
}

/// Runs A* from the grid's start to its end, absorbing cancellation.
///
/// A cancelled search leaves the grid as it was at the last published step.
pub fn run_astar(grid: &mut PathGrid, stepper: &Stepper<'_>) -> SearchOutcome {
    debug!(rows = grid.rows(), cols = grid.cols(), start = %grid.start(), end = %grid.end(), "search started");

    match astar::astar_search(grid, stepper) {
        Ok(outcome) => {
            debug!(?outcome, "search finished");
            outcome
        }
        Err(Cancelled) => {
            debug!("search cancelled");
            SearchOutcome::Cancelled
        }
    }
}
