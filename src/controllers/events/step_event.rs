use crate::core::algorithms::pathfinding::{SearchOutcome, SearchStats};
use crate::core::algorithms::sorting::SortOutcome;
use crate::core::projection::cells::GridSnapshot;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "outcome", rename_all = "lowercase")]
pub enum RunOutcome {
    Sort(SortOutcome),
    Search(SearchOutcome),
}

/// Everything a visualizer tells its presenter while a run progresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum StepEvent {
    Sequence(Vec<u32>),
    Grid(GridSnapshot),
    Highlight(Option<usize>),
    Stats(SearchStats),
    Finished(RunOutcome),
}

impl StepEvent {
    /// Whether the event carries a new model snapshot worth drawing.
    #[must_use]
    pub fn is_frame(&self) -> bool {
        matches!(self, StepEvent::Sequence(_) | StepEvent::Grid(_))
    }
}
