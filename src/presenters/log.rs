use crate::controllers::events::step_event::{RunOutcome, StepEvent};
use crate::controllers::ports::presenter::VisualizerPresenterPort;
use crate::core::algorithms::pathfinding::SearchOutcome;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, trace};

/// Reports a run through `tracing`: frames at trace, stats at debug and the
/// final outcome at info.
#[derive(Default)]
pub struct TracingPresenter {
    frames: AtomicU64,
}

impl TracingPresenter {
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }
}

impl VisualizerPresenterPort for TracingPresenter {
    fn present(&self, event: StepEvent) {
        if event.is_frame() {
            self.frames.fetch_add(1, Ordering::Relaxed);
        }

        match event {
            StepEvent::Sequence(values) => trace!(?values, "sequence"),
            StepEvent::Grid(snapshot) => trace!(rows = snapshot.rows, cols = snapshot.cols, "grid"),
            StepEvent::Highlight(line) => trace!(?line, "highlight"),
            StepEvent::Stats(stats) => debug!(nodes_visited = stats.nodes_visited, "search progress"),
            StepEvent::Finished(RunOutcome::Sort(outcome)) => {
                info!(?outcome, frames = self.frames(), "sort finished");
            }
            StepEvent::Finished(RunOutcome::Search(SearchOutcome::PathFound(stats))) => info!(
                nodes_visited = stats.nodes_visited,
                path_length = stats.path_length,
                frames = self.frames(),
                "path found"
            ),
            StepEvent::Finished(RunOutcome::Search(SearchOutcome::Exhausted(stats))) => info!(
                nodes_visited = stats.nodes_visited,
                frames = self.frames(),
                "no path exists"
            ),
            StepEvent::Finished(RunOutcome::Search(SearchOutcome::Cancelled)) => {
                info!(frames = self.frames(), "search cancelled");
            }
        }
    }
}
