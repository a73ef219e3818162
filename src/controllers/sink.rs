use crate::controllers::events::step_event::StepEvent;
use crate::controllers::ports::presenter::VisualizerPresenterPort;
use crate::core::algorithms::pathfinding::SearchStats;
use crate::core::data::path_grid::PathGrid;
use crate::core::data::sortable_sequence::SortableSequence;
use crate::core::engine::ports::step_sink::StepSink;
use crate::core::engine::run_controller::RunController;
use crate::core::projection::cells::GridSnapshot;
use std::sync::Arc;

/// Forwards state machine output to a presenter, mirroring the highlighted
/// line into the controller so status snapshots stay current.
pub(crate) struct PresenterSink {
    presenter: Arc<dyn VisualizerPresenterPort>,
    controller: RunController,
}

impl PresenterSink {
    pub fn new(presenter: Arc<dyn VisualizerPresenterPort>, controller: RunController) -> Self {
        Self {
            presenter,
            controller,
        }
    }
}

impl StepSink for PresenterSink {
    fn sequence_changed(&self, sequence: &SortableSequence) {
        self.presenter
            .present(StepEvent::Sequence(sequence.values().to_vec()));
    }

    fn grid_changed(&self, grid: &PathGrid) {
        self.presenter
            .present(StepEvent::Grid(GridSnapshot::from_grid(grid)));
    }

    fn visited_changed(&self, nodes_visited: usize) {
        self.presenter.present(StepEvent::Stats(SearchStats {
            nodes_visited,
            path_length: 0,
        }));
    }

    fn line_highlighted(&self, line: Option<usize>) {
        self.controller.set_highlighted_line(line);
        self.presenter.present(StepEvent::Highlight(line));
    }
}
