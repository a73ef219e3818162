use crate::core::actions::cancellation::Cancelled;
use crate::core::data::path_grid::PathGrid;
use crate::core::data::sortable_sequence::SortableSequence;
use crate::core::engine::ports::step_sink::StepSink;
use crate::core::engine::step_clock::StepClock;
use std::time::Duration;

/// What a state machine sees of the engine: publish, highlight, then wait.
pub struct Stepper<'a> {
    clock: &'a StepClock,
    sink: &'a dyn StepSink,
}

impl<'a> Stepper<'a> {
    #[must_use]
    pub fn new(clock: &'a StepClock, sink: &'a dyn StepSink) -> Self {
        Self { clock, sink }
    }

    pub fn highlight(&self, line: usize) {
        self.sink.line_highlighted(Some(line));
    }

    pub fn publish_sequence(&self, sequence: &SortableSequence) {
        self.sink.sequence_changed(sequence);
    }

    pub fn publish_grid(&self, grid: &PathGrid) {
        self.sink.grid_changed(grid);
    }

    pub fn publish_visited(&self, nodes_visited: usize) {
        self.sink.visited_changed(nodes_visited);
    }

    pub fn wait(&self) -> Result<(), Cancelled> {
        self.clock.wait(None)
    }

    pub fn wait_for(&self, delay: Duration) -> Result<(), Cancelled> {
        self.clock.wait(Some(delay))
    }
}
