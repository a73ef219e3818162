use crate::core::data::path_grid::PathGrid;
use crate::core::data::sortable_sequence::SortableSequence;

/// Receives everything a state machine publishes between suspension points.
pub trait StepSink: Send + Sync {
    fn sequence_changed(&self, sequence: &SortableSequence);

    fn grid_changed(&self, grid: &PathGrid);

    fn visited_changed(&self, nodes_visited: usize);

    fn line_highlighted(&self, line: Option<usize>);
}

/// Sink that drops every publication.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl StepSink for DiscardSink {
    fn sequence_changed(&self, _: &SortableSequence) {}

    fn grid_changed(&self, _: &PathGrid) {}

    fn visited_changed(&self, _: usize) {}

    fn line_highlighted(&self, _: Option<usize>) {}
}
