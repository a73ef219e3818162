//! Helpers shared by the state machine tests.

use crate::core::data::path_grid::PathGrid;
use crate::core::data::sortable_sequence::SortableSequence;
use crate::core::engine::ports::step_sink::StepSink;
use crate::core::engine::run_controller::RunController;
use crate::core::engine::step_clock::StepClockConfig;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Published {
    Sequence(Vec<u32>),
    Grid(PathGrid),
    Visited(usize),
    Line(Option<usize>),
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Published>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<Published> {
        self.events.lock().unwrap().clone()
    }

    pub fn sequences(&self) -> Vec<Vec<u32>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Published::Sequence(values) => Some(values),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<usize> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Published::Line(line) => line,
                _ => None,
            })
            .collect()
    }

    pub fn grid_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, Published::Grid(_)))
            .count()
    }
}

impl StepSink for RecordingSink {
    fn sequence_changed(&self, sequence: &SortableSequence) {
        self.events
            .lock()
            .unwrap()
            .push(Published::Sequence(sequence.values().to_vec()));
    }

    fn grid_changed(&self, grid: &PathGrid) {
        self.events.lock().unwrap().push(Published::Grid(grid.clone()));
    }

    fn visited_changed(&self, nodes_visited: usize) {
        self.events
            .lock()
            .unwrap()
            .push(Published::Visited(nodes_visited));
    }

    fn line_highlighted(&self, line: Option<usize>) {
        self.events.lock().unwrap().push(Published::Line(line));
    }
}

/// Running controller whose steps never sleep.
pub fn instant_controller() -> RunController {
    let controller = RunController::with_clock_config(100, StepClockConfig { step_ms: 0 });
    controller.start();
    controller
}
