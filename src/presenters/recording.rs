use crate::controllers::events::step_event::{RunOutcome, StepEvent};
use crate::controllers::ports::presenter::VisualizerPresenterPort;
use crate::core::projection::cells::GridSnapshot;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keeps every event it is handed, for replay and for tests.
#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<StepEvent>>,
}

impl RecordingPresenter {
    fn lock(&self) -> MutexGuard<'_, Vec<StepEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn events(&self) -> Vec<StepEvent> {
        self.lock().clone()
    }

    pub fn take_events(&self) -> Vec<StepEvent> {
        std::mem::take(&mut *self.lock())
    }

    #[must_use]
    pub fn sequences(&self) -> Vec<Vec<u32>> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                StepEvent::Sequence(values) => Some(values.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn grids(&self) -> Vec<GridSnapshot> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                StepEvent::Grid(snapshot) => Some(snapshot.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn highlights(&self) -> Vec<Option<usize>> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                StepEvent::Highlight(line) => Some(*line),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn finished(&self) -> Option<RunOutcome> {
        self.lock().iter().rev().find_map(|event| match event {
            StepEvent::Finished(outcome) => Some(*outcome),
            _ => None,
        })
    }
}

impl VisualizerPresenterPort for RecordingPresenter {
    fn present(&self, event: StepEvent) {
        self.lock().push(event);
    }
}
