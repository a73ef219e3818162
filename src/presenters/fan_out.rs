use crate::controllers::events::step_event::StepEvent;
use crate::controllers::ports::presenter::VisualizerPresenterPort;
use std::sync::Arc;

/// Hands each event to several presenters in order.
#[derive(Default)]
pub struct FanOutPresenter {
    presenters: Vec<Arc<dyn VisualizerPresenterPort>>,
}

impl FanOutPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, presenter: Arc<dyn VisualizerPresenterPort>) -> Self {
        self.presenters.push(presenter);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presenters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presenters.is_empty()
    }
}

impl VisualizerPresenterPort for FanOutPresenter {
    fn present(&self, event: StepEvent) {
        if let Some((last, rest)) = self.presenters.split_last() {
            for presenter in rest {
                presenter.present(event.clone());
            }
            last.present(event);
        }
    }
}
