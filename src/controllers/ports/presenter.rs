use crate::controllers::events::step_event::StepEvent;

pub trait VisualizerPresenterPort: Send + Sync {
    fn present(&self, event: StepEvent);
}
