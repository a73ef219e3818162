use crate::controllers::errors::VisualizerError;
use std::any::Any;
use std::thread::{self, JoinHandle};

/// The thread running one algorithm, owning the model until it is joined.
pub(crate) struct RunWorker<M, O> {
    handle: Option<JoinHandle<(M, O)>>,
}

impl<M, O> RunWorker<M, O>
where
    M: Send + 'static,
    O: Send + 'static,
{
    pub fn idle() -> Self {
        Self { handle: None }
    }

    pub fn spawn<F>(&mut self, name: &str, run: F) -> Result<(), VisualizerError>
    where
        F: FnOnce() -> (M, O) + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name(name.to_owned())
            .spawn(run)
            .map_err(VisualizerError::Spawn)?;
        self.handle = Some(handle);
        Ok(())
    }

    /// A worker exists and has not returned yet.
    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_some_and(JoinHandle::is_finished)
    }

    /// Blocks until the worker returns. `None` when nothing was spawned.
    pub fn join(&mut self) -> Option<Result<(M, O), VisualizerError>> {
        let handle = self.handle.take()?;
        Some(
            handle
                .join()
                .map_err(|payload| VisualizerError::RunPanicked(panic_message(payload.as_ref()))),
        )
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}
