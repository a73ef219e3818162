use crate::core::engine::session::{RunStatus, SharedSession, clamp_speed};
use crate::core::engine::step_clock::{StepClock, StepClockConfig};
use std::sync::Arc;
use tracing::debug;

/// Run/pause/step/stop coordinator for one visualizer.
///
/// Cloning yields another handle onto the same session, so the UI side and
/// the worker running the algorithm can both hold one.
#[derive(Clone)]
pub struct RunController {
    session: Arc<SharedSession>,
    clock_config: StepClockConfig,
}

impl RunController {
    #[must_use]
    pub fn new(initial_speed: u8) -> Self {
        Self::with_clock_config(initial_speed, StepClockConfig::default())
    }

    #[must_use]
    pub fn with_clock_config(initial_speed: u8, clock_config: StepClockConfig) -> Self {
        Self {
            session: Arc::new(SharedSession::new(initial_speed)),
            clock_config,
        }
    }

    /// Suspension primitive bound to this controller's session.
    #[must_use]
    pub fn clock(&self) -> StepClock {
        StepClock::new(Arc::clone(&self.session), self.clock_config)
    }

    /// Begins a fresh session, discarding whatever the previous one held.
    pub fn start(&self) {
        let mut state = self.session.lock();
        state.is_running = true;
        state.is_paused = false;
        state.stop_requested = false;
        state.highlighted_line = None;
        state.epoch += 1;
        state.release_parked();
        debug!(epoch = state.epoch, "run started");
        drop(state);

        self.session.wake.notify_all();
    }

    /// Requests cancellation and frees any parked or sleeping step.
    ///
    /// Calling it on a stopped session leaves every flag unchanged.
    pub fn stop(&self) {
        let mut state = self.session.lock();
        let was_running = state.is_running;
        state.stop_requested = true;
        state.is_running = false;
        state.is_paused = false;
        state.highlighted_line = None;
        let released = state.release_parked();
        drop(state);

        if was_running || released {
            debug!(released, "run stopped");
        }
        self.session.wake.notify_all();
    }

    /// Marks the session paused. Steps already sleeping park once their delay ends.
    pub fn pause(&self) {
        let mut state = self.session.lock();
        if !state.is_running {
            return;
        }
        state.is_paused = true;
        debug!("run paused");
    }

    pub fn resume(&self) {
        let mut state = self.session.lock();
        state.is_paused = false;
        let released = state.release_parked();
        drop(state);

        debug!(released, "run resumed");
        self.session.wake.notify_all();
    }

    /// Lets exactly one parked step through without leaving the paused state.
    ///
    /// Returns whether a step was actually released.
    pub fn step(&self) -> bool {
        let mut state = self.session.lock();
        let released = state.release_parked();
        drop(state);

        if released {
            debug!("single step released");
            self.session.wake.notify_all();
        }
        released
    }

    pub fn set_speed(&self, speed: u8) {
        self.session.lock().speed = clamp_speed(speed);
    }

    #[must_use]
    pub fn speed(&self) -> u8 {
        self.session.lock().speed
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session.lock().is_running
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.session.lock().is_paused
    }

    #[must_use]
    pub fn is_stop_requested(&self) -> bool {
        self.session.lock().stop_requested
    }

    /// Whether a step is currently parked waiting for resume, step or stop.
    #[must_use]
    pub fn has_parked_step(&self) -> bool {
        self.session.lock().parked.is_some()
    }

    #[must_use]
    pub fn highlighted_line(&self) -> Option<usize> {
        self.session.lock().highlighted_line
    }

    pub fn set_highlighted_line(&self, line: Option<usize>) {
        self.session.lock().highlighted_line = line;
    }

    #[must_use]
    pub fn status(&self) -> RunStatus {
        RunStatus::from(&*self.session.lock())
    }
}

impl Default for RunController {
    fn default() -> Self {
        Self::new(50)
    }
}
