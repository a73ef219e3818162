use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::engine::session::{MAX_SPEED, RunSession, SharedSession, clamp_speed};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepClockConfig {
    /// Delay contributed by each speed notch below the maximum, in milliseconds.
    pub step_ms: u64,
}

impl Default for StepClockConfig {
    fn default() -> Self {
        Self { step_ms: 5 }
    }
}

/// Delay between two animation steps: `(101 - speed) * step_ms`.
///
/// Speed 100 gives one step unit, speed 1 gives a hundred.
#[must_use]
pub fn compute_delay(speed: u8, config: &StepClockConfig) -> Duration {
    let notches = u64::from(MAX_SPEED) + 1 - u64::from(clamp_speed(speed));
    Duration::from_millis(notches * config.step_ms)
}

/// Suspension point shared by every state machine of one visualizer.
#[derive(Clone)]
pub struct StepClock {
    session: Arc<SharedSession>,
    config: StepClockConfig,
}

impl StepClock {
    pub(crate) fn new(session: Arc<SharedSession>, config: StepClockConfig) -> Self {
        Self { session, config }
    }

    #[must_use]
    pub fn config(&self) -> StepClockConfig {
        self.config
    }

    #[must_use]
    pub fn compute_delay(&self, speed: u8) -> Duration {
        compute_delay(speed, &self.config)
    }

    /// Suspends the calling algorithm until its next step is due.
    ///
    /// Returns `Err(Cancelled)` when a stop was requested before the call,
    /// while suspended, or when a newer session replaced this one.
    pub fn wait(&self, override_delay: Option<Duration>) -> Result<(), Cancelled> {
        let mut state = self.session.lock();
        let epoch = state.epoch;

        if state.stop_requested {
            trace!("wait refused, stop already requested");
            return Err(Cancelled);
        }

        if state.is_paused {
            state = self.park(state);
        } else {
            let delay = override_delay.unwrap_or_else(|| self.compute_delay(state.speed));
            let (guard, _) = self
                .session
                .wake
                .wait_timeout_while(state, delay, |s| !s.stop_requested && s.epoch == epoch)
                .unwrap_or_else(PoisonError::into_inner);
            state = guard;

            if state.is_paused && !state.stop_requested && state.epoch == epoch {
                state = self.park(state);
            }
        }

        if state.stop_requested || state.epoch != epoch {
            trace!("wait observed stop");
            return Err(Cancelled);
        }

        Ok(())
    }

    fn park<'a>(&self, mut state: MutexGuard<'a, RunSession>) -> MutexGuard<'a, RunSession> {
        let ticket = state.next_ticket;
        state.next_ticket += 1;
        state.parked = Some(ticket);
        trace!(ticket, "parked until resume, step or stop");

        self.session
            .wake
            .wait_while(state, |s| s.parked == Some(ticket))
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl CancelToken for StepClock {
    fn is_cancelled(&self) -> bool {
        self.session.lock().stop_requested
    }
}
