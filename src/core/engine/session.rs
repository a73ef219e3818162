use serde::Serialize;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 100;

#[must_use]
pub fn clamp_speed(speed: u8) -> u8 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// Live run/pause/stop state for one visualizer instance.
///
/// `is_paused` implies `is_running`. `stop_requested` only goes back to
/// `false` when a new session starts, which also bumps `epoch` so waiters
/// parked in an older session never resume into the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunSession {
    pub is_running: bool,
    pub is_paused: bool,
    pub speed: u8,
    pub stop_requested: bool,
    pub parked: Option<u64>,
    pub next_ticket: u64,
    pub epoch: u64,
    pub highlighted_line: Option<usize>,
}

impl RunSession {
    pub fn new(speed: u8) -> Self {
        Self {
            is_running: false,
            is_paused: false,
            speed: clamp_speed(speed),
            stop_requested: false,
            parked: None,
            next_ticket: 0,
            epoch: 0,
            highlighted_line: None,
        }
    }

    /// Hands the parked waiter (if any) back to the algorithm.
    pub fn release_parked(&mut self) -> bool {
        self.parked.take().is_some()
    }
}

pub(crate) struct SharedSession {
    state: Mutex<RunSession>,
    pub wake: Condvar,
}

impl SharedSession {
    pub fn new(speed: u8) -> Self {
        Self {
            state: Mutex::new(RunSession::new(speed)),
            wake: Condvar::new(),
        }
    }

    /// Session state is plain flags, so a panic while holding the lock cannot
    /// leave it half-updated; poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, RunSession> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Snapshot of the controller flags exposed to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStatus {
    pub is_running: bool,
    pub is_paused: bool,
    pub speed: u8,
    pub highlighted_line: Option<usize>,
}

impl From<&RunSession> for RunStatus {
    fn from(session: &RunSession) -> Self {
        Self {
            is_running: session.is_running,
            is_paused: session.is_paused,
            speed: session.speed,
            highlighted_line: session.highlighted_line,
        }
    }
}
