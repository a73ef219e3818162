use thiserror::Error;

/// How many pixels a rasteriser processes between two cancellation checks.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

/// Control-flow signal raised by a suspension point once a stop was requested.
///
/// Not a user-facing failure: algorithm entry points absorb it and report a
/// cancelled outcome, leaving the model in its last published state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("execution cancelled")]
pub struct Cancelled;

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
