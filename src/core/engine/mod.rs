//! Stepwise-execution engine shared by every visualizer.
//!
//! - [`RunController`](run_controller::RunController) owns the run session and
//!   exposes start, stop, pause, resume and step.
//! - [`StepClock`](step_clock::StepClock) is the suspension point algorithms
//!   call between mutations.
//! - [`Stepper`](stepper::Stepper) bundles the clock with a
//!   [`StepSink`](ports::step_sink::StepSink) for the state machines.

pub mod ports;
pub mod run_controller;
pub mod session;
pub mod step_clock;
pub mod stepper;

#[cfg(test)]
pub(crate) mod testing;
