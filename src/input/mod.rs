//! Input adapters: turn outside requests into visualizer runs.

pub mod cli;
