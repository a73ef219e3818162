//! Visualizers: own a model, guard edits and run algorithms on a worker.

pub mod config;
pub mod errors;
pub mod events;
pub mod pathfinding;
pub mod ports;
pub(crate) mod sink;
pub mod sorting;
pub(crate) mod worker;
