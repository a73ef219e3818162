//! Stateless mapping from model snapshots to what gets drawn.

pub mod bars;
pub mod cells;
pub mod palette;
pub mod rasterize;
