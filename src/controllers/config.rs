use crate::core::data::path_grid::GridCoord;
use crate::core::engine::step_clock::StepClockConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortingConfig {
    pub size: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub speed: u8,
    /// Fixed seed for reproducible arrays; entropy when absent.
    pub seed: Option<u64>,
    pub clock: StepClockConfig,
}

impl SortingConfig {
    #[must_use]
    pub fn clamp_size(&self, size: usize) -> usize {
        size.clamp(self.min_size, self.max_size.max(self.min_size))
    }
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            size: 40,
            min_size: 10,
            max_size: 100,
            speed: 60,
            seed: None,
            clock: StepClockConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathfindingConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: GridCoord,
    pub end: GridCoord,
    pub speed: u8,
    pub maze_density: f64,
    pub seed: Option<u64>,
    pub clock: StepClockConfig,
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 40,
            start: GridCoord::new(5, 5),
            end: GridCoord::new(14, 34),
            speed: 25,
            maze_density: 0.3,
            seed: None,
            clock: StepClockConfig::default(),
        }
    }
}
