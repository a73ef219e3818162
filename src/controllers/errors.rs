use crate::core::data::path_grid::{GridCoord, GridError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("a run is already in progress")]
    AlreadyRunning,
    #[error("the model cannot be edited while a run is in progress")]
    Busy,
    #[error("the sequence is already sorted")]
    AlreadySorted,
    #[error("sequence of {len} values exceeds the maximum of {max}")]
    SequenceTooLong { len: usize, max: usize },
    #[error("cell {0} is outside the grid")]
    OutOfBounds(GridCoord),
    #[error("cell {0} is occupied by the start or end marker")]
    ProtectedCell(GridCoord),
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
    #[error("the run panicked: {0}")]
    RunPanicked(String),
    #[error("no run has been started")]
    NotStarted,
    #[error("failed to spawn run worker")]
    Spawn(#[source] std::io::Error),
}

impl From<GridError> for VisualizerError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { coord, .. } => Self::OutOfBounds(coord),
            GridError::ProtectedCell(coord) | GridError::Overlap(coord) => {
                Self::ProtectedCell(coord)
            }
            GridError::InvalidDimensions { .. } => Self::InvalidGrid(err.to_string()),
        }
    }
}
