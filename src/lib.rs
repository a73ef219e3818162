mod config;
mod controllers;
mod core;
mod input;
pub mod logging;
mod presenters;
mod storage;

pub use config::{AppConfig, ConfigError};

pub use controllers::config::{PathfindingConfig, SortingConfig};
pub use controllers::errors::VisualizerError;
pub use controllers::events::step_event::{RunOutcome, StepEvent};
pub use controllers::pathfinding::PathfindingVisualizer;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::ports::presenter::VisualizerPresenterPort;
pub use controllers::sorting::SortingVisualizer;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::algorithms::pathfinding::{ASTAR, SearchOutcome, SearchStats, run_astar};
pub use crate::core::algorithms::sorting::{SortKind, SortOutcome, run_sort};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::path_grid::{Cell, CellKind, GridCoord, GridError, PathGrid};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::pseudocode::{AlgorithmInfo, PseudocodeLine};
pub use crate::core::data::sortable_sequence::SortableSequence;
pub use crate::core::engine::ports::step_sink::{DiscardSink, StepSink};
pub use crate::core::engine::run_controller::RunController;
pub use crate::core::engine::session::{MAX_SPEED, MIN_SPEED, RunStatus};
pub use crate::core::engine::step_clock::{StepClock, StepClockConfig, compute_delay};
pub use crate::core::engine::stepper::Stepper;
pub use crate::core::projection::bars::{BarStyle, bar_height_percent, bar_style, bar_styles};
pub use crate::core::projection::cells::{CellClass, GridSnapshot, cell_class};
pub use crate::core::projection::palette::{BarPalette, GridPalette};
pub use crate::core::projection::rasterize::{rasterize_grid, rasterize_sequence};

pub use input::cli::args::{Cli, Command};
pub use input::cli::commands::list_algorithms::describe_algorithms;
pub use input::cli::commands::run_path::{PathSummary, RunPathCommand};
pub use input::cli::commands::run_sort::{RunSortCommand, SortSummary};

pub use presenters::fan_out::FanOutPresenter;
pub use presenters::file::frames::{FrameOptions, FramePresenterError, PpmFramePresenter};
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::log::TracingPresenter;
pub use presenters::recording::RecordingPresenter;
