use crate::config::AppConfig;
use crate::controllers::pathfinding::PathfindingVisualizer;
use crate::core::algorithms::pathfinding::SearchOutcome;
use crate::core::data::path_grid::{CellKind, GridCoord};
use crate::input::cli::args::PathArgs;
use crate::input::cli::commands::build_presenter;
use anyhow::ensure;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSummary {
    pub outcome: SearchOutcome,
    pub walls: usize,
    pub elapsed: Duration,
}

pub struct RunPathCommand {
    args: PathArgs,
    config: AppConfig,
}

impl RunPathCommand {
    #[must_use]
    pub fn new(args: PathArgs, config: AppConfig) -> Self {
        Self { args, config }
    }

    pub fn execute(&self) -> anyhow::Result<PathSummary> {
        let mut pathfinding = self.config.pathfinding;
        if self.args.rows.is_some() || self.args.cols.is_some() {
            pathfinding.rows = self.args.rows.unwrap_or(pathfinding.rows);
            pathfinding.cols = self.args.cols.unwrap_or(pathfinding.cols);
            ensure!(
                pathfinding.rows.saturating_mul(pathfinding.cols) >= 2,
                "a {}x{} grid cannot hold distinct start and end cells",
                pathfinding.rows,
                pathfinding.cols
            );
            // Unless given explicitly, endpoints move to the corners of the new size.
            pathfinding.start = GridCoord::new(0, 0);
            pathfinding.end = GridCoord::new(pathfinding.rows - 1, pathfinding.cols - 1);
        }
        if let Some(start) = self.args.start {
            pathfinding.start = start;
        }
        if let Some(end) = self.args.end {
            pathfinding.end = end;
        }
        if let Some(speed) = self.args.speed {
            pathfinding.speed = speed;
        }
        if let Some(density) = self.args.maze_density {
            pathfinding.maze_density = density;
        }
        if self.args.seed.is_some() {
            pathfinding.seed = self.args.seed;
        }

        let mut visualizer = PathfindingVisualizer::new(pathfinding)?;
        if pathfinding.maze_density > 0.0 {
            visualizer.generate_maze(None)?;
        }
        let walls = visualizer
            .grid()
            .map_or(0, |grid| grid.count_kind(CellKind::Wall));

        let presenter = build_presenter(&self.args.frames, self.config.frames)?;
        let start = Instant::now();
        visualizer.run(presenter)?;
        let outcome = visualizer.wait_for_completion()?;

        Ok(PathSummary {
            outcome,
            walls,
            elapsed: start.elapsed(),
        })
    }
}
