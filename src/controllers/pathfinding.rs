use crate::controllers::config::PathfindingConfig;
use crate::controllers::errors::VisualizerError;
use crate::controllers::events::step_event::{RunOutcome, StepEvent};
use crate::controllers::ports::presenter::VisualizerPresenterPort;
use crate::controllers::sink::PresenterSink;
use crate::controllers::worker::RunWorker;
use crate::core::algorithms::pathfinding::{SearchOutcome, SearchStats, run_astar};
use crate::core::data::path_grid::{CellKind, GridCoord, PathGrid};
use crate::core::engine::run_controller::RunController;
use crate::core::engine::stepper::Stepper;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns one grid, accepts edits between runs and animates A* over it.
pub struct PathfindingVisualizer {
    config: PathfindingConfig,
    controller: RunController,
    rng: StdRng,
    grid: Option<PathGrid>,
    worker: RunWorker<PathGrid, SearchOutcome>,
    stats: SearchStats,
    is_complete: bool,
    last_outcome: Option<SearchOutcome>,
}

impl PathfindingVisualizer {
    pub fn new(config: PathfindingConfig) -> Result<Self, VisualizerError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: PathfindingConfig, rng: StdRng) -> Result<Self, VisualizerError> {
        let grid = PathGrid::new(config.rows, config.cols, config.start, config.end)?;

        Ok(Self {
            controller: RunController::with_clock_config(config.speed, config.clock),
            config,
            rng,
            grid: Some(grid),
            worker: RunWorker::idle(),
            stats: SearchStats::default(),
            is_complete: false,
            last_outcome: None,
        })
    }

    /// The grid, or `None` while a search owns it.
    #[must_use]
    pub fn grid(&self) -> Option<&PathGrid> {
        self.grid.as_ref()
    }

    #[must_use]
    pub fn controller(&self) -> &RunController {
        &self.controller
    }

    #[must_use]
    pub fn config(&self) -> &PathfindingConfig {
        &self.config
    }

    /// Statistics of the last finished search.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn toggle_wall(&mut self, coord: GridCoord) -> Result<CellKind, VisualizerError> {
        let kind = self.grid_for_edit()?.toggle_wall(coord)?;
        self.reset_results();
        Ok(kind)
    }

    pub fn move_start(&mut self, coord: GridCoord) -> Result<(), VisualizerError> {
        let grid = self.grid_for_edit()?;
        grid.set_start(coord)?;
        debug!(%coord, "start moved");
        self.reset_results();
        Ok(())
    }

    pub fn move_end(&mut self, coord: GridCoord) -> Result<(), VisualizerError> {
        let grid = self.grid_for_edit()?;
        grid.set_end(coord)?;
        debug!(%coord, "end moved");
        self.reset_results();
        Ok(())
    }

    /// Randomly re-walls the grid; `None` uses the configured density.
    pub fn generate_maze(&mut self, density: Option<f64>) -> Result<(), VisualizerError> {
        let density = density.unwrap_or(self.config.maze_density);
        self.grid_for_edit()?;
        if let Some(grid) = self.grid.as_mut() {
            grid.generate_maze(density, &mut self.rng);
            debug!(density, walls = grid.count_kind(CellKind::Wall), "maze generated");
        }
        self.reset_results();
        Ok(())
    }

    /// Removes walls and search marks. Start and end stay where they are.
    pub fn clear(&mut self) -> Result<(), VisualizerError> {
        self.grid_for_edit()?.clear();
        self.reset_results();
        Ok(())
    }

    /// Starts A* on a worker thread. Progress goes to `presenter`.
    pub fn run(&mut self, presenter: Arc<dyn VisualizerPresenterPort>) -> Result<(), VisualizerError> {
        if self.worker.is_active() {
            return Err(VisualizerError::AlreadyRunning);
        }
        self.reclaim()?;

        let Some(mut grid) = self.grid.take() else {
            return Err(VisualizerError::AlreadyRunning);
        };

        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            walls = grid.count_kind(CellKind::Wall),
            speed = self.controller.speed(),
            "starting search"
        );
        self.reset_results();
        self.controller.start();

        let controller = self.controller.clone();
        let fallback = grid.clone();
        let spawned = self.worker.spawn("search-worker", move || {
            let clock = controller.clock();
            let sink = PresenterSink::new(Arc::clone(&presenter), controller.clone());
            let stepper = Stepper::new(&clock, &sink);

            let outcome = run_astar(&mut grid, &stepper);

            if let Some(stats) = outcome.stats() {
                presenter.present(StepEvent::Stats(stats));
            }
            controller.stop();
            presenter.present(StepEvent::Finished(RunOutcome::Search(outcome)));
            (grid, outcome)
        });

        if let Err(err) = spawned {
            self.controller.stop();
            self.grid = Some(fallback);
            return Err(err);
        }
        Ok(())
    }

    /// Blocks until the current search returns and takes the grid back.
    ///
    /// Once the grid was already reclaimed this reports the last outcome,
    /// until an edit discards it.
    pub fn wait_for_completion(&mut self) -> Result<SearchOutcome, VisualizerError> {
        let Some(joined) = self.worker.join() else {
            return self.last_outcome.ok_or(VisualizerError::NotStarted);
        };

        match joined {
            Ok((grid, outcome)) => {
                info!(?outcome, "search finished");
                self.grid = Some(grid);
                self.last_outcome = Some(outcome);
                if let Some(stats) = outcome.stats() {
                    self.stats = stats;
                    self.is_complete = true;
                }
                Ok(outcome)
            }
            Err(err) => {
                warn!(error = %err, "search worker failed");
                self.controller.stop();
                self.grid = Some(PathGrid::new(
                    self.config.rows,
                    self.config.cols,
                    self.config.start,
                    self.config.end,
                )?);
                Err(err)
            }
        }
    }

    fn grid_for_edit(&mut self) -> Result<&mut PathGrid, VisualizerError> {
        if self.worker.is_active() {
            return Err(VisualizerError::Busy);
        }
        self.reclaim()?;
        self.grid.as_mut().ok_or(VisualizerError::Busy)
    }

    fn reclaim(&mut self) -> Result<(), VisualizerError> {
        if self.worker.is_finished() {
            self.wait_for_completion()?;
        }
        Ok(())
    }

    fn reset_results(&mut self) {
        self.stats = SearchStats::default();
        self.is_complete = false;
        self.last_outcome = None;
    }
}

impl Drop for PathfindingVisualizer {
    fn drop(&mut self) {
        self.controller.stop();
        let _ = self.worker.join();
    }
}
