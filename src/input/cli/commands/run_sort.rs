use crate::config::AppConfig;
use crate::controllers::sorting::SortingVisualizer;
use crate::core::algorithms::sorting::{SortKind, SortOutcome};
use crate::input::cli::args::SortArgs;
use crate::input::cli::commands::build_presenter;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSummary {
    pub algorithm: SortKind,
    pub outcome: SortOutcome,
    pub values: Vec<u32>,
    pub elapsed: Duration,
}

pub struct RunSortCommand {
    args: SortArgs,
    config: AppConfig,
}

impl RunSortCommand {
    #[must_use]
    pub fn new(args: SortArgs, config: AppConfig) -> Self {
        Self { args, config }
    }

    pub fn execute(&self) -> anyhow::Result<SortSummary> {
        let mut sorting = self.config.sorting;
        if let Some(size) = self.args.size {
            sorting.size = size;
        }
        if let Some(speed) = self.args.speed {
            sorting.speed = speed;
        }
        if self.args.seed.is_some() {
            sorting.seed = self.args.seed;
        }

        let algorithm = SortKind::from(self.args.algorithm);
        let mut visualizer = SortingVisualizer::new(sorting);
        if let Some(values) = &self.args.values {
            visualizer.load(values.clone())?;
        }

        let presenter = build_presenter(&self.args.frames, self.config.frames)?;
        let start = Instant::now();
        visualizer.run(algorithm, presenter)?;
        let outcome = visualizer.wait_for_completion()?;

        Ok(SortSummary {
            algorithm,
            outcome,
            values: visualizer
                .sequence()
                .map(|sequence| sequence.values().to_vec())
                .unwrap_or_default(),
            elapsed: start.elapsed(),
        })
    }
}
