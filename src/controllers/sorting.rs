use crate::controllers::config::SortingConfig;
use crate::controllers::errors::VisualizerError;
use crate::controllers::events::step_event::{RunOutcome, StepEvent};
use crate::controllers::ports::presenter::VisualizerPresenterPort;
use crate::controllers::sink::PresenterSink;
use crate::controllers::worker::RunWorker;
use crate::core::algorithms::sorting::{SortKind, SortOutcome, run_sort};
use crate::core::data::sortable_sequence::SortableSequence;
use crate::core::engine::run_controller::RunController;
use crate::core::engine::stepper::Stepper;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{info, warn};

/// Owns one sequence and animates sorts over it.
///
/// While a run is active the sequence lives on the worker thread; the
/// presenter sees every intermediate state and [`Self::sequence`] returns
/// `None` until the run is reclaimed.
pub struct SortingVisualizer {
    config: SortingConfig,
    controller: RunController,
    rng: StdRng,
    len: usize,
    sequence: Option<SortableSequence>,
    worker: RunWorker<SortableSequence, SortOutcome>,
    last_outcome: Option<SortOutcome>,
}

impl SortingVisualizer {
    #[must_use]
    pub fn new(config: SortingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    #[must_use]
    pub fn with_rng(config: SortingConfig, mut rng: StdRng) -> Self {
        let len = config.clamp_size(config.size);
        let sequence = SortableSequence::random(len, &mut rng);

        Self {
            controller: RunController::with_clock_config(config.speed, config.clock),
            config,
            rng,
            len,
            sequence: Some(sequence),
            worker: RunWorker::idle(),
            last_outcome: None,
        }
    }

    /// Starts from caller-provided values instead of a random array.
    ///
    /// Shorter input than `min_size` is accepted; longer than `max_size` is not.
    pub fn load(&mut self, values: Vec<u32>) -> Result<(), VisualizerError> {
        self.ensure_idle()?;
        let max = self.config.max_size.max(self.config.min_size);
        if values.len() > max {
            return Err(VisualizerError::SequenceTooLong {
                len: values.len(),
                max,
            });
        }
        self.len = values.len();
        self.sequence = Some(SortableSequence::from_values(values));
        self.last_outcome = None;
        Ok(())
    }

    /// Replaces the sequence with fresh random values.
    pub fn generate(&mut self, len: usize) -> Result<(), VisualizerError> {
        self.ensure_idle()?;
        self.len = self.config.clamp_size(len);
        self.sequence = Some(SortableSequence::random(self.len, &mut self.rng));
        self.last_outcome = None;
        Ok(())
    }

    #[must_use]
    pub fn sequence(&self) -> Option<&SortableSequence> {
        self.sequence.as_ref()
    }

    #[must_use]
    pub fn controller(&self) -> &RunController {
        &self.controller
    }

    #[must_use]
    pub fn config(&self) -> &SortingConfig {
        &self.config
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<SortOutcome> {
        self.last_outcome
    }

    /// Whether the current sequence may be sorted again.
    #[must_use]
    pub fn can_run(&self) -> bool {
        !self.worker.is_active()
            && self
                .sequence
                .as_ref()
                .is_some_and(|sequence| !sequence.is_sorted())
    }

    /// Starts `kind` on a worker thread. Progress goes to `presenter`.
    pub fn run(
        &mut self,
        kind: SortKind,
        presenter: Arc<dyn VisualizerPresenterPort>,
    ) -> Result<(), VisualizerError> {
        if self.worker.is_active() {
            return Err(VisualizerError::AlreadyRunning);
        }
        self.reclaim()?;

        let Some(mut sequence) = self.sequence.take() else {
            return Err(VisualizerError::AlreadyRunning);
        };
        if sequence.is_sorted() {
            self.sequence = Some(sequence);
            return Err(VisualizerError::AlreadySorted);
        }

        info!(algorithm = %kind, len = sequence.len(), speed = self.controller.speed(), "starting sort");
        self.last_outcome = None;
        self.controller.start();

        let controller = self.controller.clone();
        let spawned = self.worker.spawn("sort-worker", move || {
            let clock = controller.clock();
            let sink = PresenterSink::new(Arc::clone(&presenter), controller.clone());
            let stepper = Stepper::new(&clock, &sink);

            let outcome = run_sort(kind, &mut sequence, &stepper);

            controller.stop();
            presenter.present(StepEvent::Finished(RunOutcome::Sort(outcome)));
            (sequence, outcome)
        });

        if let Err(err) = spawned {
            self.controller.stop();
            self.sequence = Some(SortableSequence::random(self.len, &mut self.rng));
            return Err(err);
        }
        Ok(())
    }

    /// Blocks until the current run returns and takes the sequence back.
    pub fn wait_for_completion(&mut self) -> Result<SortOutcome, VisualizerError> {
        match self.worker.join() {
            None => self.last_outcome.ok_or(VisualizerError::NotStarted),
            Some(joined) => self.restore(joined),
        }
    }

    fn ensure_idle(&mut self) -> Result<(), VisualizerError> {
        if self.worker.is_active() {
            return Err(VisualizerError::Busy);
        }
        self.reclaim()
    }

    /// Joins a worker that already returned on its own.
    fn reclaim(&mut self) -> Result<(), VisualizerError> {
        if self.worker.is_finished() {
            self.wait_for_completion()?;
        }
        Ok(())
    }

    fn restore(
        &mut self,
        joined: Result<(SortableSequence, SortOutcome), VisualizerError>,
    ) -> Result<SortOutcome, VisualizerError> {
        match joined {
            Ok((sequence, outcome)) => {
                info!(?outcome, "sort finished");
                self.sequence = Some(sequence);
                self.last_outcome = Some(outcome);
                Ok(outcome)
            }
            Err(err) => {
                // The sequence went down with the worker.
                warn!(error = %err, "sort worker failed");
                self.controller.stop();
                self.sequence = Some(SortableSequence::random(self.len, &mut self.rng));
                Err(err)
            }
        }
    }
}

impl Drop for SortingVisualizer {
    fn drop(&mut self) {
        self.controller.stop();
        let _ = self.worker.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::step_clock::StepClockConfig;
    use crate::presenters::recording::RecordingPresenter;
    use std::thread;
    use std::time::{Duration, Instant};

    fn instant_config() -> SortingConfig {
        SortingConfig {
            size: 12,
            speed: 100,
            seed: Some(7),
            clock: StepClockConfig { step_ms: 0 },
            ..SortingConfig::default()
        }
    }

    fn wait_until(condition: impl Fn() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(1));
        }
        false
    }

    #[test]
    fn test_run_sorts_and_returns_sequence() {
        let mut visualizer = SortingVisualizer::new(instant_config());
        let presenter = Arc::new(RecordingPresenter::default());
        visualizer.load(vec![5, 3, 4, 1, 2]).unwrap();

        visualizer
            .run(SortKind::Bubble, Arc::clone(&presenter) as Arc<dyn VisualizerPresenterPort>)
            .unwrap();
        let outcome = visualizer.wait_for_completion().unwrap();

        assert_eq!(outcome, SortOutcome::Completed);
        assert_eq!(visualizer.sequence().unwrap().values(), &[1, 2, 3, 4, 5]);
        assert_eq!(presenter.sequences().len(), 8);
        assert_eq!(
            presenter.events().last(),
            Some(&StepEvent::Finished(RunOutcome::Sort(SortOutcome::Completed)))
        );
        assert!(!visualizer.controller().is_running());
        assert_eq!(visualizer.controller().highlighted_line(), None);
    }

    #[test]
    fn test_sorted_sequence_is_refused() {
        let mut visualizer = SortingVisualizer::new(instant_config());
        visualizer.load(vec![1, 2, 3]).unwrap();

        let result = visualizer.run(SortKind::Quick, Arc::new(RecordingPresenter::default()));

        assert!(matches!(result, Err(VisualizerError::AlreadySorted)));
        assert!(!visualizer.can_run());
        assert_eq!(visualizer.sequence().unwrap().values(), &[1, 2, 3]);
    }

    #[test]
    fn test_edits_refused_while_running() {
        let mut config = instant_config();
        config.speed = 1;
        config.clock = StepClockConfig { step_ms: 50 };
        let mut visualizer = SortingVisualizer::new(config);
        visualizer.load(vec![3, 2, 1]).unwrap();

        visualizer
            .run(SortKind::Bubble, Arc::new(RecordingPresenter::default()))
            .unwrap();

        assert!(matches!(visualizer.generate(20), Err(VisualizerError::Busy)));
        assert!(matches!(
            visualizer.run(SortKind::Merge, Arc::new(RecordingPresenter::default())),
            Err(VisualizerError::AlreadyRunning)
        ));
        assert!(visualizer.sequence().is_none());

        visualizer.controller().stop();
        assert_eq!(visualizer.wait_for_completion().unwrap(), SortOutcome::Cancelled);
        assert!(visualizer.sequence().is_some());
    }

    #[test]
    fn test_pause_then_stop_cancels_cleanly() {
        let mut config = instant_config();
        config.clock = StepClockConfig { step_ms: 5 };
        let mut visualizer = SortingVisualizer::new(config);
        visualizer.load(vec![9, 8, 7, 6, 5, 4, 3, 2, 1]).unwrap();
        let presenter = Arc::new(RecordingPresenter::default());

        visualizer
            .run(SortKind::Quick, Arc::clone(&presenter) as Arc<dyn VisualizerPresenterPort>)
            .unwrap();
        visualizer.controller().pause();
        assert!(wait_until(|| visualizer.controller().has_parked_step()));

        visualizer.controller().stop();

        assert_eq!(visualizer.wait_for_completion().unwrap(), SortOutcome::Cancelled);
        let values = visualizer.sequence().unwrap().values().to_vec();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        // Every mutation is published before the step waits.
        assert_eq!(presenter.sequences().last(), Some(&values));
    }

    #[test]
    fn test_generate_clamps_size_and_resets_outcome() {
        let mut visualizer = SortingVisualizer::new(instant_config());

        visualizer.generate(3).unwrap();
        assert_eq!(visualizer.sequence().unwrap().len(), 10);

        visualizer.generate(1_000).unwrap();
        assert_eq!(visualizer.sequence().unwrap().len(), 100);
        assert_eq!(visualizer.last_outcome(), None);
    }

    #[test]
    fn test_load_rejects_sequence_longer_than_max_size() {
        let mut visualizer = SortingVisualizer::new(instant_config());
        let before = visualizer.sequence().unwrap().values().to_vec();

        let result = visualizer.load((0..101).rev().collect());

        assert!(matches!(
            result,
            Err(VisualizerError::SequenceTooLong { len: 101, max: 100 })
        ));
        assert_eq!(visualizer.sequence().unwrap().values(), before.as_slice());

        visualizer.load((0..100).rev().collect()).unwrap();
        assert_eq!(visualizer.sequence().unwrap().len(), 100);
    }

    #[test]
    fn test_wait_without_run_reports_not_started() {
        let mut visualizer = SortingVisualizer::new(instant_config());

        assert!(matches!(
            visualizer.wait_for_completion(),
            Err(VisualizerError::NotStarted)
        ));
    }

    #[test]
    fn test_seeded_visualizers_generate_identical_sequences() {
        let a = SortingVisualizer::new(instant_config());
        let b = SortingVisualizer::new(instant_config());

        assert_eq!(a.sequence(), b.sequence());
    }
}
