use algo_visualizer::{
    CellClass, CellKind, GridCoord, PathfindingConfig, PathfindingVisualizer, RecordingPresenter,
    RunOutcome, SearchOutcome, SortKind, SortOutcome, SortingConfig, SortingVisualizer,
    StepClockConfig, StepEvent, VisualizerError,
};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn wait_until(condition: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(1));
    }
    false
}

fn sorting_config(step_ms: u64) -> SortingConfig {
    SortingConfig {
        size: 12,
        speed: 100,
        seed: Some(7),
        clock: StepClockConfig { step_ms },
        ..SortingConfig::default()
    }
}

fn pathfinding_config(step_ms: u64) -> PathfindingConfig {
    PathfindingConfig {
        rows: 6,
        cols: 8,
        start: GridCoord::new(0, 0),
        end: GridCoord::new(5, 7),
        speed: 100,
        seed: Some(11),
        clock: StepClockConfig { step_ms },
        ..PathfindingConfig::default()
    }
}

#[test]
fn test_every_sort_finishes_on_a_loaded_sequence() {
    for kind in SortKind::ALL {
        let mut visualizer = SortingVisualizer::new(sorting_config(0));
        visualizer.load(vec![9, 4, 7, 1, 8, 2, 6, 3, 5]).unwrap();
        let presenter = Arc::new(RecordingPresenter::default());

        visualizer.run(kind, presenter.clone()).unwrap();
        let outcome = visualizer.wait_for_completion().unwrap();

        assert_eq!(outcome, SortOutcome::Completed, "{kind}");
        assert_eq!(
            visualizer.sequence().unwrap().values(),
            &[1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
        assert_eq!(presenter.finished(), Some(RunOutcome::Sort(SortOutcome::Completed)));
        assert_eq!(
            presenter.sequences().last().map(Vec::as_slice),
            Some(&[1, 2, 3, 4, 5, 6, 7, 8, 9][..])
        );
        assert!(!visualizer.controller().is_running());
        assert!(!visualizer.can_run());
    }
}

#[test]
fn test_sorted_sequence_is_refused() {
    let mut visualizer = SortingVisualizer::new(sorting_config(0));
    visualizer.load(vec![1, 2, 3]).unwrap();

    let result = visualizer.run(SortKind::Quick, Arc::new(RecordingPresenter::default()));

    assert!(matches!(result, Err(VisualizerError::AlreadySorted)));
    assert_eq!(visualizer.sequence().unwrap().values(), &[1, 2, 3]);
}

#[test]
fn test_paused_sort_refuses_edits_and_stops_cleanly() {
    let mut visualizer = SortingVisualizer::new(sorting_config(5));
    visualizer.load(vec![6, 5, 4, 3, 2, 1]).unwrap();
    let presenter = Arc::new(RecordingPresenter::default());

    visualizer.run(SortKind::Bubble, presenter.clone()).unwrap();
    visualizer.controller().pause();
    assert!(wait_until(|| visualizer.controller().has_parked_step()));

    assert!(visualizer.sequence().is_none());
    assert!(matches!(visualizer.generate(20), Err(VisualizerError::Busy)));
    assert!(matches!(
        visualizer.run(SortKind::Merge, presenter.clone()),
        Err(VisualizerError::AlreadyRunning)
    ));

    visualizer.controller().stop();
    let outcome = visualizer.wait_for_completion().unwrap();

    assert_eq!(outcome, SortOutcome::Cancelled);
    let mut values = visualizer.sequence().unwrap().values().to_vec();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(presenter.finished(), Some(RunOutcome::Sort(SortOutcome::Cancelled)));
}

#[test]
fn test_generate_clamps_length_after_a_run() {
    let mut visualizer = SortingVisualizer::new(sorting_config(0));
    visualizer.load(vec![3, 1, 2]).unwrap();
    visualizer
        .run(SortKind::Merge, Arc::new(RecordingPresenter::default()))
        .unwrap();
    visualizer.wait_for_completion().unwrap();

    visualizer.generate(500).unwrap();

    assert_eq!(visualizer.sequence().unwrap().len(), 100);
    assert_eq!(visualizer.last_outcome(), None);
}

#[test]
fn test_open_search_reports_stats_then_finish() {
    let mut visualizer = PathfindingVisualizer::new(pathfinding_config(0)).unwrap();
    let presenter = Arc::new(RecordingPresenter::default());

    visualizer.run(presenter.clone()).unwrap();
    let outcome = visualizer.wait_for_completion().unwrap();

    let SearchOutcome::PathFound(stats) = outcome else {
        panic!("expected a path, got {outcome:?}");
    };
    assert_eq!(stats.path_length, 12);
    assert!(visualizer.is_complete());
    assert_eq!(visualizer.stats(), stats);

    let events = presenter.events();
    let tail: Vec<_> = events.iter().rev().take(2).collect();
    assert_eq!(tail[0], &StepEvent::Finished(RunOutcome::Search(outcome)));
    assert_eq!(tail[1], &StepEvent::Stats(stats));

    let last_grid = presenter.grids().pop().unwrap();
    assert_eq!(last_grid.class_at(0, 0), Some(CellClass::Start));
    assert_eq!(last_grid.class_at(5, 7), Some(CellClass::End));
    assert_eq!(last_grid.count(CellClass::Path), 11);
}

#[test]
fn test_walled_off_end_is_exhausted() {
    let mut visualizer = PathfindingVisualizer::new(pathfinding_config(0)).unwrap();
    for col in 0..8 {
        visualizer.toggle_wall(GridCoord::new(3, col)).unwrap();
    }
    let presenter = Arc::new(RecordingPresenter::default());

    visualizer.run(presenter.clone()).unwrap();
    let outcome = visualizer.wait_for_completion().unwrap();

    assert!(matches!(outcome, SearchOutcome::Exhausted(stats) if stats.path_length == 0));
    assert_eq!(visualizer.grid().unwrap().count_kind(CellKind::Path), 0);
    assert_eq!(visualizer.grid().unwrap().count_kind(CellKind::Wall), 8);
}

#[test]
fn test_grid_edits_are_refused_while_searching() {
    let mut visualizer = PathfindingVisualizer::new(pathfinding_config(5)).unwrap();
    let presenter = Arc::new(RecordingPresenter::default());

    visualizer.run(presenter.clone()).unwrap();
    visualizer.controller().pause();
    assert!(wait_until(|| visualizer.controller().has_parked_step()));

    assert!(visualizer.grid().is_none());
    assert!(matches!(
        visualizer.toggle_wall(GridCoord::new(2, 2)),
        Err(VisualizerError::Busy)
    ));
    assert!(matches!(visualizer.clear(), Err(VisualizerError::Busy)));
    assert!(matches!(
        visualizer.move_start(GridCoord::new(1, 1)),
        Err(VisualizerError::Busy)
    ));

    visualizer.controller().stop();
    assert_eq!(visualizer.wait_for_completion().unwrap(), SearchOutcome::Cancelled);
    assert!(!visualizer.is_complete());
    assert_eq!(presenter.finished(), Some(RunOutcome::Search(SearchOutcome::Cancelled)));

    // Editing works again once the grid is back.
    assert_eq!(
        visualizer.toggle_wall(GridCoord::new(2, 2)).unwrap(),
        CellKind::Wall
    );
}

#[test]
fn test_edits_after_a_search_reset_results() {
    let mut visualizer = PathfindingVisualizer::new(pathfinding_config(0)).unwrap();
    visualizer
        .run(Arc::new(RecordingPresenter::default()))
        .unwrap();
    visualizer.wait_for_completion().unwrap();
    assert!(visualizer.is_complete());

    visualizer.clear().unwrap();

    assert!(!visualizer.is_complete());
    assert_eq!(visualizer.stats().nodes_visited, 0);
    let grid = visualizer.grid().unwrap();
    assert_eq!(grid.count_kind(CellKind::Path), 0);
    assert_eq!(grid.start(), GridCoord::new(0, 0));
}
