//! Frame rasterisation and instant-speed algorithm runs.

use algo_visualizer::{
    BarPalette, DiscardSink, GridCoord, GridPalette, GridSnapshot, NeverCancel, PathGrid,
    PixelRect, RunController, SortKind, SortableSequence, StepClockConfig, Stepper,
    rasterize_grid, rasterize_sequence, run_astar, run_sort,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn instant_controller() -> RunController {
    let controller = RunController::with_clock_config(100, StepClockConfig { step_ms: 0 });
    controller.start();
    controller
}

fn bench_rasterize_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_grid");
    let mut grid = PathGrid::new(20, 40, GridCoord::new(5, 5), GridCoord::new(14, 34)).unwrap();
    grid.generate_maze(0.3, &mut StdRng::seed_from_u64(1));
    let snapshot = GridSnapshot::from_grid(&grid);
    let palette = GridPalette::default();

    for &(width, height) in &[(200u32, 100u32), (800, 400), (1600, 800)] {
        let pixel_rect = PixelRect::from_size(width, height).unwrap();
        group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &pixel_rect,
            |b, &rect| b.iter(|| rasterize_grid(black_box(&snapshot), &palette, rect, &NeverCancel)),
        );
    }
    group.finish();
}

fn bench_rasterize_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_sequence");
    let pixel_rect = PixelRect::from_size(800, 400).unwrap();
    let palette = BarPalette::default();

    for &len in &[10usize, 40, 100] {
        let sequence = SortableSequence::random(len, &mut StdRng::seed_from_u64(2));
        group.bench_with_input(BenchmarkId::from_parameter(len), &sequence, |b, seq| {
            b.iter(|| rasterize_sequence(black_box(seq.values()), &palette, pixel_rect, &NeverCancel));
        });
    }
    group.finish();
}

fn bench_instant_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("instant_runs");
    let controller = instant_controller();
    let clock = controller.clock();
    let stepper = Stepper::new(&clock, &DiscardSink);

    for kind in SortKind::ALL {
        let input = SortableSequence::random(100, &mut StdRng::seed_from_u64(3));
        group.bench_function(BenchmarkId::new("sort", kind.display_name()), |b| {
            b.iter(|| {
                let mut sequence = input.clone();
                run_sort(kind, &mut sequence, &stepper)
            });
        });
    }

    let mut maze = PathGrid::new(20, 40, GridCoord::new(5, 5), GridCoord::new(14, 34)).unwrap();
    maze.generate_maze(0.2, &mut StdRng::seed_from_u64(4));
    group.bench_function("astar_20x40", |b| {
        b.iter(|| {
            let mut grid = maze.clone();
            run_astar(&mut grid, &stepper)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_rasterize_grid,
    bench_rasterize_sequence,
    bench_instant_runs
);
criterion_main!(benches);
