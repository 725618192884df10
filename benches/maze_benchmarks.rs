use criterion::{black_box, criterion_group, criterion_main, Criterion};

use maze_generator::{Grid, Hexagon, MazeGenerator, Rectangle, Topology};

// Fixed seed for deterministic benchmarks
const BENCHMARK_SEED: u64 = 12345;

fn create_partially_generated<T: Topology>(size: usize, ratio: f32) -> MazeGenerator<T> {
    let mut generator = MazeGenerator::seeded(Grid::new(size, size).unwrap(), BENCHMARK_SEED);
    let steps = (2.0 * (size * size) as f32 * ratio) as usize;

    for _ in 0..steps {
        if generator.is_complete() {
            break;
        }
        generator.step().unwrap();
    }

    generator
}

fn bench_grid_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_creation");

    for size in [25, 50, 100].iter() {
        group.bench_with_input(format!("rectangle_{}", size), size, |b, &size| {
            b.iter(|| black_box(Grid::<Rectangle>::new(size, size).unwrap()));
        });

        group.bench_with_input(format!("hexagon_{}", size), size, |b, &size| {
            b.iter(|| black_box(Grid::<Hexagon>::new(size, size).unwrap()));
        });
    }

    group.finish();
}

fn bench_drain_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain_all");

    for size in [10, 50, 100].iter() {
        group.bench_with_input(format!("rectangle_{}", size), size, |b, &size| {
            b.iter_batched(
                || MazeGenerator::seeded(Grid::<Rectangle>::new(size, size).unwrap(), BENCHMARK_SEED),
                |mut generator| black_box(generator.drain_all().unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(format!("hexagon_{}", size), size, |b, &size| {
            b.iter_batched(
                || MazeGenerator::seeded(Grid::<Hexagon>::new(size, size).unwrap(), BENCHMARK_SEED),
                |mut generator| black_box(generator.drain_all().unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");

    for size in [15, 25, 35].iter() {
        group.bench_with_input(format!("hexagon_{}", size), size, |b, &size| {
            b.iter_batched(
                || create_partially_generated::<Hexagon>(size, 0.3), // 30% through
                |mut generator| black_box(generator.step().unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(std::time::Duration::from_secs(10))
        .warm_up_time(std::time::Duration::from_secs(3))
}

criterion_group!(
    name = benches;
    config = configure_criterion();
    targets =
        bench_grid_creation,
        bench_drain_all,
        bench_single_step
);
criterion_main!(benches);
