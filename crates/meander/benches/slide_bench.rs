//! Criterion microbenches for the sliding mutation engine.
//!
//! - single slide on the default 15x19 design
//! - a 1000-slide run, the shape of the real generation loop
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use meander::cycle::{make_starting_cycle, run_slides, slide, Shape};
use meander::rand::rng_for_seed;

fn bench_slide(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide");
    let shape = Shape::from_design_size(15, 19).unwrap();

    group.bench_function(BenchmarkId::new("single", "15x19"), |b| {
        b.iter_batched(
            || (make_starting_cycle(shape), rng_for_seed(42)),
            |(mut grid, mut rng)| {
                slide(&mut grid, &mut rng).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function(BenchmarkId::new("run_1000", "15x19"), |b| {
        b.iter_batched(
            || (make_starting_cycle(shape), rng_for_seed(42)),
            |(mut grid, mut rng)| {
                run_slides(&mut grid, 1000, &mut rng).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_slide);
criterion_main!(benches);
