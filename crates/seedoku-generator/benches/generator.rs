//! Benchmarks for sudoku puzzle generation.
//!
//! This benchmark suite measures the complete generation pipeline, from
//! seeding through the backtracking fill to the uniqueness-preserving
//! carve.
//!
//! # Benchmarks
//!
//! - **`generate_medium`**: Generates puzzles with the default 30-clue
//!   target. Carving usually stops within a few clues of the target.
//! - **`generate_evil`**: Generates puzzles with the 17-clue target. The
//!   carve phase runs until its retry budget is exhausted, so this is the
//!   most solver-heavy configuration.
//!
//! # Test Data
//!
//! Uses three fixed seeds (1, 2, 3) to ensure reproducibility while
//! covering both clean target exits and budget-exhausted runs.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use seedoku_generator::{Difficulty, PuzzleGenerator};

const SEEDS: [u32; 3] = [1, 2, 3];

fn bench_generate_medium(c: &mut Criterion) {
    let generator = PuzzleGenerator::with_difficulty(Difficulty::Medium);

    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("generate_medium", format!("seed_{seed}")),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || hint::black_box(seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_evil(c: &mut Criterion) {
    let generator = PuzzleGenerator::with_difficulty(Difficulty::Evil);

    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("generate_evil", format!("seed_{seed}")),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || hint::black_box(seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generate_medium,
        bench_generate_evil
);
criterion_main!(benches);
