//! Benchmarks for backtracking solution counting.
//!
//! Measures [`BacktrackSolver::count_solutions`] across puzzles with
//! different exit paths.
//!
//! # Benchmarks
//!
//! - **`carved_32`**: a generated 32-clue puzzle with a unique solution.
//!   The search must exhaust every alternative before concluding
//!   uniqueness, which is the hot path of the carve phase.
//! - **`published_32`**: a well-known easy 32-clue puzzle with a unique
//!   solution, as a fixture independent of the generator.
//! - **`empty`**: the blank grid. The counter saturates at two solutions
//!   almost immediately, exercising the early-exit path.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use seedoku_core::Grid;
use seedoku_solver::BacktrackSolver;

const PUZZLES: [(&str, &str); 3] = [
    (
        "carved_32",
        "300008060400000900870006253908000000000090002612085000100050030069030041500009026",
    ),
    (
        "published_32",
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300",
    ),
    (
        "empty",
        "000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    ),
];

fn bench_count_solutions(c: &mut Criterion) {
    for (name, input) in PUZZLES {
        let grid: Grid = input.parse().expect("valid grid");
        c.bench_with_input(
            BenchmarkId::new("count_solutions", name),
            &grid,
            |b, grid| {
                b.iter_batched(
                    || (BacktrackSolver::new(), hint::black_box(*grid)),
                    |(mut solver, grid)| solver.count_solutions(&grid),
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
            .measurement_time(Duration::from_secs(10));
    targets = bench_count_solutions
);
criterion_main!(benches);
