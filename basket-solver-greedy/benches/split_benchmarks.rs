//! Criterion benchmarks for the greedy solver.
//!
//! Measures split time across basket sizes to track performance and detect
//! regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package basket-solver-greedy
//! ```

#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use basket_core::{CoverSolver, build_index};
use basket_solver_greedy::GreedySolver;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};


use bench_support::{BENCHMARK_SEED, generate_basket, generate_configuration};

/// Basket sizes to benchmark.
const BASKET_SIZES: &[usize] = &[100, 1_000, 10_000];

/// Distinct items in the generated configuration.
const ITEM_COUNT: usize = 500;

fn bench_split_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_time");
    group.measurement_time(Duration::from_secs(5));

    let configuration = generate_configuration(ITEM_COUNT, BENCHMARK_SEED);
    #[expect(
        clippy::expect_used,
        reason = "a generator regression should fail the benchmark loudly"
    )]
    let index = build_index(&configuration).expect("generated configuration is valid");
    let solver = GreedySolver::new(index);

    for &size in BASKET_SIZES {
        let basket = generate_basket(size, ITEM_COUNT, BENCHMARK_SEED);

        let throughput_size = u64::try_from(size).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("occurrences", size), &basket, |b, basket| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking split performance, result is intentionally discarded"
                )]
                let _ = solver.split(basket);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_split_times);
criterion_main!(benches);
