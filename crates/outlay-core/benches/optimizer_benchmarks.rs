//! Benchmarks for the outlay-core optimizer.
//!
//! Run with: cargo bench -p outlay-core

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use outlay_core::{
    optimize, optimize_batch, return_frontier, InvestmentOption, OptimizerConfig, Scenario,
};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_options(n: usize) -> Vec<InvestmentOption> {
    (0..n)
        .map(|i| {
            let cost = 3 + (i as i64 * 7) % 41;
            let ret = cost + (i as i64 * 13) % 17;
            InvestmentOption::new(format!("OPT{i:03}"), cost, ret)
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    let options = create_options(50);

    for budget in [1_000_i64, 10_000, 100_000] {
        group.throughput(Throughput::Elements(budget as u64 * options.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(budget), &budget, |b, &budget| {
            b.iter(|| optimize(black_box(&options), black_box(budget)))
        });
    }

    group.finish();
}

fn bench_option_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("option_count");

    for n in [5_usize, 50, 500] {
        let options = create_options(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &options, |b, options| {
            b.iter(|| optimize(black_box(options), black_box(10_000)))
        });
    }

    group.finish();
}

fn bench_frontier(c: &mut Criterion) {
    let options = create_options(50);
    c.bench_function("frontier_10k", |b| {
        b.iter(|| return_frontier(black_box(&options), black_box(10_000)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let options = create_options(50);
    let scenarios: Vec<Scenario> = (1..=32)
        .map(|i| Scenario::new(format!("S{i}"), options.clone(), i * 500))
        .collect();

    let mut group = c.benchmark_group("batch");
    group.bench_function("sequential", |b| {
        b.iter(|| optimize_batch(black_box(&scenarios), &OptimizerConfig::sequential()))
    });
    group.bench_function("default", |b| {
        b.iter(|| optimize_batch(black_box(&scenarios), &OptimizerConfig::default()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_optimize,
    bench_option_count,
    bench_frontier,
    bench_batch
);
criterion_main!(benches);
