//! Sorting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of each algorithm (10 to 200 elements)
//! - Merge sort on larger inputs (250 to 1K elements)
//! - Input shapes (sorted, reversed, few distinct values)
//! - Trace policy overhead (full versus deduplicated)
//! - Playback frame iteration

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use sortscope::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate uniformly random integers in `[1, 100)`.
fn generate_random_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(1..100)).collect()
}

/// Generate an already sorted sequence.
fn generate_sorted_data(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}

/// Generate a strictly decreasing sequence.
fn generate_reversed_data(size: usize) -> Vec<i64> {
    (0..size as i64).rev().collect()
}

/// Generate a sequence drawn from only three distinct values.
fn generate_few_distinct_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..3)).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(30);

    // Quadratic sorts keep O(n^3) trace storage; stay within a few hundred elements.
    for size in [10, 50, 200] {
        group.throughput(Throughput::Elements(size as u64));

        let values = generate_random_data(size, 42);

        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.label(), size),
                &size,
                |b, _| b.iter(|| run(black_box(&values), algorithm)),
            );
        }
    }
    group.finish();
}

fn bench_merge_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_large");
    group.sample_size(20);

    // Merge sort keeps O(n^2 log n) trace values; 1K elements is about 80 MB.
    for size in [250, 500, 1_000] {
        group.throughput(Throughput::Elements(size as u64));

        let values = generate_random_data(size, 42);

        group.bench_with_input(BenchmarkId::new("merge", size), &size, |b, _| {
            b.iter(|| run(black_box(&values), MergeSort))
        });
    }
    group.finish();
}

fn bench_input_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_shapes");
    group.sample_size(50);

    let size = 200;
    let shapes = [
        ("sorted", generate_sorted_data(size)),
        ("reversed", generate_reversed_data(size)),
        ("few_distinct", generate_few_distinct_data(size, 42)),
    ];

    for (name, values) in &shapes {
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.label(), name), values, |b, v| {
                b.iter(|| run(black_box(v), algorithm))
            });
        }
    }
    group.finish();
}

fn bench_trace_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_policy");
    group.sample_size(50);

    // Insertion sort on sorted input records one unchanged snapshot per element.
    let values = generate_sorted_data(500);

    for policy in [TracePolicy::Full, TracePolicy::Deduplicate] {
        let runner = SortScope::new()
            .algorithm(InsertionSort)
            .trace_policy(policy)
            .build()
            .unwrap();

        group.bench_function(format!("{:?}", policy), |b| {
            b.iter(|| runner.run(black_box(&values)))
        });
    }
    group.finish();
}

fn bench_playback(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback");
    group.sample_size(50);

    let values = generate_random_data(50, 7);
    let result = run(&values, ExchangeSort);
    let playback = PlaybackBuilder::new().build().unwrap();

    group.throughput(Throughput::Elements(result.steps() as u64));
    group.bench_function("render_all_frames", |b| {
        b.iter(|| {
            playback
                .frames(black_box(&result))
                .map(|frame| frame.chart().to_string().len())
                .sum::<usize>()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_merge_large,
    bench_input_shapes,
    bench_trace_policy,
    bench_playback,
);

criterion_main!(benches);
