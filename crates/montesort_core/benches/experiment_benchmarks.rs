//! Criterion benchmarks for montesort_core
//!
//! Run with: cargo bench -p montesort_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use montesort_core::estimator::estimate_area;
use montesort_core::rng::seeded_rng;
use montesort_core::sorting::{hybrid_merge_sort, insertion_sort, merge_sort};
use montesort_core::{ArrayGenerator, InputKind, MonteCarloConfig, MonteCarloExperiment};

fn bench_sorts(c: &mut Criterion) {
    let generator = ArrayGenerator::new(10_000, 6000, 42).unwrap();
    let mut group = c.benchmark_group("sort_10k");

    for kind in InputKind::ALL {
        let input = generator.prefix(kind, 10_000).unwrap();

        group.bench_with_input(BenchmarkId::new("standard", kind), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                merge_sort(&mut v);
                black_box(v)
            })
        });

        for threshold in [5, 20, 50] {
            group.bench_with_input(
                BenchmarkId::new(format!("hybrid_{threshold}"), kind),
                &input,
                |b, input| {
                    b.iter(|| {
                        let mut v = input.clone();
                        hybrid_merge_sort(&mut v, threshold);
                        black_box(v)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_insertion_small(c: &mut Criterion) {
    let generator = ArrayGenerator::new(64, 6000, 42).unwrap();
    let mut group = c.benchmark_group("insertion_sort");

    for n in [8, 16, 32, 64] {
        let input = generator.random(n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                insertion_sort(&mut v);
                black_box(v)
            })
        });
    }

    group.finish();
}

fn bench_estimator(c: &mut Criterion) {
    let experiment = MonteCarloExperiment::new(MonteCarloConfig::default()).unwrap();
    let circles = experiment.config().circles;
    let mut group = c.benchmark_group("estimate_area");

    for (name, rect) in [("wide", experiment.wide()), ("narrow", experiment.narrow())] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut rng = seeded_rng(42);
                black_box(estimate_area(&circles, &rect, 10_000, &mut rng).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sorts, bench_insertion_small, bench_estimator);
criterion_main!(benches);
