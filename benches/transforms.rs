#![allow(clippy::all)]
//! Criterion comparison of every transform strategy.
//!
//! The per-element concatenation strategy is quadratic, so it only runs on
//! the smaller sources.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use idiom_bench::counter::Counter;
use idiom_bench::source::SourceArray;
use idiom_bench::transform::{apply, Strategy};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const QUADRATIC_LIMIT: usize = 10_000;

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for size in SIZES {
        let source = SourceArray::new(size);
        group.throughput(Throughput::Elements(size as u64));

        for strategy in Strategy::ALL {
            if strategy == Strategy::ConcatPerElement && size > QUADRATIC_LIMIT {
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(strategy.config_name(), size),
                &source,
                |b, source| {
                    let mut counter = Counter::new();
                    b.iter(|| {
                        counter.reset();
                        black_box(apply(strategy, black_box(source), &mut counter))
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/canonical");
    group.sample_size(20);
    let source = SourceArray::canonical();

    for strategy in [Strategy::Fold, Strategy::Transducer, Strategy::Fused] {
        group.bench_function(strategy.config_name(), |b| {
            let mut counter = Counter::new();
            b.iter(|| {
                counter.reset();
                let out = apply(strategy, &source, &mut counter);
                debug_assert_eq!(out.len(), source.expected_result_len());
                black_box(out)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_canonical);
criterion_main!(benches);
