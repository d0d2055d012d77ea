// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Naive vs memoized bulk builder timings.

use collatz::LengthTable;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("length_table");
    for n in [10_000i64, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, &n| {
            b.iter(|| LengthTable::build_naive(n).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("memoized", n), &n, |b, &n| {
            b.iter(|| LengthTable::build_memoized(n).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_builders);
criterion_main!(benches);
