//! Benchmarks for range pattern compilation.

use criterion::{criterion_group, criterion_main, Criterion};
use dialrange_engine::compile_range_regex;
use std::hint::black_box;

fn bench_compile(c: &mut Criterion) {
    c.bench_function("compile_flat_range", |b| {
        b.iter(|| compile_range_regex(black_box("123456"), black_box("876543")))
    });

    c.bench_function("compile_banded_range", |b| {
        b.iter(|| compile_range_regex(black_box("7"), black_box("123456789012345")))
    });

    c.bench_function("compile_full_block", |b| {
        b.iter(|| compile_range_regex(black_box("1000000"), black_box("1999999")))
    });
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
