//! Benchmarks for dial-plan overlap resolution.

use criterion::{criterion_group, criterion_main, Criterion};
use dialrange_engine::{resolve_overlaps, LabeledRangeSpec};
use std::hint::black_box;

/// A chain of blocks where every range overlaps the next one, forcing a
/// split per link.
fn chained_plan(len: u32) -> Vec<LabeledRangeSpec> {
    (0..len)
        .map(|i| {
            let start = 1000 + i * 50;
            let end = start + 80;
            LabeledRangeSpec::new(start.to_string(), end.to_string(), format!("block {i}"))
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let chained = chained_plan(20);
    c.bench_function("resolve_chained_plan", |b| {
        b.iter(|| resolve_overlaps(black_box(&chained), 4))
    });

    let disjoint: Vec<LabeledRangeSpec> = (0..50)
        .map(|i| {
            let start = 1000 + i * 100;
            LabeledRangeSpec::new(
                start.to_string(),
                (start + 99).to_string(),
                format!("clean {i}"),
            )
        })
        .collect();
    c.bench_function("resolve_disjoint_plan", |b| {
        b.iter(|| resolve_overlaps(black_box(&disjoint), 4))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
