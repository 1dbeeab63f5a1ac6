//! Benchmarks for pattern parsing and scale walking.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_scales::{scale, scale_named, NamedScale, Pattern};

use crate::TONICS;

pub fn bench_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern");

    group.bench_function("parse", |b| b.iter(|| Pattern::parse(black_box("MmMmMmMm"))));

    for &tonic in TONICS {
        group.bench_with_input(BenchmarkId::new("major", tonic), &tonic, |b, &tonic| {
            b.iter(|| scale(black_box(tonic), black_box("MMmMMMm")))
        });
    }

    for named in [NamedScale::Blues, NamedScale::Chromatic] {
        group.bench_with_input(
            BenchmarkId::new("named", named.short_name()),
            &named,
            |b, &named| b.iter(|| scale_named(black_box("Eb"), named)),
        );
    }

    group.finish();
}
