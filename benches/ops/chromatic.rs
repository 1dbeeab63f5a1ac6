//! Benchmarks for chromatic scale generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_scales::{chromatic_scale, find_chromatic_scale, notes::SHARP_NOTES, step, StepCode};

use crate::TONICS;

pub fn bench_chromatic(c: &mut Criterion) {
    let mut group = c.benchmark_group("chromatic");

    for &tonic in TONICS {
        group.bench_with_input(BenchmarkId::new("find", tonic), &tonic, |b, &tonic| {
            b.iter(|| find_chromatic_scale(black_box(tonic)))
        });
    }

    group.bench_function("sharp", |b| b.iter(|| chromatic_scale(black_box("G#"))));

    // Worst case for the linear search: last entry in the table
    group.bench_function("step", |b| {
        b.iter(|| step(black_box(&SHARP_NOTES), black_box("B"), StepCode::Augmented))
    });

    group.finish();
}
