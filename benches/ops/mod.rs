//! Benchmarks for the public scale operations.

mod chromatic;
mod pattern;

pub use chromatic::bench_chromatic;
pub use pattern::bench_pattern;
