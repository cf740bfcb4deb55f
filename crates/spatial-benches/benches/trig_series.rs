// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// criterion_group!/criterion_main! expand to undocumented functions that cannot
// carry #[allow] (attributes on macro invocations are ignored). Crate-level
// suppress is required for benchmark binaries using Criterion.
#![allow(missing_docs)]
//! Series evaluator throughput.
//!
//! Each bench sweeps a fixed grid of inputs so range reduction paths are all
//! exercised; compare against the platform functions to track the cost of
//! determinism.
//!
//! ```sh
//! cargo bench --package spatial-benches --bench trig_series
//! ```
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spatial_core::math::trig;

const SAMPLES: usize = 1024;

fn grid(lo: f64, hi: f64) -> Vec<f64> {
    let step = (hi - lo) / SAMPLES as f64;
    (0..SAMPLES).map(|i| lo + step * i as f64).collect()
}

fn bench_unary(c: &mut Criterion, name: &str, lo: f64, hi: f64, f: fn(f64) -> f64) {
    let inputs = grid(lo, hi);
    let mut group = c.benchmark_group("trig_series");
    group.throughput(Throughput::Elements(SAMPLES as u64));
    group.bench_with_input(BenchmarkId::new(name, SAMPLES), &inputs, |b, xs| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in xs {
                acc += f(black_box(x));
            }
            black_box(acc)
        });
    });
    group.finish();
}

fn bench_forward(c: &mut Criterion) {
    bench_unary(c, "sin", -100.0, 100.0, trig::sin);
    bench_unary(c, "cos", -100.0, 100.0, trig::cos);
    bench_unary(c, "tan", -1.5, 1.5, trig::tan);
}

fn bench_inverse(c: &mut Criterion) {
    bench_unary(c, "asin", -1.0, 1.0, trig::asin);
    bench_unary(c, "acos", -1.0, 1.0, trig::acos);
    bench_unary(c, "atan", -50.0, 50.0, trig::atan);
}

fn bench_roots_and_logs(c: &mut Criterion) {
    bench_unary(c, "sqrt", 1e-6, 1e6, trig::sqrt);
    bench_unary(c, "ln", 1e-6, 1e6, trig::ln);
    bench_unary(c, "asinh", -1e3, 1e3, trig::asinh);
}

fn bench_platform_baseline(c: &mut Criterion) {
    bench_unary(c, "platform_sin", -100.0, 100.0, f64::sin);
    bench_unary(c, "platform_sqrt", 1e-6, 1e6, f64::sqrt);
}

criterion_group!(
    benches,
    bench_forward,
    bench_inverse,
    bench_roots_and_logs,
    bench_platform_baseline
);
criterion_main!(benches);
