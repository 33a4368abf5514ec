//! Metric and pairwise comparison benchmarks
//!
//! The driver is O(M^2 * N): every method pair needs a correlation over the
//! full series. These benchmarks track how that scales with method count and
//! series length.
//!
//! # Run Instructions
//!
//! ```bash
//! cargo bench --bench pairwise_comparison
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use errsig::comparison::{analyze, AnalysisConfig};
use errsig::metrics::{mae, me, rmse};
use errsig::{ConfidenceLevel, MethodRegistry};

/// Deterministic synthetic series: a smooth signal plus method-specific wobble
fn series(len: usize, seed: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.01;
            t.sin() * 10.0 + ((i * (seed + 3)) % 17) as f64 * 0.05 * seed as f64
        })
        .collect()
}

fn registry(methods: usize, len: usize) -> MethodRegistry {
    let mut registry = MethodRegistry::new(series(len, 0)).unwrap();
    for m in 1..=methods {
        registry.push(format!("method_{m}"), series(len, m)).unwrap();
    }
    registry.with_null_baseline().unwrap()
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let level = ConfidenceLevel::default();

    for len in [100, 10_000, 100_000] {
        let x = series(len, 1);
        let y = series(len, 0);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("rmse", len), &len, |b, _| {
            b.iter(|| rmse(black_box(&x), black_box(&y), level))
        });
        group.bench_with_input(BenchmarkId::new("mae", len), &len, |b, _| {
            b.iter(|| mae(black_box(&x), black_box(&y), level))
        });
        group.bench_with_input(BenchmarkId::new("me", len), &len, |b, _| {
            b.iter(|| me(black_box(&x), black_box(&y), level))
        });
    }

    group.finish();
}

fn bench_analyze_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_methods");
    let config = AnalysisConfig::default();

    for methods in [2, 8, 32] {
        let registry = registry(methods, 1_000);
        group.throughput(Throughput::Elements(registry.pair_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(methods), &registry, |b, r| {
            b.iter(|| analyze(black_box(r), &config))
        });
    }

    group.finish();
}

fn bench_analyze_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_length");
    let config = AnalysisConfig::default();

    for len in [100, 1_000, 10_000] {
        let registry = registry(8, len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &registry, |b, r| {
            b.iter(|| analyze(black_box(r), &config))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_metrics,
    bench_analyze_methods,
    bench_analyze_length,
);
criterion_main!(benches);
