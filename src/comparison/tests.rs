// Scenario tests for the comparison driver
//
// Realistic method-benchmark shapes: a reference series, candidates with
// offsets, noise and scaling, plus the null baseline.

use super::*;
use crate::registry::MethodRegistry;

fn reference() -> Vec<f64> {
    (1..=10).map(f64::from).collect()
}

fn offset(by: f64) -> Vec<f64> {
    reference().iter().map(|v| v + by).collect()
}

/// Deterministic zig-zag noise so tests never depend on an RNG
fn noisy(amplitude: f64) -> Vec<f64> {
    reference()
        .iter()
        .enumerate()
        .map(|(i, v)| if i % 2 == 0 { v + amplitude } else { v - amplitude })
        .collect()
}

/// Identical candidate vs a +5 shifted candidate
///
/// Expected: significant, since the 5.0 gap dwarfs the compatible error
#[test]
fn test_identical_vs_far_offset_is_significant() {
    let registry = MethodRegistry::new(reference())
        .unwrap()
        .with_method("B", reference())
        .unwrap()
        .with_method("C", offset(5.0))
        .unwrap();

    let analysis = analyze(&registry, &AnalysisConfig::default()).unwrap();
    let cmp = analysis.comparison("B", "C").unwrap();

    assert_eq!(cmp.rmse_a, 0.0);
    assert!((cmp.rmse_b - 5.0).abs() < 1e-12);
    assert!((cmp.difference + 5.0).abs() < 1e-12);
    assert!(cmp.compatible_error < 5.0);
    assert_eq!(cmp.verdict, Verdict::Significant);
}

/// Two candidates with nearly the same error level
///
/// Expected: indistinguishable
#[test]
fn test_similar_candidates_not_significant() {
    let registry = MethodRegistry::new(reference())
        .unwrap()
        .with_method("am1", noisy(1.0))
        .unwrap()
        .with_method("pm3", noisy(1.05))
        .unwrap();

    let analysis = analyze(&registry, &AnalysisConfig::default()).unwrap();
    let cmp = analysis.comparison("am1", "pm3").unwrap();

    assert!(cmp.correlation > 0.9);
    assert!(cmp.difference.abs() < 0.1);
    assert_eq!(cmp.verdict, Verdict::NotSignificant);
}

/// Constant +1 candidate against the reference
///
/// RMSE = MAE = ME = 1; the ME interval collapses because residuals are
/// constant, while RMSE/MAE keep a strictly positive interval.
#[test]
fn test_constant_offset_metric_triples() {
    let registry = MethodRegistry::new(reference())
        .unwrap()
        .with_method("A", offset(1.0))
        .unwrap();

    let summaries = summarize(&registry, Default::default()).unwrap();
    let a = &summaries[0];

    assert!((a.rmse.estimate - 1.0).abs() < 1e-12);
    assert!(a.rmse.lower > 0.0 && a.rmse.upper > 0.0);
    assert!((a.mae.estimate - 1.0).abs() < 1e-12);
    assert!((a.me.estimate - 1.0).abs() < 1e-12);
    assert!(a.me.lower.abs() < 1e-12);
    assert_eq!(a.me.lower, a.me.upper);
}

/// M methods (null included) produce M*(M-1)/2 comparisons
#[test]
fn test_pair_count_includes_null_baseline() {
    let registry = MethodRegistry::new(reference())
        .unwrap()
        .with_method("a", offset(0.5))
        .unwrap()
        .with_method("b", noisy(0.7))
        .unwrap()
        .with_method("c", offset(-1.0))
        .unwrap()
        .with_null_baseline()
        .unwrap();

    let analysis = analyze(&registry, &AnalysisConfig::default()).unwrap();
    assert_eq!(registry.len(), 4);
    assert_eq!(analysis.comparisons.len(), 6);
    assert_eq!(analysis.comparisons.len(), registry.pair_count());

    // Every pair touching the constant null series is indeterminate
    let with_null: Vec<_> = analysis
        .comparisons
        .iter()
        .filter(|c| c.method_b == "null")
        .collect();
    assert_eq!(with_null.len(), 3);
    assert!(with_null.iter().all(|c| c.verdict == Verdict::Indeterminate));
}

/// A stricter confidence level widens the compatible error
#[test]
fn test_stricter_level_widens_compatible_error() {
    let build = || {
        let reference: Vec<f64> = (1..=20).map(f64::from).collect();
        let a: Vec<f64> = reference.iter().map(|v| v + 1.0).collect();
        let b: Vec<f64> = reference
            .iter()
            .enumerate()
            .map(|(i, v)| v + if i % 3 == 0 { 2.0 } else { 1.0 })
            .collect();
        MethodRegistry::new(reference)
            .unwrap()
            .with_method("a", a)
            .unwrap()
            .with_method("b", b)
            .unwrap()
    };

    let default = analyze(&build(), &AnalysisConfig::default()).unwrap();
    let strict = analyze(&build(), &AnalysisConfig::strict()).unwrap();

    assert!(
        strict.comparisons[0].compatible_error > default.comparisons[0].compatible_error
    );
}

/// Insufficient samples are reported, never silently computed
#[test]
fn test_short_series_reports_insufficient_samples() {
    let reference: Vec<f64> = (1..=8).map(f64::from).collect();
    let registry = MethodRegistry::new(reference.clone())
        .unwrap()
        .with_method("m", reference)
        .unwrap();

    let err = analyze(&registry, &AnalysisConfig::default()).unwrap_err();
    assert_eq!(
        err.root(),
        &crate::StatError::InsufficientSamples { n: 8, required: 9 }
    );
}

/// Deterministic: identical inputs give identical outputs
#[test]
fn test_analysis_is_deterministic() {
    let build = || {
        MethodRegistry::new(reference())
            .unwrap()
            .with_method("x", noisy(0.3))
            .unwrap()
            .with_method("y", offset(0.4))
            .unwrap()
    };
    let first = analyze(&build(), &AnalysisConfig::default()).unwrap();
    let second = analyze(&build(), &AnalysisConfig::default()).unwrap();
    assert_eq!(first, second);
}
