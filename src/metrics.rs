//! Error metrics with confidence bounds
//!
//! Each metric compares a candidate series `x` against a reference series `y`
//! and returns a [`MetricResult`]: the point estimate plus non-negative
//! lower/upper error magnitudes.
//!
//! RMSE and MAE share the chi-squared based asymmetric interval
//!
//! ```text
//! k     = z * sqrt(2) / sqrt(N - 1)
//! lower = estimate * (1 - sqrt(1 - k))
//! upper = estimate * (sqrt(1 + k) - 1)
//! ```
//!
//! which is only real-valued for `N >= 1 + 2 z^2`. ME uses a symmetric
//! half-width `z * s_N / sqrt(N)` for both bounds.

use crate::confidence::ConfidenceLevel;
use crate::error::{Result, StatError};
use crate::stats::stdevp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which error statistic a result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Rmse,
    Mae,
    Me,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Rmse, Metric::Mae, Metric::Me];

    /// Human-readable title, as used in report headings
    pub fn title(self) -> &'static str {
        match self {
            Metric::Rmse => "Root-mean-square error",
            Metric::Mae => "Mean absolute error",
            Metric::Me => "Mean error",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Metric::Rmse => "RMSE",
            Metric::Mae => "MAE",
            Metric::Me => "ME",
        };
        f.write_str(label)
    }
}

/// Point estimate with an asymmetric confidence interval
///
/// `lower` and `upper` are magnitudes, not interval endpoints: the interval is
/// `[estimate - lower, estimate + upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
}

impl MetricResult {
    /// Interval endpoints `(estimate - lower, estimate + upper)`
    pub fn interval(&self) -> (f64, f64) {
        (self.estimate - self.lower, self.estimate + self.upper)
    }
}

/// Root-mean-square error of `x` against `y`
///
/// # Errors
/// * `LengthMismatch` if the series differ in length
/// * `InsufficientSamples` if `N < level.min_samples()` (9 at 95%)
///
/// # Example
/// ```
/// use errsig::{metrics, ConfidenceLevel};
///
/// let reference: Vec<f64> = (1..=10).map(f64::from).collect();
/// let shifted: Vec<f64> = reference.iter().map(|v| v + 1.0).collect();
///
/// let result = metrics::rmse(&shifted, &reference, ConfidenceLevel::default()).unwrap();
/// assert!((result.estimate - 1.0).abs() < 1e-12);
/// assert!(result.lower > 0.0 && result.upper > 0.0);
/// ```
pub fn rmse(x: &[f64], y: &[f64], level: ConfidenceLevel) -> Result<MetricResult> {
    let n = check_aligned(x, y)?;
    let mean_sq = x
        .iter()
        .zip(y)
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        / n as f64;
    asymmetric_interval(mean_sq.sqrt(), n, level)
}

/// Mean absolute error of `x` against `y`
///
/// Uses the same interval (and the same sample-size guard) as [`rmse`].
pub fn mae(x: &[f64], y: &[f64], level: ConfidenceLevel) -> Result<MetricResult> {
    let n = check_aligned(x, y)?;
    let mae = x.iter().zip(y).map(|(a, b)| (a - b).abs()).sum::<f64>() / n as f64;
    asymmetric_interval(mae, n, level)
}

/// Signed mean error (bias) of `x` against `y`
///
/// The interval is symmetric: `lower == upper == z * s_N / sqrt(N)` where
/// `s_N` is the population standard deviation of the residuals. Valid for any
/// `N >= 1`.
pub fn me(x: &[f64], y: &[f64], level: ConfidenceLevel) -> Result<MetricResult> {
    let n = check_aligned(x, y)?;
    let residuals: Vec<f64> = x.iter().zip(y).map(|(a, b)| a - b).collect();
    let me = residuals.iter().sum::<f64>() / n as f64;

    let s_n = stdevp(&residuals, me, n);
    let e = level.z_score() * s_n / (n as f64).sqrt();

    Ok(MetricResult {
        estimate: me,
        lower: e,
        upper: e,
    })
}

/// Evaluate one metric by kind
pub fn compute(
    metric: Metric,
    x: &[f64],
    y: &[f64],
    level: ConfidenceLevel,
) -> Result<MetricResult> {
    match metric {
        Metric::Rmse => rmse(x, y, level),
        Metric::Mae => mae(x, y, level),
        Metric::Me => me(x, y, level),
    }
}

/// Asymmetric interval shared by RMSE and MAE
///
/// The sample-size guard lives here so no metric using this interval can
/// skip it.
pub fn asymmetric_interval(
    estimate: f64,
    n: usize,
    level: ConfidenceLevel,
) -> Result<MetricResult> {
    let required = level.min_samples();
    if n < required {
        return Err(StatError::InsufficientSamples { n, required });
    }

    let k = level.z_score() * 2.0_f64.sqrt() / ((n - 1) as f64).sqrt();
    Ok(MetricResult {
        estimate,
        lower: estimate * (1.0 - (1.0 - k).sqrt()),
        upper: estimate * ((1.0 + k).sqrt() - 1.0),
    })
}

fn check_aligned(x: &[f64], y: &[f64]) -> Result<usize> {
    if x.len() != y.len() {
        return Err(StatError::LengthMismatch {
            expected: y.len(),
            actual: x.len(),
        });
    }
    if x.is_empty() {
        return Err(StatError::EmptySeries);
    }
    Ok(x.len())
}
