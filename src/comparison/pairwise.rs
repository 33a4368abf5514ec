// Pairwise RMSE significance via correlation-corrected "compatible error"
//
// For two methods evaluated against the same reference, the narrowest gap
// consistent with both RMSE intervals pairs the LOWER error of the worse
// (larger RMSE) method with the UPPER error of the better one. The two terms
// are combined in law-of-cosines form using the Pearson correlation of the
// raw series:
//
//   comp = sqrt(upper^2 + lower^2 - 2 r upper lower)
//
// |rmse_a - rmse_b| < comp  => statistically indistinguishable.

use crate::metrics::MetricResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing two RMSE estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The RMSE difference exceeds the compatible error: methods differ
    Significant,

    /// The RMSE difference is within the compatible error: methods are
    /// statistically indistinguishable
    NotSignificant,

    /// The compatible error is undefined (NaN correlation, e.g. a constant
    /// series), so no verdict can be reached
    Indeterminate,
}

impl Verdict {
    /// Classify a difference against a compatible-error threshold
    pub fn classify(difference: f64, compatible_error: f64) -> Self {
        if compatible_error.is_nan() || difference.is_nan() {
            Verdict::Indeterminate
        } else if difference.abs() < compatible_error {
            Verdict::NotSignificant
        } else {
            Verdict::Significant
        }
    }

    /// Whether the two methods are statistically the same
    ///
    /// `None` when indeterminate.
    pub fn same(self) -> Option<bool> {
        match self {
            Verdict::Significant => Some(false),
            Verdict::NotSignificant => Some(true),
            Verdict::Indeterminate => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.same() {
            Some(same) => write!(f, "{}", same),
            None => f.write_str("n/a"),
        }
    }
}

/// One row of the pairwise comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseComparison {
    pub method_a: String,
    pub method_b: String,
    pub rmse_a: f64,
    pub rmse_b: f64,
    /// Signed difference `rmse_a - rmse_b`
    pub difference: f64,
    pub compatible_error: f64,
    /// Pearson correlation of the two methods' raw series
    pub correlation: f64,
    pub verdict: Verdict,
}

/// Correlation-corrected combination of two error terms
///
/// Reduces to `sqrt(upper^2 + lower^2)` for `r = 0` and `|upper - lower|`
/// for `r = 1`. NaN correlation propagates.
pub fn compatible_error(upper: f64, lower: f64, correlation: f64) -> f64 {
    // Rounding can leave a tiny negative radicand when r = 1 and upper ~ lower
    let radicand = upper * upper + lower * lower - 2.0 * correlation * upper * lower;
    if radicand.is_nan() {
        radicand
    } else {
        radicand.max(0.0).sqrt()
    }
}

/// Compare two RMSE results given the correlation of their series
///
/// The worse method is `a` only if its RMSE is strictly larger; ties take `b`
/// as the worse method.
pub fn compare_pair(
    method_a: &str,
    rmse_a: &MetricResult,
    method_b: &str,
    rmse_b: &MetricResult,
    correlation: f64,
) -> PairwiseComparison {
    let (lower, upper) = if rmse_a.estimate > rmse_b.estimate {
        (rmse_a.lower, rmse_b.upper)
    } else {
        (rmse_b.lower, rmse_a.upper)
    };

    let comp = compatible_error(upper, lower, correlation);
    let difference = rmse_a.estimate - rmse_b.estimate;

    PairwiseComparison {
        method_a: method_a.to_string(),
        method_b: method_b.to_string(),
        rmse_a: rmse_a.estimate,
        rmse_b: rmse_b.estimate,
        difference,
        compatible_error: comp,
        correlation,
        verdict: Verdict::classify(difference, comp),
    }
}
