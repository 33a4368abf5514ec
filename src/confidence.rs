//! Confidence level and its two-sided normal critical value
//!
//! The interval formulas are large-sample normal approximations, so the only
//! thing a confidence level contributes is `z = Phi^-1((1 + level) / 2)`.
//! At the default 95% level this is exactly 1.96.

use crate::error::{Result, StatError};
use serde::{Deserialize, Serialize};

/// Two-sided confidence level in the open interval (0, 1)
///
/// # Example
/// ```
/// use errsig::ConfidenceLevel;
///
/// let level = ConfidenceLevel::default();
/// assert_eq!(level.value(), 0.95);
/// assert_eq!(level.z_score(), 1.96);
/// assert_eq!(level.min_samples(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// 95% two-sided (z = 1.96)
    pub const P95: ConfidenceLevel = ConfidenceLevel(0.95);
    /// 99% two-sided (z = 2.576)
    pub const P99: ConfidenceLevel = ConfidenceLevel(0.99);
    /// 90% two-sided (z = 1.645)
    pub const P90: ConfidenceLevel = ConfidenceLevel(0.90);

    /// Validate and wrap a confidence level
    pub fn new(level: f64) -> Result<Self> {
        if level.is_finite() && level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(StatError::InvalidConfidence(level))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Critical value of the standard normal for this two-sided level
    pub fn z_score(self) -> f64 {
        // Conventional table values for the common levels
        if (self.0 - 0.95).abs() < 1e-9 {
            1.96
        } else if (self.0 - 0.99).abs() < 1e-9 {
            2.576
        } else if (self.0 - 0.90).abs() < 1e-9 {
            1.645
        } else {
            inverse_normal_cdf((1.0 + self.0) / 2.0)
        }
    }

    /// Smallest N for which the asymmetric RMSE/MAE interval is real-valued
    ///
    /// The lower bound needs `1 - z*sqrt(2)/sqrt(N-1) >= 0`, i.e.
    /// `N >= 1 + 2 z^2` (8.6832 at 95%, hence 9). Never below 2, since the
    /// interval divides by `sqrt(N - 1)` even when z rounds to zero.
    pub fn min_samples(self) -> usize {
        let z = self.z_score();
        ((1.0 + 2.0 * z * z).ceil() as usize).max(2)
    }
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::P95
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = StatError;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> f64 {
        level.0
    }
}

/// Acklam's rational approximation of the inverse standard normal CDF
///
/// Relative error below 1.15e-9 over the open unit interval.
fn inverse_normal_cdf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239e0,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838e0,
        -2.549_732_539_343_734e0,
        4.374_664_141_464_968e0,
        2.938_163_982_698_783e0,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996e0,
        3.754_408_661_907_416e0,
    ];
    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    let tail = |q: f64| {
        let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
        let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
        num / den
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p > P_HIGH {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    } else {
        let q = p - 0.5;
        let r = q * q;
        let num = (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q;
        let den = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
        num / den
    }
}
