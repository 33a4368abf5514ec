//! Descriptive statistics over aligned series
//!
//! Small, allocation-free helpers used by the metric functions and the
//! pairwise comparison driver. All functions follow IEEE-754 semantics:
//! degenerate inputs yield NaN rather than panicking.

/// Arithmetic mean of a series (NaN for an empty series)
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divisor `n`, not `n - 1`)
///
/// The mean is supplied by the caller because every call site has already
/// computed it. No validation is done: callers guarantee `n == values.len()`
/// and `n > 0`.
pub fn stdevp(values: &[f64], mean: f64, n: usize) -> f64 {
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / n as f64).sqrt()
}

/// Pearson product-moment correlation coefficient
///
/// Returns NaN when either series has zero variance (including a single
/// sample), since the coefficient is undefined there. Callers treat NaN as
/// "indeterminate" rather than failing.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());

    // The mean of a constant series is not always bit-identical to its value,
    // which would otherwise leave a spurious non-zero variance.
    if is_constant(x) || is_constant(y) {
        return f64::NAN;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let r = cov / (var_x * var_y).sqrt();
    // Rounding can push perfectly correlated series a hair past +/-1
    if r.is_nan() {
        r
    } else {
        r.clamp(-1.0, 1.0)
    }
}

/// True for empty series and series whose values are all identical
pub fn is_constant(values: &[f64]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => true,
    }
}
