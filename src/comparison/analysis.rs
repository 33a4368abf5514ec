// Comparison driver: every metric for every method, then every method pair
//
// Runs RMSE, MAE and ME for each registered method against the reference,
// then enumerates all unordered pairs (i < j, registry order) and judges
// whether their RMSE difference is statistically significant.

use crate::comparison::config::AnalysisConfig;
use crate::comparison::pairwise::{compare_pair, PairwiseComparison, Verdict};
use crate::confidence::ConfidenceLevel;
use crate::error::Result;
use crate::metrics::{self, Metric, MetricResult};
use crate::registry::MethodRegistry;
use crate::stats::pearson;
use serde::{Deserialize, Serialize};

/// All three metrics for one method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSummary {
    pub name: String,
    pub rmse: MetricResult,
    pub mae: MetricResult,
    pub me: MetricResult,
}

impl MethodSummary {
    pub fn metric(&self, metric: Metric) -> &MetricResult {
        match metric {
            Metric::Rmse => &self.rmse,
            Metric::Mae => &self.mae,
            Metric::Me => &self.me,
        }
    }
}

/// Parallel arrays for an error-bar chart of one metric
///
/// Index `i` of every vector refers to `names[i]`, in registry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBars {
    pub metric: Metric,
    pub names: Vec<String>,
    pub estimates: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

/// Complete result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub confidence_level: ConfidenceLevel,
    pub sample_count: usize,
    pub methods: Vec<MethodSummary>,
    pub comparisons: Vec<PairwiseComparison>,
}

impl Analysis {
    /// Error-bar arrays for one metric
    pub fn error_bars(&self, metric: Metric) -> ErrorBars {
        let results: Vec<&MetricResult> = self.methods.iter().map(|m| m.metric(metric)).collect();
        ErrorBars {
            metric,
            names: self.methods.iter().map(|m| m.name.clone()).collect(),
            estimates: results.iter().map(|r| r.estimate).collect(),
            lower: results.iter().map(|r| r.lower).collect(),
            upper: results.iter().map(|r| r.upper).collect(),
        }
    }

    /// Error-bar arrays for RMSE, MAE and ME in that order
    pub fn all_error_bars(&self) -> Vec<ErrorBars> {
        Metric::ALL.iter().map(|&m| self.error_bars(m)).collect()
    }

    /// Look up the comparison for a pair, in either order
    pub fn comparison(&self, a: &str, b: &str) -> Option<&PairwiseComparison> {
        self.comparisons.iter().find(|c| {
            (c.method_a == a && c.method_b == b) || (c.method_a == b && c.method_b == a)
        })
    }

    /// Pairs whose verdict could not be determined
    pub fn indeterminate(&self) -> impl Iterator<Item = &PairwiseComparison> {
        self.comparisons
            .iter()
            .filter(|c| c.verdict == Verdict::Indeterminate)
    }

    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!(
            "Samples: {}   Confidence: {:.1}%\n\n",
            self.sample_count,
            self.confidence_level.value() * 100.0
        ));

        report.push_str(&format!(
            "{:<10} {:>8} {:>8} {:>8}  {:>8} {:>8} {:>8}  {:>8} {:>8}\n",
            "Method", "RMSE", "-err", "+err", "MAE", "-err", "+err", "ME", "+/-err"
        ));
        for m in &self.methods {
            report.push_str(&format!(
                "{:<10} {:>8.3} {:>8.3} {:>8.3}  {:>8.3} {:>8.3} {:>8.3}  {:>8.3} {:>8.3}\n",
                m.name,
                m.rmse.estimate,
                m.rmse.lower,
                m.rmse.upper,
                m.mae.estimate,
                m.mae.lower,
                m.mae.upper,
                m.me.estimate,
                m.me.upper,
            ));
        }

        report.push('\n');
        report.push_str(
            "Method_A   Method_B     RMSE_A   RMSE_B  RMSE_A-RMSE_B   Comp_Err  Same?\n",
        );
        for c in &self.comparisons {
            report.push_str(&format!(
                "{:<10} {:<10} {:>8.3} {:>8.3} {:>14.3} {:>10.3}  {}\n",
                c.method_a,
                c.method_b,
                c.rmse_a,
                c.rmse_b,
                c.difference,
                c.compatible_error,
                c.verdict
            ));
        }

        report
    }
}

/// Evaluate all three metrics for every registered method
///
/// # Errors
/// The first metric failure, wrapped with the offending method's name
/// (e.g. `InsufficientSamples` when N is below `level.min_samples()`).
pub fn summarize(registry: &MethodRegistry, level: ConfidenceLevel) -> Result<Vec<MethodSummary>> {
    let reference = registry.reference();

    registry
        .methods()
        .iter()
        .map(|method| -> Result<MethodSummary> {
            let evaluate = |metric: Metric| {
                metrics::compute(metric, &method.values, reference, level)
                    .map_err(|e| e.for_method(&method.name))
            };
            let summary = MethodSummary {
                name: method.name.clone(),
                rmse: evaluate(Metric::Rmse)?,
                mae: evaluate(Metric::Mae)?,
                me: evaluate(Metric::Me)?,
            };
            tracing::debug!(
                method = %summary.name,
                rmse = summary.rmse.estimate,
                mae = summary.mae.estimate,
                me = summary.me.estimate,
                "computed error metrics"
            );
            Ok(summary)
        })
        .collect()
}

/// Compare every unordered pair of methods by RMSE
///
/// `summaries` must be in registry order (as returned by [`summarize`]).
/// Yields `M * (M - 1) / 2` records with `i < j`.
pub fn compare_all(
    registry: &MethodRegistry,
    summaries: &[MethodSummary],
) -> Vec<PairwiseComparison> {
    let methods = registry.methods();
    debug_assert_eq!(methods.len(), summaries.len());

    let mut comparisons = Vec::with_capacity(registry.pair_count());
    for i in 0..summaries.len() {
        for j in (i + 1)..summaries.len() {
            let r = pearson(&methods[i].values, &methods[j].values);
            let cmp = compare_pair(
                &summaries[i].name,
                &summaries[i].rmse,
                &summaries[j].name,
                &summaries[j].rmse,
                r,
            );
            if cmp.verdict == Verdict::Indeterminate {
                tracing::warn!(
                    "Indeterminate verdict for {} vs {}: correlation undefined (N={})",
                    cmp.method_a,
                    cmp.method_b,
                    registry.sample_count()
                );
            }
            comparisons.push(cmp);
        }
    }
    comparisons
}

/// Run the full analysis over a prepared registry
///
/// # Example
/// ```
/// use errsig::comparison::{analyze, AnalysisConfig, Verdict};
/// use errsig::MethodRegistry;
///
/// let reference: Vec<f64> = (1..=10).map(f64::from).collect();
/// let same = reference.clone();
/// let far: Vec<f64> = reference.iter().map(|v| v + 5.0).collect();
///
/// let registry = MethodRegistry::new(reference)
///     .unwrap()
///     .with_method("B", same)
///     .unwrap()
///     .with_method("C", far)
///     .unwrap();
///
/// let analysis = analyze(&registry, &AnalysisConfig::default()).unwrap();
/// assert_eq!(analysis.comparisons.len(), 1);
/// assert_eq!(analysis.comparisons[0].verdict, Verdict::Significant);
/// ```
pub fn analyze(registry: &MethodRegistry, config: &AnalysisConfig) -> Result<Analysis> {
    let level = config.confidence_level;
    let methods = summarize(registry, level)?;
    let comparisons = compare_all(registry, &methods);

    Ok(Analysis {
        confidence_level: level,
        sample_count: registry.sample_count(),
        methods,
        comparisons,
    })
}
