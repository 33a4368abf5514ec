//! JSON output format for analysis results
//!
//! `--format json` implementation. NaN (undefined correlation / compatible
//! error) is serialized as `null`, since JSON has no NaN literal.

use crate::comparison::{Analysis, ErrorBars, PairwiseComparison, Verdict};
use crate::metrics::MetricResult;
use serde::{Deserialize, Serialize};

/// Per-method metric triples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonMethod {
    pub name: String,
    pub rmse: MetricResult,
    pub mae: MetricResult,
    pub me: MetricResult,
}

/// A single pairwise comparison row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonComparison {
    pub method_a: String,
    pub method_b: String,
    pub rmse_a: f64,
    pub rmse_b: f64,
    pub difference: f64,
    /// `None` when the correlation is undefined
    pub compatible_error: Option<f64>,
    pub correlation: Option<f64>,
    pub verdict: Verdict,
    /// `true` when the methods are statistically indistinguishable
    pub same: Option<bool>,
}

impl From<&PairwiseComparison> for JsonComparison {
    fn from(c: &PairwiseComparison) -> Self {
        Self {
            method_a: c.method_a.clone(),
            method_b: c.method_b.clone(),
            rmse_a: c.rmse_a,
            rmse_b: c.rmse_b,
            difference: c.difference,
            compatible_error: finite(c.compatible_error),
            correlation: finite(c.correlation),
            verdict: c.verdict,
            same: c.verdict.same(),
        }
    }
}

/// Complete JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub confidence_level: f64,
    pub samples: usize,
    pub methods: Vec<JsonMethod>,
    pub comparisons: Vec<JsonComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_bars: Option<Vec<ErrorBars>>,
}

impl JsonReport {
    /// Build a report from an analysis
    pub fn new(analysis: &Analysis, include_error_bars: bool) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            confidence_level: analysis.confidence_level.value(),
            samples: analysis.sample_count,
            methods: analysis
                .methods
                .iter()
                .map(|m| JsonMethod {
                    name: m.name.clone(),
                    rmse: m.rmse,
                    mae: m.mae,
                    me: m.me,
                })
                .collect(),
            comparisons: analysis.comparisons.iter().map(JsonComparison::from).collect(),
            error_bars: include_error_bars.then(|| analysis.all_error_bars()),
        }
    }

    /// Serialize to pretty-printed JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{analyze, AnalysisConfig};
    use crate::registry::MethodRegistry;

    fn analysis() -> Analysis {
        let reference: Vec<f64> = (1..=10).map(f64::from).collect();
        let far: Vec<f64> = reference.iter().map(|v| v + 5.0).collect();
        let registry = MethodRegistry::new(reference.clone())
            .unwrap()
            .with_method("B", reference)
            .unwrap()
            .with_method("C", far)
            .unwrap()
            .with_null_baseline()
            .unwrap();
        analyze(&registry, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_json_report_structure() {
        let report = JsonReport::new(&analysis(), false);
        assert_eq!(report.methods.len(), 3);
        assert_eq!(report.comparisons.len(), 3);
        assert_eq!(report.samples, 10);
        assert!(report.error_bars.is_none());

        let json = report.to_json().unwrap();
        assert!(json.contains("\"method_a\": \"B\""));
        assert!(json.contains("\"verdict\": \"significant\""));
        assert!(!json.contains("error_bars"));
    }

    #[test]
    fn test_nan_serialized_as_null() {
        let report = JsonReport::new(&analysis(), false);
        let null_pair = report
            .comparisons
            .iter()
            .find(|c| c.method_b == "null")
            .unwrap();
        assert_eq!(null_pair.compatible_error, None);
        assert_eq!(null_pair.same, None);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"compatible_error\": null"));
        assert!(json.contains("\"verdict\": \"indeterminate\""));
    }

    #[test]
    fn test_json_includes_error_bars() {
        let report = JsonReport::new(&analysis(), true);
        let bars = report.error_bars.as_ref().unwrap();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].names, vec!["B", "C", "null"]);

        let json = report.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["error_bars"][2]["metric"], "me");
    }
}
