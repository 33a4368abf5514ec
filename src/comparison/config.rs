// Configuration for error-metric analysis
//
// Loaded from TOML (`--config`) and overridden by command-line flags.

use crate::confidence::ConfidenceLevel;
use crate::registry::NULL_METHOD;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for one analysis run
///
/// # Example
/// ```
/// use errsig::comparison::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.confidence_level.value(), 0.95);
/// assert_eq!(config.reference_column, "REF");
/// assert!(config.null_baseline);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Two-sided confidence level for every metric interval
    ///
    /// - 0.95 (default): z = 1.96, RMSE/MAE need at least 9 samples
    /// - 0.99: z = 2.576, RMSE/MAE need at least 15 samples
    /// - 0.90: z = 1.645, RMSE/MAE need at least 7 samples
    pub confidence_level: ConfidenceLevel,

    /// Header of the reference column in the input table
    pub reference_column: String,

    /// Append the constant-at-reference-mean baseline method
    pub null_baseline: bool,

    /// Name under which the baseline is reported
    pub null_name: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            confidence_level: ConfidenceLevel::P95,
            reference_column: "REF".to_string(),
            null_baseline: true,
            null_name: NULL_METHOD.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// 99% intervals: fewer methods declared distinguishable
    pub fn strict() -> Self {
        Self {
            confidence_level: ConfidenceLevel::P99,
            ..Self::default()
        }
    }

    /// 90% intervals: more methods declared distinguishable
    pub fn permissive() -> Self {
        Self {
            confidence_level: ConfidenceLevel::P90,
            ..Self::default()
        }
    }

    /// Parse a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML config")?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.reference_column.trim().is_empty() {
            return Err("reference_column must not be empty".to_string());
        }

        if self.null_baseline && self.null_name.trim().is_empty() {
            return Err("null_name must not be empty when null_baseline is enabled".to_string());
        }

        if self.null_baseline && self.null_name == self.reference_column {
            return Err(format!(
                "null_name '{}' collides with reference_column",
                self.null_name
            ));
        }

        Ok(())
    }
}
