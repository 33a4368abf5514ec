//! CLI argument parsing for errsig

use crate::comparison::AnalysisConfig;
use crate::confidence::ConfidenceLevel;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "errsig")]
#[command(version)]
#[command(
    about = "Error statistics with confidence intervals and pairwise significance testing",
    long_about = None
)]
pub struct Cli {
    /// Input table (CSV with a header row; one reference column, one column per method)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Two-sided confidence level for all intervals (default: 0.95)
    #[arg(short = 'c', long = "confidence", value_name = "LEVEL")]
    pub confidence: Option<f64>,

    /// Name of the reference column (default: REF)
    #[arg(short = 'r', long = "reference", value_name = "COLUMN")]
    pub reference: Option<String>,

    /// TOML configuration file; command-line flags take precedence
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not append the constant "null" baseline method
    #[arg(long = "no-null")]
    pub no_null: bool,

    /// Also emit per-metric error-bar arrays (json/csv formats)
    #[arg(long = "error-bars")]
    pub error_bars: bool,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Resolve the effective configuration: file (if any), then flag overrides
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_file(path)?,
            None => AnalysisConfig::default(),
        };

        if let Some(level) = self.confidence {
            config.confidence_level = ConfidenceLevel::new(level)?;
        }
        if let Some(reference) = &self.reference {
            config.reference_column = reference.clone();
        }
        if self.no_null {
            config.null_baseline = false;
        }

        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }
}
