//! errsig - error statistics with confidence intervals
//!
//! This library scores candidate series against a reference with RMSE, MAE
//! and mean error, attaches large-sample confidence bounds to each estimate,
//! and decides pairwise whether two candidates' RMSE values differ
//! significantly.

pub mod cli;
pub mod comparison;
pub mod confidence;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod loader;
pub mod metrics;
pub mod registry;
pub mod stats;

pub use confidence::ConfidenceLevel;
pub use error::StatError;
pub use metrics::{Metric, MetricResult};
pub use registry::{Method, MethodRegistry, NULL_METHOD};
