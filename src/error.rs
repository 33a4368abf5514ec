//! Typed failures for the error-metric core
//!
//! Every condition carries enough context (sample count, method name) for the
//! caller to diagnose it. Undefined correlations are NOT errors: they surface
//! as NaN and an indeterminate verdict (see `comparison::Verdict`).

use thiserror::Error;

/// Errors produced by metric computation and registry construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatError {
    #[error("Not enough points: {n} datapoints given, at least {required} required")]
    InsufficientSamples { n: usize, required: usize },

    #[error("Length mismatch: reference has {expected} samples, series has {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Series is empty")]
    EmptySeries,

    #[error("Confidence level must be in (0, 1), got {0}")]
    InvalidConfidence(f64),

    #[error("Method '{0}' is already registered")]
    DuplicateMethod(String),

    #[error("Method '{method}': {source}")]
    Method {
        method: String,
        #[source]
        source: Box<StatError>,
    },
}

impl StatError {
    /// Attach the method name to an error raised while evaluating it
    pub fn for_method(self, method: &str) -> Self {
        match self {
            already @ StatError::Method { .. } => already,
            other => StatError::Method {
                method: method.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// The underlying condition, with any method context stripped
    pub fn root(&self) -> &StatError {
        match self {
            StatError::Method { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatError>;
