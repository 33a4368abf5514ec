//! Ordered registry of candidate methods evaluated against one reference
//!
//! Registration order is significant: it is the order of every per-method
//! report and of the pairwise comparison enumeration.
//!
//! Building a registry is an explicit sequence:
//!
//! 1. [`MethodRegistry::new`] with the reference series
//! 2. [`MethodRegistry::push`] for each candidate (length-checked)
//! 3. [`MethodRegistry::with_null_baseline`] to append the synthetic `"null"`
//!    method, a constant series at the reference mean
//!
//! The null baseline counts as a method: with M registered candidates plus
//! the baseline there are `(M + 1) * M / 2` pairwise comparisons.

use crate::error::{Result, StatError};
use crate::stats::mean;

/// Default name of the synthetic constant baseline method
pub const NULL_METHOD: &str = "null";

/// A named series aligned index-for-index with the reference
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub values: Vec<f64>,
}

/// Reference series plus candidate methods in registration order
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRegistry {
    reference: Vec<f64>,
    methods: Vec<Method>,
    null_name: Option<String>,
}

impl MethodRegistry {
    /// Start a registry for the given reference series
    pub fn new(reference: Vec<f64>) -> Result<Self> {
        if reference.is_empty() {
            return Err(StatError::EmptySeries);
        }
        Ok(Self {
            reference,
            methods: Vec::new(),
            null_name: None,
        })
    }

    /// Register a candidate method
    ///
    /// # Errors
    /// * `LengthMismatch` if the series length differs from the reference
    /// * `DuplicateMethod` if the name is already registered
    pub fn push(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if values.len() != self.reference.len() {
            return Err(StatError::LengthMismatch {
                expected: self.reference.len(),
                actual: values.len(),
            }
            .for_method(&name));
        }
        if self.methods.iter().any(|m| m.name == name) {
            return Err(StatError::DuplicateMethod(name));
        }
        self.methods.push(Method { name, values });
        Ok(())
    }

    /// Builder form of [`push`](Self::push)
    pub fn with_method(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        self.push(name, values)?;
        Ok(self)
    }

    /// Append the `"null"` baseline: a constant series at the reference mean
    pub fn with_null_baseline(self) -> Result<Self> {
        self.with_named_null_baseline(NULL_METHOD)
    }

    /// Append a constant-at-reference-mean baseline under a custom name
    ///
    /// Only one baseline may be added; a second call is a `DuplicateMethod`.
    pub fn with_named_null_baseline(mut self, name: &str) -> Result<Self> {
        if self.null_name.is_some() {
            return Err(StatError::DuplicateMethod(name.to_string()));
        }
        let level = mean(&self.reference);
        let baseline = vec![level; self.reference.len()];
        self.push(name, baseline)?;
        self.null_name = Some(name.to_string());
        Ok(self)
    }

    pub fn reference(&self) -> &[f64] {
        &self.reference
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Number of samples per series
    pub fn sample_count(&self) -> usize {
        self.reference.len()
    }

    /// Number of registered methods, baseline included
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Name of the null baseline, if one was appended
    pub fn null_baseline(&self) -> Option<&str> {
        self.null_name.as_deref()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|m| m.name.as_str())
    }

    /// Number of unordered method pairs: M * (M - 1) / 2
    pub fn pair_count(&self) -> usize {
        let m = self.methods.len();
        m * m.saturating_sub(1) / 2
    }
}
