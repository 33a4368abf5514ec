//! Delimited-table ingestion
//!
//! Reads a header-first CSV table where one column (default `REF`) holds the
//! reference values and every other column is a candidate method:
//!
//! ```text
//! REF,am1,pm3,pm6
//! 1.02,1.10,0.97,1.21
//! ...
//! ```

use crate::comparison::AnalysisConfig;
use crate::registry::MethodRegistry;
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Column-oriented numeric table as read from disk
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub reference_column: String,
    pub reference: Vec<f64>,
    /// Candidate columns in file order
    pub columns: Vec<(String, Vec<f64>)>,
}

impl Table {
    /// Number of data rows
    pub fn rows(&self) -> usize {
        self.reference.len()
    }

    /// Build a method registry, optionally appending the null baseline
    pub fn into_registry(self, config: &AnalysisConfig) -> Result<MethodRegistry> {
        let mut registry = MethodRegistry::new(self.reference)?;
        for (name, values) in self.columns {
            registry.push(name, values)?;
        }
        if config.null_baseline {
            registry = registry.with_named_null_baseline(&config.null_name)?;
        }
        Ok(registry)
    }
}

/// Load a table from a CSV file
pub fn load_table<P: AsRef<Path>>(path: P, reference_column: &str) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open input table: {}", path.display()))?;
    parse_table(BufReader::new(file), reference_column)
        .with_context(|| format!("Failed to parse input table: {}", path.display()))
}

/// Parse a CSV table from any reader
pub fn parse_table<R: Read>(reader: R, reference_column: &str) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let ref_idx = headers
        .iter()
        .position(|h| h == reference_column)
        .with_context(|| {
            format!(
                "Reference column '{}' not found (columns: {})",
                reference_column,
                headers.join(", ")
            )
        })?;

    for (i, name) in headers.iter().enumerate() {
        if name.is_empty() {
            bail!("Column {} has an empty header", i + 1);
        }
        if headers[..i].contains(name) {
            bail!("Duplicate column header '{}'", name);
        }
    }

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    for (row, record) in reader.records().enumerate() {
        // Header is line 1, first data row is line 2
        let line = row + 2;
        let record = record.with_context(|| format!("Malformed record at line {}", line))?;
        for (col, field) in record.iter().enumerate() {
            let value: f64 = field.parse().with_context(|| {
                format!(
                    "Invalid number '{}' in column '{}' at line {}",
                    field, headers[col], line
                )
            })?;
            if !value.is_finite() {
                bail!(
                    "Non-finite value '{}' in column '{}' at line {}",
                    field,
                    headers[col],
                    line
                );
            }
            values[col].push(value);
        }
    }

    if values[ref_idx].is_empty() {
        bail!("Input table has no data rows");
    }

    let mut columns: Vec<(String, Vec<f64>)> = headers.into_iter().zip(values).collect();
    let (reference_column, reference) = columns.remove(ref_idx);

    tracing::debug!(
        rows = reference.len(),
        methods = columns.len(),
        "loaded input table"
    );

    Ok(Table {
        reference_column,
        reference,
        columns,
    })
}
