//! CSV output format for analysis results
//!
//! `--format csv` emits the per-method metric table, a blank line, then the
//! pairwise comparison table. Error bars (`--error-bars`) follow as a third
//! block in long form, one row per (metric, method).

use crate::comparison::{Analysis, ErrorBars};

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    analysis: &'a Analysis,
    include_error_bars: bool,
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter
    pub fn new(analysis: &'a Analysis, include_error_bars: bool) -> Self {
        Self {
            analysis,
            include_error_bars,
        }
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Empty field for NaN, plain number otherwise
    fn number(value: f64) -> String {
        if value.is_nan() {
            String::new()
        } else {
            value.to_string()
        }
    }

    /// Per-method RMSE/MAE/ME table
    pub fn methods_csv(&self) -> String {
        let mut output =
            String::from("method,rmse,rmse_lower,rmse_upper,mae,mae_lower,mae_upper,me,me_error\n");

        for m in &self.analysis.methods {
            let fields = [
                Self::escape_field(&m.name),
                Self::number(m.rmse.estimate),
                Self::number(m.rmse.lower),
                Self::number(m.rmse.upper),
                Self::number(m.mae.estimate),
                Self::number(m.mae.lower),
                Self::number(m.mae.upper),
                Self::number(m.me.estimate),
                Self::number(m.me.upper),
            ];
            output.push_str(&fields.join(","));
            output.push('\n');
        }

        output
    }

    /// Pairwise comparison table
    pub fn comparisons_csv(&self) -> String {
        let mut output = String::from(
            "method_a,method_b,rmse_a,rmse_b,difference,compatible_error,correlation,same\n",
        );

        for c in &self.analysis.comparisons {
            let same = c.verdict.same().map(|s| s.to_string()).unwrap_or_default();
            let fields = [
                Self::escape_field(&c.method_a),
                Self::escape_field(&c.method_b),
                Self::number(c.rmse_a),
                Self::number(c.rmse_b),
                Self::number(c.difference),
                Self::number(c.compatible_error),
                Self::number(c.correlation),
                same,
            ];
            output.push_str(&fields.join(","));
            output.push('\n');
        }

        output
    }

    /// Error bars in long form
    pub fn error_bars_csv(&self) -> String {
        let mut output = String::from("metric,method,estimate,lower,upper\n");

        for bars in self.analysis.all_error_bars() {
            Self::push_error_bars(&mut output, &bars);
        }

        output
    }

    fn push_error_bars(output: &mut String, bars: &ErrorBars) {
        for (i, name) in bars.names.iter().enumerate() {
            output.push_str(&format!(
                "{},{},{},{},{}\n",
                bars.metric,
                Self::escape_field(name),
                Self::number(bars.estimates[i]),
                Self::number(bars.lower[i]),
                Self::number(bars.upper[i]),
            ));
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = self.methods_csv();
        output.push('\n');
        output.push_str(&self.comparisons_csv());
        if self.include_error_bars {
            output.push('\n');
            output.push_str(&self.error_bars_csv());
        }
        output
    }
}
