// Pairwise significance comparison of candidate methods
//
// Every registered method is scored against the reference with RMSE, MAE and
// ME (each with confidence bounds). Methods are then compared pairwise on RMSE:
// a difference smaller than the correlation-corrected "compatible error" means
// the two methods cannot be told apart at the configured confidence level.
//
// The interval is a large-sample normal approximation. No resampling or
// bootstrap is performed.

mod analysis;
mod config;
mod pairwise;

pub use analysis::{analyze, compare_all, summarize, Analysis, ErrorBars, MethodSummary};
pub use config::AnalysisConfig;
pub use pairwise::{compare_pair, compatible_error, PairwiseComparison, Verdict};

#[cfg(test)]
mod tests;
