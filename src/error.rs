//! Error types for the statistics engine

use thiserror::Error;

/// Errors produced by parsing and statistical reductions
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    /// A retained input line failed integer parsing
    #[error("line {line}: expected integer, got {content:?}")]
    Parse { line: usize, content: String },

    /// An operation was invoked on a sequence too small to be meaningful
    #[error("insufficient data: need at least {needed} samples, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// A requested percentile point was outside [0, 100]
    #[error("percentile {0} outside [0, 100]")]
    InvalidPercentile(f64),
}

pub type Result<T> = std::result::Result<T, StatsError>;
