//! Error types for statistical process control
//!
//! Provides a unified error type for all spc-stats crates.

use thiserror::Error;

/// Core error type for SPC computations
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer samples than the chosen chart type needs
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Specification limits are malformed
    #[error("Invalid specification: {0}")]
    InvalidSpec(String),

    /// Zero spread makes capability indices undefined
    #[error("Degenerate variance: {0}")]
    DegenerateVariance(String),

    /// Subgroup sizes vary across the series
    #[error("Inconsistent subgroup size: subgroup {subgroup} has {actual} values, expected {expected}")]
    InconsistentSubgroupSize {
        subgroup: usize,
        expected: usize,
        actual: usize,
    },

    /// No control-chart constants exist for this subgroup size
    #[error("Unsupported subgroup size: {0} (supported sizes are 2..=10)")]
    UnsupportedSubgroupSize(usize),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A sample source failed to produce a batch
    #[error("Sample source error: {0}")]
    Source(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(expected: usize) -> Self {
        Self::InsufficientData {
            expected,
            actual: 0,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a zero spread estimate
    pub fn zero_spread(estimate: &str) -> Self {
        Self::DegenerateVariance(format!(
            "{estimate} is zero; capability indices are undefined for constant data"
        ))
    }
}
