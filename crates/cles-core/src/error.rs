//! Error types for effect size estimation
//!
//! Provides a unified error type for all cles crates.

use thiserror::Error;

/// Core error type for effect size operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data (empty samples, NaN or infinite values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The distribution collapsed to a point and cannot be evaluated
    #[error("Degenerate distribution: {0}")]
    DegenerateDistribution(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty sample
    pub fn empty_input(context: &str) -> Self {
        Self::InvalidInput(format!("{context} must be non-empty"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a zero scale parameter
    pub fn zero_scale(context: &str) -> Self {
        Self::DegenerateDistribution(format!("{context} has zero scale"))
    }
}
