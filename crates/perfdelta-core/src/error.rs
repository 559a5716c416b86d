//! Error types for performance comparison
//!
//! Degenerate measurement data never produces an error; the comparison engine
//! reports it through sentinel values instead. Errors are reserved for
//! configuration mistakes and for inputs that violate the finite-value contract.

use thiserror::Error;

/// Core error type for perfdelta operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for a zero resample count
    pub fn invalid_resamples(count: usize) -> Self {
        Self::InvalidParameter(format!("Resample count {count} must be positive"))
    }
}
