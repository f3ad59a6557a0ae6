//! Error types for Weibull fitting
//!
//! Provides a unified error type for all wind-weibull crates.

use thiserror::Error;

/// Core error type for Weibull estimation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Fixed-point iteration exceeded its safety cap
    #[error("Convergence failure: no fixed point after {iterations} iterations")]
    Convergence { iterations: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("shape must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: shape must be positive");

        let err = Error::InvalidInput("bin width must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid input: bin width must be positive");

        let err = Error::InsufficientData {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::Computation("regression slope is non-finite".to_string());
        assert_eq!(
            err.to_string(),
            "Computation error: regression slope is non-finite"
        );

        let err = Error::Convergence { iterations: 1000 };
        assert_eq!(
            err.to_string(),
            "Convergence failure: no fixed point after 1000 iterations"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input();
        match err {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::size_mismatch(9, 5, "fit curve");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in fit curve: expected 9, got 5"
        );

        let err = Error::non_finite("sample series");
        assert_eq!(
            err.to_string(),
            "Computation error: sample series contains NaN or infinite values"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function(succeed: bool) -> Result<f64> {
            if succeed {
                Ok(2.0)
            } else {
                Err(Error::Computation("test failure".to_string()))
            }
        }

        assert_eq!(test_function(true).unwrap(), 2.0);
        assert!(test_function(false).is_err());
    }
}
