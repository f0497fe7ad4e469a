//! Error types for the ar-acf library.

use thiserror::Error;

/// Result type alias for simulation and estimation operations.
pub type Result<T> = std::result::Result<T, AcfError>;

/// Errors that can occur during simulation or estimation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcfError {
    /// Invalid parameter value in a process specification.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Requested maximum lag is outside the valid range for the series.
    #[error("invalid lag: {lag} (valid range 1..={max})")]
    InvalidLag { lag: usize, max: usize },

    /// Series has zero variance; autocorrelation is undefined beyond lag 0.
    #[error("degenerate series: zero variance")]
    DegenerateSeries,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = AcfError::InvalidParameter("length must be positive".to_string());
        assert_eq!(err.to_string(), "invalid parameter: length must be positive");

        let err = AcfError::InvalidLag { lag: 12, max: 9 };
        assert_eq!(err.to_string(), "invalid lag: 12 (valid range 1..=9)");

        let err = AcfError::DegenerateSeries;
        assert_eq!(err.to_string(), "degenerate series: zero variance");

        let err = AcfError::InsufficientData { needed: 2, got: 1 };
        assert_eq!(err.to_string(), "insufficient data: need at least 2, got 1");
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = AcfError::DegenerateSeries;
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
