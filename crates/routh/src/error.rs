//! Error type for the end-to-end analysis pipeline.

use routh_core::RouthError;
use routh_poly::{ParseError, RootError};
use thiserror::Error;

/// Errors that can occur while analysing a characteristic equation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The equation text could not be normalised into coefficients.
    #[error("Invalid equation: {0}")]
    Parse(#[from] ParseError),

    /// The coefficient sequence was rejected by the array builder.
    #[error("Routh array construction failed: {0}")]
    Routh(#[from] RouthError),

    /// The root finder failed.
    #[error("Root finding failed: {0}")]
    Roots(#[from] RootError),

    /// The configured variable name is not a valid identifier.
    #[error("Invalid transform variable '{0}'")]
    InvalidVariable(String),
}

impl AnalysisError {
    /// Whether the failure was caused by the input text itself.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Routh(_))
    }
}

/// Result type alias for analysis.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        let err: AnalysisError = ParseError::Empty.into();
        assert_eq!(err.to_string(), "Invalid equation: No equation provided");
        assert!(err.is_input_error());

        let err: AnalysisError = RouthError::EmptyCoefficients.into();
        assert!(err.to_string().starts_with("Routh array construction failed"));

        let err: AnalysisError = RootError::ZeroPolynomial.into();
        assert!(!err.is_input_error());
    }
}
