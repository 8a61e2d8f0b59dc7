//! Error types for Routh array construction.
//!
//! A vanishing pivot is *not* an error: it is handled by substitution and
//! reported as a [`crate::array::PivotSubstitution`] diagnostic. The only
//! failures the core knows about are malformed coefficient sequences.

use thiserror::Error;

/// Errors that can occur while building a Routh array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouthError {
    /// The coefficient sequence is empty.
    ///
    /// A characteristic polynomial needs at least one coefficient.
    #[error("Coefficient sequence is empty")]
    EmptyCoefficients,

    /// A coefficient is NaN or infinite.
    #[error("Coefficient at index {index} is not finite: {value}")]
    NonFiniteCoefficient {
        /// Position in the descending-degree sequence
        index: usize,
        /// Textual form of the offending value
        value: String,
    },
}

impl RouthError {
    /// Create a NonFiniteCoefficient error.
    pub fn non_finite<V: std::fmt::Display>(index: usize, value: V) -> Self {
        Self::NonFiniteCoefficient {
            index,
            value: value.to_string(),
        }
    }
}

/// Result type alias for Routh array operations.
pub type Result<T> = std::result::Result<T, RouthError>;
