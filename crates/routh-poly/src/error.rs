//! Error types for polynomial parsing and root finding.

use thiserror::Error;

/// Errors that can occur while parsing a characteristic polynomial.
///
/// Positions are byte offsets into the input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input contains no expression.
    #[error("No equation provided")]
    Empty,

    /// A character that cannot start any token.
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedChar {
        /// Offending character
        ch: char,
        /// Byte offset
        position: usize,
    },

    /// A token that does not fit the grammar at this point.
    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken {
        /// Textual form of the token
        found: String,
        /// Byte offset
        position: usize,
    },

    /// Input ended in the middle of an expression.
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    /// An opening parenthesis is never closed.
    #[error("Unclosed parenthesis opened at position {position}")]
    UnclosedParenthesis {
        /// Byte offset of the `(`
        position: usize,
    },

    /// A number literal that does not parse as a float.
    #[error("Invalid number '{text}' at position {position}")]
    InvalidNumber {
        /// Literal text
        text: String,
        /// Byte offset
        position: usize,
    },

    /// An identifier other than the transform variable.
    #[error("Unknown identifier '{name}' at position {position} (expected '{expected}')")]
    UnknownIdentifier {
        /// Identifier found
        name: String,
        /// The transform variable
        expected: String,
        /// Byte offset
        position: usize,
    },

    /// Exponent is not a small non-negative integer constant.
    #[error("Invalid exponent at position {position}: {reason}")]
    InvalidExponent {
        /// Why the exponent was rejected
        reason: String,
        /// Byte offset of the exponent
        position: usize,
    },

    /// Division by an expression that depends on the variable.
    #[error("Division by a non-constant expression at position {position}")]
    NonConstantDivisor {
        /// Byte offset of the divisor
        position: usize,
    },

    /// Division by a constant zero.
    #[error("Division by zero at position {position}")]
    DivisionByZero {
        /// Byte offset of the divisor
        position: usize,
    },

    /// The expression expands to the zero polynomial.
    #[error("Expression is identically zero")]
    ZeroPolynomial,
}

impl ParseError {
    /// Create an UnexpectedToken error.
    pub fn unexpected<S: Into<String>>(found: S, position: usize) -> Self {
        Self::UnexpectedToken {
            found: found.into(),
            position,
        }
    }

    /// Create an InvalidExponent error.
    pub fn invalid_exponent<S: Into<String>>(reason: S, position: usize) -> Self {
        Self::InvalidExponent {
            reason: reason.into(),
            position,
        }
    }
}

/// Errors that can occur while finding polynomial roots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RootError {
    /// The zero polynomial has no finite set of roots.
    #[error("Cannot find the roots of the zero polynomial")]
    ZeroPolynomial,

    /// A coefficient is NaN or infinite.
    #[error("Polynomial has a non-finite coefficient")]
    NonFiniteCoefficient,

    /// The eigenvalue iteration did not converge.
    #[error("Root finding did not converge after {iterations} iterations (degree {degree})")]
    NoConvergence {
        /// Polynomial degree
        degree: usize,
        /// Iteration budget that was exhausted
        iterations: usize,
    },
}

/// Result type alias for parsing.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type alias for root finding.
pub type RootResult<T> = std::result::Result<T, RootError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::unexpected(")", 4);
        assert_eq!(err.to_string(), "Unexpected ')' at position 4");

        let err = ParseError::invalid_exponent("must be an integer", 3);
        assert!(err.to_string().contains("must be an integer"));

        let err = RootError::NoConvergence {
            degree: 7,
            iterations: 500,
        };
        assert!(err.to_string().contains("500"));
    }
}
