//! Core numerics for Routh-Hurwitz stability analysis.
//!
//! This crate contains the three tightly coupled procedures of the analysis:
//! building the Routh array from a characteristic polynomial's coefficients,
//! deciding stability from the sign changes in its first column, and
//! classifying the polynomial's actual roots by half-plane. The two
//! verdicts are computed independently so that one can cross-check the other.
//!
//! Everything here is a pure function of its inputs. Parsing polynomials and
//! finding roots live in `routh-poly`.
//!
//! # Modules
//!
//! - [`array`]: Routh array construction and zero-pivot diagnostics
//! - [`error`]: Error types for malformed coefficient sequences
//! - [`roots`]: Root representation and half-plane classification
//! - [`stability`]: First-column sign-change counting
//! - [`types`]: Scalar trait and the shared tolerance
//!
//! # Example
//!
//! ```
//! use routh_core::prelude::*;
//!
//! let array = RouthArray::build(&[1.0, 1.0, 10.0, 72.0, 152.0, 240.0]).unwrap();
//! let verdict = classify(&array);
//! assert!(!verdict.is_stable);
//! assert_eq!(verdict.sign_changes, 2);
//! ```

pub mod array;
pub mod error;
pub mod roots;
pub mod stability;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{Result, RouthError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::array::{PivotSubstitution, RouthArray};
    pub use crate::error::{Result, RouthError};
    pub use crate::roots::{
        classify_roots, classify_roots_with_tolerance, PoleLocation, Root, RootClassification,
    };
    pub use crate::stability::{classify, classify_with_tolerance, StabilityVerdict};
    pub use crate::types::{Scalar, Tolerance};
    pub use nalgebra::Complex;
}
