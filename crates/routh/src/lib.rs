//! Routh-Hurwitz stability analysis of linear time-invariant systems.
//!
//! This crate ties the pieces together: a characteristic equation typed as
//! text is expanded into coefficients, the Routh array is built and its first
//! column scanned for sign changes, and the roots are found and grouped by
//! half-plane so the two verdicts can be compared.
//!
//! # Crates
//!
//! - `routh-core`: Routh array, sign-change classifier, root classifier
//! - `routh-poly`: polynomial parser and root finder
//! - `routh` (this crate): [`Analyzer`], [`StabilityReport`], batch analysis
//!
//! # Logging
//!
//! The pipeline emits [`tracing`] events: `debug` for intermediate results,
//! `warn` whenever a zero pivot is replaced or the two methods disagree.
//! Installing a subscriber is left to the application.
//!
//! # Example
//!
//! ```
//! use routh::prelude::*;
//!
//! let report = analyze("s^5+s^4+10s^3+72s^2+152s+240").unwrap();
//! assert!(!report.is_stable);
//! assert_eq!(report.sign_changes, 2);
//! assert_eq!(report.rhs_poles.len(), 2);
//! assert_eq!(report.methods_agree(), Some(true));
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod report;

pub use analysis::Analyzer;
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use report::StabilityReport;

pub use routh_core;
pub use routh_poly;

/// Analyses `equation` in the variable `s` with the default configuration.
pub fn analyze(equation: &str) -> Result<StabilityReport> {
    Analyzer::default().analyze(equation)
}

/// Analyses a descending coefficient sequence with the default configuration.
pub fn analyze_coefficients(coefficients: &[f64]) -> Result<StabilityReport> {
    Analyzer::default().analyze_coefficients(coefficients)
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::Analyzer;
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{AnalysisError, Result};
    pub use crate::report::StabilityReport;
    pub use crate::{analyze, analyze_coefficients};
    pub use routh_core::prelude::{
        classify, classify_roots, PivotSubstitution, PoleLocation, Root, RootClassification,
        RouthArray, StabilityVerdict, Tolerance,
    };
    pub use routh_poly::{find_roots, parse_polynomial, Polynomial};
}
