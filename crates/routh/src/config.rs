//! Configuration for [`crate::Analyzer`].

use routh_core::types::Tolerance;
use routh_poly::parser::DEFAULT_VARIABLE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings shared by every analysis an [`crate::Analyzer`] runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    /// Numerical zero threshold, also used as the zero-pivot substitute
    pub tolerance: f64,

    /// Name of the transform variable in equation text
    pub variable: String,

    /// Whether to find and classify roots alongside the Routh array
    pub compute_roots: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::<f64>::default().value(),
            variable: DEFAULT_VARIABLE.to_string(),
            compute_roots: true,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the numerical zero threshold.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the transform variable name (`s` by default).
    pub fn with_variable<S: Into<String>>(mut self, variable: S) -> Self {
        self.variable = variable.into();
        self
    }

    /// Enable or disable root finding.
    pub fn with_roots(mut self, compute_roots: bool) -> Self {
        self.compute_roots = compute_roots;
        self
    }

    /// Tolerance actually applied; invalid values fall back to the default.
    pub fn effective_tolerance(&self) -> Tolerance<f64> {
        Tolerance::new(self.tolerance)
    }

    /// Whether `tolerance` is used as configured (finite and positive).
    pub fn tolerance_is_valid(&self) -> bool {
        self.effective_tolerance().value() == self.tolerance
    }
}
