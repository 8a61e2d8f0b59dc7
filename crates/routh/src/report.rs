//! Result of a complete stability analysis.

use routh_core::array::PivotSubstitution;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything one analysis produced.
///
/// The Routh verdict (`is_stable`, `sign_changes`) and the root grouping
/// (`rhs_poles`, `imaginary_poles`) are computed independently; see
/// [`StabilityReport::methods_agree`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StabilityReport {
    /// Expanded characteristic polynomial
    pub equation: String,

    /// Coefficients, highest degree first
    pub coefficients: Vec<f64>,

    /// Routh array, row by row
    pub routh_array: Vec<Vec<f64>>,

    /// True iff the first column has no sign change
    pub is_stable: bool,

    /// Sign changes in the first column
    pub sign_changes: usize,

    /// All roots, formatted; `None` when root finding was disabled
    pub roots: Option<Vec<String>>,

    /// Roots in the open right half plane, formatted
    pub rhs_poles: Vec<String>,

    /// Roots on the imaginary axis, formatted
    pub imaginary_poles: Vec<String>,

    /// Roots that could not be compared numerically
    pub unclassified_roots: usize,

    /// Zero pivots replaced while building the array
    pub pivot_substitutions: Vec<PivotSubstitution<f64>>,
}

impl StabilityReport {
    /// Degree of the analysed polynomial, as seen by the Routh array.
    pub fn degree(&self) -> usize {
        self.routh_array.len().saturating_sub(1)
    }

    /// Whether the sign-change count matches the number of right-half-plane
    /// roots. `None` when roots were not computed.
    pub fn methods_agree(&self) -> Option<bool> {
        self.roots
            .as_ref()
            .map(|_| self.sign_changes == self.rhs_poles.len())
    }

    /// Stable by the Routh test but with poles on the imaginary axis.
    pub fn is_marginal(&self) -> bool {
        self.is_stable && !self.imaginary_poles.is_empty()
    }

    /// First-column entries of the Routh array.
    pub fn first_column(&self) -> Vec<f64> {
        self.routh_array
            .iter()
            .filter_map(|row| row.first().copied())
            .collect()
    }
}

fn poles(n: usize) -> &'static str {
    if n == 1 {
        "pole"
    } else {
        "poles"
    }
}

impl fmt::Display for StabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_stable {
            write!(f, "STABLE (all poles in the left half of the s-plane)")?;
        } else {
            write!(
                f,
                "UNSTABLE with {} {} in the right half of the s-plane",
                self.sign_changes,
                poles(self.sign_changes)
            )?;
        }
        if !self.imaginary_poles.is_empty() {
            let n = self.imaginary_poles.len();
            write!(f, "; {} {} on the imaginary axis", n, poles(n))?;
        }
        Ok(())
    }
}
