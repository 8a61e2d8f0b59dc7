//! Sign-change stability classification of a Routh array.
//!
//! By the Routh-Hurwitz theorem the number of sign changes in the first
//! column equals the number of characteristic roots in the open right half
//! of the s-plane. Entries that are numerically zero (including pivots that
//! were substituted during construction) carry no sign and are dropped
//! before the scan.
//!
//! An all-zero or single-entry filtered column yields zero sign changes and
//! therefore a "stable" verdict. That is a property of the scan, not a proof
//! of stability; callers that care should cross-check with the roots.

use crate::array::RouthArray;
use crate::types::{Scalar, Tolerance};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of the first-column sign-change scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StabilityVerdict {
    /// True iff no sign change was found
    pub is_stable: bool,
    /// Number of sign changes, i.e. right-half-plane roots
    pub sign_changes: usize,
}

impl StabilityVerdict {
    /// Verdict for a given number of sign changes.
    pub fn from_sign_changes(sign_changes: usize) -> Self {
        Self {
            is_stable: sign_changes == 0,
            sign_changes,
        }
    }

    /// Number of right-half-plane poles implied by the verdict.
    pub fn unstable_poles(&self) -> usize {
        self.sign_changes
    }
}

/// Classifies the array using the tolerance it was built with.
pub fn classify<T: Scalar>(array: &RouthArray<T>) -> StabilityVerdict {
    classify_with_tolerance(array, array.tolerance())
}

/// Classifies the array, ignoring first-column entries below `tolerance`.
pub fn classify_with_tolerance<T: Scalar>(
    array: &RouthArray<T>,
    tolerance: Tolerance<T>,
) -> StabilityVerdict {
    StabilityVerdict::from_sign_changes(count_sign_changes(&array.first_column(), tolerance))
}

/// Counts adjacent opposite-sign pairs after dropping negligible entries.
pub fn count_sign_changes<T: Scalar>(column: &[T], tolerance: Tolerance<T>) -> usize {
    let significant: Vec<T> = column
        .iter()
        .copied()
        .filter(|&v| !tolerance.is_negligible(v))
        .collect();

    significant
        .windows(2)
        .filter(|pair| pair[0] * pair[1] < T::zero())
        .count()
}
