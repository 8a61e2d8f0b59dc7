//! Scalar trait and the shared numerical tolerance.
//!
//! Every numerical decision in the crate that depends on "is this value
//! zero?" goes through a single [`Tolerance`]: the pivot substitute used by
//! the Routh array builder, the first-column filter of the stability
//! classifier, and the imaginary-axis thresholds of the root classifier.

use nalgebra::{RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for scalar types used in stability analysis (f32 or f64).
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Threshold below which a value is treated as numerically zero.
    const ZERO_TOLERANCE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails, which cannot happen for `f32` or `f64`.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }
}

impl Scalar for f32 {
    // 1e-10 is below f32 resolution for any realistic coefficient magnitude.
    const ZERO_TOLERANCE: Self = 1e-6;
}

impl Scalar for f64 {
    const ZERO_TOLERANCE: Self = 1e-10;
}

/// Numerical zero threshold shared by array construction and classification.
///
/// A value `v` is *negligible* when `|v| < tolerance` (strict). The same
/// value doubles as the substitute for an exactly-zero pivot while the
/// Routh array is being built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerance<T: Scalar> {
    value: T,
}

impl<T: Scalar> Default for Tolerance<T> {
    fn default() -> Self {
        Self {
            value: T::ZERO_TOLERANCE,
        }
    }
}

impl<T: Scalar> Tolerance<T> {
    /// Creates a tolerance with the given threshold.
    ///
    /// Non-positive or non-finite values fall back to the scalar default.
    pub fn new(value: T) -> Self {
        if <T as Float>::is_finite(value) && value > T::zero() {
            Self { value }
        } else {
            Self::default()
        }
    }

    /// Returns the threshold value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Whether `v` is numerically indistinguishable from zero.
    #[inline]
    pub fn is_negligible(&self, v: T) -> bool {
        <T as Float>::abs(v) < self.value
    }

    /// Value to divide by in place of an exactly-zero pivot.
    #[inline]
    pub fn pivot_substitute(&self) -> T {
        self.value
    }
}
