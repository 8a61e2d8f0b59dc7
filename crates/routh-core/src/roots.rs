//! Classification of characteristic roots by half-plane.
//!
//! Roots come from an external solver. Each one is placed in exactly one of
//! three groups using the shared [`Tolerance`]:
//!
//! - **imaginary axis**: `|re| < tol` and `|im| > tol`
//! - **right half plane**: otherwise, when `re > 0`
//! - **left half plane**: everything else
//!
//! Only the first two groups are collected; the left half plane is counted.
//! Roots that cannot be compared numerically ([`Root::Unresolved`] or a
//! non-finite part) are skipped without error.

use crate::types::{Scalar, Tolerance};
use nalgebra::Complex;
use num_traits::Float;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A root of a characteristic polynomial as returned by a solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Root<T: Scalar> {
    /// Purely real root
    Real(T),
    /// Complex root (the imaginary part may be zero)
    Complex(Complex<T>),
    /// Root left in a form that cannot be compared numerically
    Unresolved(String),
}

/// Region of the s-plane a root belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PoleLocation {
    /// Strictly positive real part (unstable)
    RightHalfPlane,
    /// Numerically zero real part, nonzero imaginary part (marginal)
    ImaginaryAxis,
    /// Anything else (stable)
    LeftHalfPlane,
}

impl<T: Scalar> Root<T> {
    /// Real part, if numerically comparable.
    pub fn real_part(&self) -> Option<T> {
        match self {
            Self::Real(r) => Some(*r),
            Self::Complex(c) => Some(c.re),
            Self::Unresolved(_) => None,
        }
        .filter(|v| <T as Float>::is_finite(*v))
    }

    /// Imaginary part, if numerically comparable. Zero for real roots.
    pub fn imag_part(&self) -> Option<T> {
        match self {
            Self::Real(_) => Some(T::zero()),
            Self::Complex(c) => Some(c.im),
            Self::Unresolved(_) => None,
        }
        .filter(|v| <T as Float>::is_finite(*v))
    }

    /// Whether both parts are finite numbers.
    pub fn is_resolved(&self) -> bool {
        self.real_part().is_some() && self.imag_part().is_some()
    }

    /// Region of the s-plane, or `None` for an unclassifiable root.
    pub fn location(&self, tolerance: Tolerance<T>) -> Option<PoleLocation> {
        let re = self.real_part()?;
        let im = self.imag_part()?;

        if tolerance.is_negligible(re) && <T as Float>::abs(im) > tolerance.value() {
            Some(PoleLocation::ImaginaryAxis)
        } else if re > T::zero() {
            Some(PoleLocation::RightHalfPlane)
        } else {
            Some(PoleLocation::LeftHalfPlane)
        }
    }
}

impl<T: Scalar> From<Complex<T>> for Root<T> {
    fn from(c: Complex<T>) -> Self {
        if <T as Float>::is_finite(c.re) && <T as Float>::is_finite(c.im) {
            Self::Complex(c)
        } else {
            Self::Unresolved(format!("{} + {}i", c.re, c.im))
        }
    }
}

impl<T: Scalar> fmt::Display for Root<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        match self {
            Self::Real(r) => write!(f, "{:.*}", precision, r),
            Self::Complex(c) => write!(f, "{:.*}{:+.*}i", precision, c.re, precision, c.im),
            Self::Unresolved(expr) => f.write_str(expr),
        }
    }
}

/// Roots grouped by half-plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RootClassification<T: Scalar> {
    /// Roots with strictly positive real part
    pub right_half_plane: Vec<Root<T>>,
    /// Roots on the imaginary axis (excluding the origin)
    pub imaginary_axis: Vec<Root<T>>,
    /// Number of roots in the left half plane
    pub left_half_plane: usize,
    /// Number of roots that could not be compared numerically
    pub unclassified: usize,
}

impl<T: Scalar> Default for RootClassification<T> {
    fn default() -> Self {
        Self {
            right_half_plane: Vec::new(),
            imaginary_axis: Vec::new(),
            left_half_plane: 0,
            unclassified: 0,
        }
    }
}

impl<T: Scalar> RootClassification<T> {
    /// Number of unstable (right-half-plane) roots.
    pub fn unstable_count(&self) -> usize {
        self.right_half_plane.len()
    }

    /// Whether any root lies on the imaginary axis.
    pub fn is_marginal(&self) -> bool {
        !self.imaginary_axis.is_empty()
    }

    /// Total number of roots seen, classified or not.
    pub fn total(&self) -> usize {
        self.right_half_plane.len() + self.imaginary_axis.len() + self.left_half_plane + self.unclassified
    }
}

/// Classifies roots with the default tolerance.
pub fn classify_roots<T: Scalar>(roots: &[Root<T>]) -> RootClassification<T> {
    classify_roots_with_tolerance(roots, Tolerance::default())
}

/// Classifies roots into right-half-plane and imaginary-axis groups.
pub fn classify_roots_with_tolerance<T: Scalar>(
    roots: &[Root<T>],
    tolerance: Tolerance<T>,
) -> RootClassification<T> {
    let mut groups = RootClassification::default();

    for root in roots {
        match root.location(tolerance) {
            Some(PoleLocation::RightHalfPlane) => groups.right_half_plane.push(root.clone()),
            Some(PoleLocation::ImaginaryAxis) => groups.imaginary_axis.push(root.clone()),
            Some(PoleLocation::LeftHalfPlane) => groups.left_half_plane += 1,
            None => groups.unclassified += 1,
        }
    }

    groups
}
