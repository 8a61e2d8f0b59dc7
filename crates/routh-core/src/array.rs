//! Routh array construction.
//!
//! Given the coefficients `[a_n, a_(n-1), ..., a_1, a_0]` of a degree-`n`
//! characteristic polynomial, the Routh array is the dense
//! `(n + 1) x ceil((n + 1) / 2)` grid whose first two rows hold the even- and
//! odd-indexed coefficients and whose remaining rows are derived from the two
//! rows above:
//!
//! ```text
//! r[i][j] = (r[i-1][0] * r[i-2][j+1] - r[i-2][0] * r[i-1][j+1]) / r[i-1][0]
//! ```
//!
//! The last column of every derived row has no `j + 1` neighbour and stays
//! zero.
//!
//! # Vanishing pivots
//!
//! When a first-column entry is exactly zero, the next row would divide by
//! zero. The builder replaces the pivot by the tolerance value for the
//! derivation of that next row only (the stored cell stays zero) and records
//! a [`PivotSubstitution`]. Nothing is printed and the build never aborts.
//!
//! # Example
//!
//! ```
//! use routh_core::array::RouthArray;
//!
//! // (s + 1)^3
//! let array = RouthArray::build(&[1.0, 3.0, 3.0, 1.0]).unwrap();
//! assert_eq!(array.rows(), 4);
//! assert_eq!(array.cols(), 2);
//! assert_eq!(array.first_column(), vec![1.0, 3.0, 8.0 / 3.0, 1.0]);
//! ```

use crate::error::{Result, RouthError};
use crate::stability::{self, StabilityVerdict};
use crate::types::{Scalar, Tolerance};
use nalgebra::DMatrix;
use num_traits::Float;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Record of a zero pivot that was replaced during construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PivotSubstitution<T: Scalar> {
    /// Row whose first-column entry was exactly zero
    pub row: usize,
    /// Row derived with the substituted pivot (always `row + 1`)
    pub derived_row: usize,
    /// Value divided by in place of the zero pivot
    pub substitute: T,
}

impl<T: Scalar> fmt::Display for PivotSubstitution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "zero in first column of row {}, replaced with epsilon={} to derive row {}",
            self.row, self.substitute, self.derived_row
        )
    }
}

/// Dense Routh array together with the diagnostics of its construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RouthArray<T: Scalar> {
    grid: DMatrix<T>,
    substitutions: Vec<PivotSubstitution<T>>,
    tolerance: Tolerance<T>,
}

impl<T: Scalar> RouthArray<T> {
    /// Builds the Routh array with the default tolerance.
    pub fn build(coefficients: &[T]) -> Result<Self> {
        Self::build_with_tolerance(coefficients, Tolerance::default())
    }

    /// Builds the Routh array, substituting `tolerance` for zero pivots.
    pub fn build_with_tolerance(coefficients: &[T], tolerance: Tolerance<T>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(RouthError::EmptyCoefficients);
        }
        if let Some((index, value)) = coefficients
            .iter()
            .enumerate()
            .find(|(_, c)| !<T as Float>::is_finite(**c))
        {
            return Err(RouthError::non_finite(index, value));
        }

        let rows = coefficients.len();
        let cols = rows.div_ceil(2);
        let mut grid = DMatrix::<T>::zeros(rows, cols);

        // Seed rows 0 and 1 with the even/odd-indexed coefficients.
        for (k, &c) in coefficients.iter().enumerate() {
            grid[(k % 2, k / 2)] = c;
        }

        let mut substitutions = Vec::new();
        for i in 2..rows {
            let mut pivot = grid[(i - 1, 0)];
            if pivot == T::zero() {
                pivot = tolerance.pivot_substitute();
                substitutions.push(PivotSubstitution {
                    row: i - 1,
                    derived_row: i,
                    substitute: pivot,
                });
            }
            let upper = grid[(i - 2, 0)];

            for j in 0..cols - 1 {
                grid[(i, j)] = (pivot * grid[(i - 2, j + 1)] - upper * grid[(i - 1, j + 1)]) / pivot;
            }
        }

        Ok(Self {
            grid,
            substitutions,
            tolerance,
        })
    }

    /// Number of rows (`degree + 1`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.nrows()
    }

    /// Number of columns (`ceil((degree + 1) / 2)`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.ncols()
    }

    /// Degree of the polynomial the array was built from.
    #[inline]
    pub fn degree(&self) -> usize {
        self.rows() - 1
    }

    /// Entry at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.grid.get((row, col)).copied()
    }

    /// Copy of row `i`, or `None` when out of range.
    pub fn row(&self, i: usize) -> Option<Vec<T>> {
        (i < self.rows()).then(|| self.grid.row(i).iter().copied().collect())
    }

    /// First-column entries from top to bottom.
    pub fn first_column(&self) -> Vec<T> {
        self.grid.column(0).iter().copied().collect()
    }

    /// Row-major copy of the whole grid.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.grid
            .row_iter()
            .map(|r| r.iter().copied().collect())
            .collect()
    }

    /// Underlying matrix.
    pub fn as_matrix(&self) -> &DMatrix<T> {
        &self.grid
    }

    /// Zero pivots replaced during construction, in row order.
    pub fn pivot_substitutions(&self) -> &[PivotSubstitution<T>] {
        &self.substitutions
    }

    /// Whether any pivot had to be replaced.
    pub fn has_substitutions(&self) -> bool {
        !self.substitutions.is_empty()
    }

    /// Tolerance the array was built with.
    pub fn tolerance(&self) -> Tolerance<T> {
        self.tolerance
    }

    /// Sign-change stability verdict using the array's own tolerance.
    pub fn stability(&self) -> StabilityVerdict {
        stability::classify_with_tolerance(self, self.tolerance)
    }
}

impl<T: Scalar> fmt::Display for RouthArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.row_iter().enumerate() {
            let power = self.degree() - i;
            write!(f, "s^{power:<3}|")?;
            for v in row.iter() {
                write!(f, " {:>10.4}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_seed_rows() {
        let array = RouthArray::build(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(array.rows(), 5);
        assert_eq!(array.cols(), 3);
        assert_eq!(array.row(0).unwrap(), vec![1.0, 3.0, 5.0]);
        assert_eq!(array.row(1).unwrap(), vec![2.0, 4.0, 0.0]);
    }

    #[test]
    fn test_derived_rows_leave_last_column_zero() {
        let array = RouthArray::build(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        for i in 2..array.rows() {
            assert_eq!(array.get(i, array.cols() - 1), Some(0.0));
        }
        // r[2][0] = (2*3 - 1*4) / 2 = 1, r[2][1] = (2*5 - 1*0) / 2 = 5
        assert_relative_eq!(array.get(2, 0).unwrap(), 1.0);
        assert_relative_eq!(array.get(2, 1).unwrap(), 5.0);
        // r[3][0] = (1*4 - 2*5) / 1 = -6
        assert_relative_eq!(array.get(3, 0).unwrap(), -6.0);
        // r[4][0] = (-6*5 - 1*0) / -6 = 5
        assert_relative_eq!(array.get(4, 0).unwrap(), 5.0);
    }

    #[test]
    fn test_zero_pivot_is_substituted() {
        let array = RouthArray::build(&[1.0, 0.0, 0.0]).unwrap();
        assert_eq!(array.get(1, 0), Some(0.0));
        assert_eq!(array.pivot_substitutions().len(), 1);

        let sub = array.pivot_substitutions()[0];
        assert_eq!(sub.row, 1);
        assert_eq!(sub.derived_row, 2);
        assert_eq!(sub.substitute, 1e-10);
        assert!(array.first_column().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_substitute_follows_tolerance() {
        let tol = Tolerance::new(1e-6);
        let array = RouthArray::build_with_tolerance(&[1.0, 0.0, 2.0, 3.0], tol).unwrap();
        assert_eq!(array.pivot_substitutions()[0].substitute, 1e-6);
        // r[2][0] = (eps*2 - 1*3) / eps
        assert_relative_eq!(array.get(2, 0).unwrap(), (1e-6 * 2.0 - 3.0) / 1e-6);
    }

    #[test]
    fn test_empty_coefficients() {
        let result = RouthArray::<f64>::build(&[]);
        assert_eq!(result.unwrap_err(), RouthError::EmptyCoefficients);
    }

    #[test]
    fn test_non_finite_coefficient() {
        let result = RouthArray::build(&[1.0, f64::INFINITY, 2.0]);
        assert!(matches!(
            result,
            Err(RouthError::NonFiniteCoefficient { index: 1, .. })
        ));
    }

    #[test]
    fn test_degree_zero_and_one() {
        let constant = RouthArray::build(&[4.0]).unwrap();
        assert_eq!((constant.rows(), constant.cols()), (1, 1));
        assert_eq!(constant.first_column(), vec![4.0]);

        let linear = RouthArray::build(&[2.0, -3.0]).unwrap();
        assert_eq!((linear.rows(), linear.cols()), (2, 1));
        assert_eq!(linear.first_column(), vec![2.0, -3.0]);
    }

    #[test]
    fn test_display() {
        let array = RouthArray::build(&[1.0, 3.0, 3.0, 1.0]).unwrap();
        let text = array.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("s^3"));
        assert!(text.contains("2.6667"));
    }

    #[test]
    fn test_f32_build() {
        let array = RouthArray::<f32>::build(&[1.0, 3.0, 3.0, 1.0]).unwrap();
        assert_relative_eq!(array.get(2, 0).unwrap(), 8.0 / 3.0, epsilon = 1e-6);
    }
}
