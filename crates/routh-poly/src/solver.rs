//! Numerical root finding via companion-matrix eigenvalues.
//!
//! The roots of `a_n s^n + ... + a_0` are the eigenvalues of the monic
//! companion matrix
//!
//! ```text
//! | -a_(n-1)/a_n  -a_(n-2)/a_n  ...  -a_0/a_n |
//! |      1             0        ...      0     |
//! |      0             1        ...      0     |
//! |     ...                              ...   |
//! ```
//!
//! computed with nalgebra's real Schur decomposition. Each eigenvalue is
//! then refined with a few Newton steps on the input polynomial, kept
//! only when they reduce the residual.

use crate::error::{RootError, RootResult};
use crate::polynomial::Polynomial;
use nalgebra::{Complex, DMatrix, Schur};
use num_traits::Float;
use routh_core::roots::Root;
use routh_core::types::Scalar;
use std::cmp::Ordering;

/// Iteration budget for the Schur decomposition.
pub const MAX_SCHUR_ITERATIONS: usize = 10_000;

/// Newton refinement steps applied to each eigenvalue.
pub const POLISH_STEPS: usize = 3;

/// Finds every root of `polynomial`, with multiplicity.
///
/// Roots are sorted by descending real part, then descending imaginary part.
/// A root whose value is not finite is returned as [`Root::Unresolved`].
pub fn find_roots<T: Scalar>(polynomial: &Polynomial<T>) -> RootResult<Vec<Root<T>>> {
    if polynomial
        .ascending()
        .iter()
        .any(|c| !<T as Float>::is_finite(*c))
    {
        return Err(RootError::NonFiniteCoefficient);
    }
    let degree = polynomial.degree().ok_or(RootError::ZeroPolynomial)?;

    let mut roots: Vec<Complex<T>> = match degree {
        0 => Vec::new(),
        1 => {
            let r = -polynomial.coefficient(0) / polynomial.coefficient(1);
            vec![Complex::new(r, T::zero())]
        }
        2 => quadratic_roots(
            polynomial.coefficient(2),
            polynomial.coefficient(1),
            polynomial.coefficient(0),
        ),
        _ => companion_eigenvalues(polynomial, degree)?,
    };

    if degree > 1 {
        let derivative = polynomial.derivative();
        for root in &mut roots {
            *root = polish(polynomial, &derivative, *root);
        }
    }

    roots.sort_by(|a, b| {
        b.re.partial_cmp(&a.re)
            .unwrap_or(Ordering::Equal)
            .then(b.im.partial_cmp(&a.im).unwrap_or(Ordering::Equal))
    });

    Ok(roots.into_iter().map(Root::from).collect())
}

/// Finds the roots of the polynomial with descending coefficients `coefficients`.
pub fn find_roots_of<T: Scalar>(coefficients: &[T]) -> RootResult<Vec<Root<T>>> {
    find_roots(&Polynomial::from_descending(coefficients))
}

/// Roots of `a s^2 + b s + c` without cancellation in the smaller root.
fn quadratic_roots<T: Scalar>(a: T, b: T, c: T) -> Vec<Complex<T>> {
    let two = T::one() + T::one();
    let four = two * two;
    let discriminant = b * b - four * a * c;

    if discriminant < T::zero() {
        let re = -b / (two * a);
        let im = <T as Float>::sqrt(-discriminant) / (two * a);
        return vec![Complex::new(re, im), Complex::new(re, -im)];
    }

    let sign = if b < T::zero() { -T::one() } else { T::one() };
    let q = -(b + sign * <T as Float>::sqrt(discriminant)) / two;
    if q == T::zero() {
        return vec![Complex::new(T::zero(), T::zero()); 2];
    }
    vec![
        Complex::new(q / a, T::zero()),
        Complex::new(c / q, T::zero()),
    ]
}

fn companion_matrix<T: Scalar>(polynomial: &Polynomial<T>, degree: usize) -> DMatrix<T> {
    let lead = polynomial.leading_coefficient();
    let mut companion = DMatrix::<T>::zeros(degree, degree);

    for j in 0..degree {
        companion[(0, j)] = -polynomial.coefficient(degree - 1 - j) / lead;
    }
    for i in 1..degree {
        companion[(i, i - 1)] = T::one();
    }
    companion
}

fn companion_eigenvalues<T: Scalar>(
    polynomial: &Polynomial<T>,
    degree: usize,
) -> RootResult<Vec<Complex<T>>> {
    let companion = companion_matrix(polynomial, degree);
    let schur = Schur::try_new(companion, <T as Float>::epsilon(), MAX_SCHUR_ITERATIONS).ok_or(
        RootError::NoConvergence {
            degree,
            iterations: MAX_SCHUR_ITERATIONS,
        },
    )?;
    Ok(schur.complex_eigenvalues().iter().copied().collect())
}

fn residual<T: Scalar>(polynomial: &Polynomial<T>, z: Complex<T>) -> T {
    polynomial.eval_complex(z).norm()
}

fn polish<T: Scalar>(polynomial: &Polynomial<T>, derivative: &Polynomial<T>, start: Complex<T>) -> Complex<T> {
    let mut best = start;
    let mut best_residual = residual(polynomial, start);

    for _ in 0..POLISH_STEPS {
        let slope = derivative.eval_complex(best);
        if slope.norm() == T::zero() {
            break;
        }
        let candidate = best - polynomial.eval_complex(best) / slope;
        let candidate_residual = residual(polynomial, candidate);
        if !(candidate_residual < best_residual) {
            break;
        }
        best = candidate;
        best_residual = candidate_residual;
    }
    best
}
