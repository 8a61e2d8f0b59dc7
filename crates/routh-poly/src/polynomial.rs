//! Dense real polynomials in a single transform variable.
//!
//! Coefficients are stored in ascending order of degree internally; the
//! public [`Polynomial::coefficients`] view is descending, which is the order
//! the Routh array expects.

use nalgebra::Complex;
use num_traits::Float;
use routh_core::types::Scalar;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Real polynomial `c_0 + c_1 s + ... + c_n s^n`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial<T: Scalar> {
    /// `ascending[k]` is the coefficient of `s^k`; no trailing zeros.
    ascending: Vec<T>,
}

impl<T: Scalar> Polynomial<T> {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            ascending: Vec::new(),
        }
    }

    /// A constant polynomial.
    pub fn constant(c: T) -> Self {
        Self::from_ascending(vec![c])
    }

    /// The transform variable `s`.
    pub fn variable() -> Self {
        Self::monomial(T::one(), 1)
    }

    /// `c * s^power`.
    pub fn monomial(c: T, power: usize) -> Self {
        let mut ascending = vec![T::zero(); power + 1];
        ascending[power] = c;
        Self::from_ascending(ascending)
    }

    /// Builds from coefficients in ascending order of degree.
    pub fn from_ascending(mut ascending: Vec<T>) -> Self {
        while ascending.last().is_some_and(|c| *c == T::zero()) {
            ascending.pop();
        }
        Self { ascending }
    }

    /// Builds from coefficients in descending order of degree.
    ///
    /// Leading zeros are dropped.
    pub fn from_descending(descending: &[T]) -> Self {
        Self::from_ascending(descending.iter().rev().copied().collect())
    }

    /// Whether every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.ascending.is_empty()
    }

    /// Degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.ascending.len().checked_sub(1)
    }

    /// Whether the polynomial has degree 0 (or is zero).
    pub fn is_constant(&self) -> bool {
        self.ascending.len() <= 1
    }

    /// Coefficient of `s^power` (zero beyond the degree).
    pub fn coefficient(&self, power: usize) -> T {
        self.ascending.get(power).copied().unwrap_or_else(T::zero)
    }

    /// Leading coefficient, or zero for the zero polynomial.
    pub fn leading_coefficient(&self) -> T {
        self.ascending.last().copied().unwrap_or_else(T::zero)
    }

    /// Coefficients from the highest degree down to the constant term.
    ///
    /// The zero polynomial yields `[0]`.
    pub fn coefficients(&self) -> Vec<T> {
        if self.is_zero() {
            return vec![T::zero()];
        }
        self.ascending.iter().rev().copied().collect()
    }

    /// Coefficients in ascending order of degree.
    pub fn ascending(&self) -> &[T] {
        &self.ascending
    }

    /// Multiplies every coefficient by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        Self::from_ascending(self.ascending.iter().map(|&c| c * factor).collect())
    }

    /// Raises the polynomial to a non-negative integer power.
    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::constant(T::one());
        let mut base = self.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Formal derivative.
    pub fn derivative(&self) -> Self {
        Self::from_ascending(
            self.ascending
                .iter()
                .enumerate()
                .skip(1)
                .map(|(k, &c)| c * <T as Scalar>::from_f64(k as f64))
                .collect(),
        )
    }

    /// Evaluates at a real point (Horner).
    pub fn eval(&self, s: T) -> T {
        self.ascending
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * s + c)
    }

    /// Evaluates at a complex point (Horner).
    pub fn eval_complex(&self, s: Complex<T>) -> Complex<T> {
        self.ascending
            .iter()
            .rev()
            .fold(Complex::new(T::zero(), T::zero()), |acc, &c| {
                acc * s + Complex::new(c, T::zero())
            })
    }

    /// Renders the polynomial with `var` as the variable name, highest degree first.
    pub fn to_string_in(&self, var: &str) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut out = String::new();
        for (power, &c) in self.ascending.iter().enumerate().rev() {
            if c == T::zero() {
                continue;
            }
            let negative = c < T::zero();
            let magnitude = <T as Float>::abs(c);

            if out.is_empty() {
                if negative {
                    out.push('-');
                }
            } else {
                out.push_str(if negative { " - " } else { " + " });
            }

            if magnitude != T::one() || power == 0 {
                out.push_str(&magnitude.to_string());
            }
            match power {
                0 => {}
                1 => out.push_str(var),
                _ => {
                    out.push_str(var);
                    out.push('^');
                    out.push_str(&power.to_string());
                }
            }
        }
        out
    }
}

impl<T: Scalar> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_in("s"))
    }
}

impl<T: Scalar> Add for Polynomial<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let len = self.ascending.len().max(rhs.ascending.len());
        Self::from_ascending(
            (0..len)
                .map(|k| self.coefficient(k) + rhs.coefficient(k))
                .collect(),
        )
    }
}

impl<T: Scalar> Sub for Polynomial<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<T: Scalar> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-T::one())
    }
}

impl<T: Scalar> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Self) -> Polynomial<T> {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut product = vec![T::zero(); self.ascending.len() + rhs.ascending.len() - 1];
        for (i, &a) in self.ascending.iter().enumerate() {
            for (j, &b) in rhs.ascending.iter().enumerate() {
                product[i + j] += a * b;
            }
        }
        Polynomial::from_ascending(product)
    }
}

impl<T: Scalar> Mul for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn s() -> Polynomial<f64> {
        Polynomial::variable()
    }

    fn c(v: f64) -> Polynomial<f64> {
        Polynomial::constant(v)
    }

    #[test]
    fn test_descending_round_trip_drops_leading_zeros() {
        let p = Polynomial::from_descending(&[0.0, 0.0, 1.0, 2.0, 0.0]);
        assert_eq!(p.degree(), Some(2));
        assert_eq!(p.coefficients(), vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_zero_polynomial() {
        let p = Polynomial::<f64>::from_descending(&[0.0, 0.0]);
        assert!(p.is_zero());
        assert_eq!(p.degree(), None);
        assert_eq!(p.coefficients(), vec![0.0]);
        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn test_binomial_power() {
        let p = (s() + c(1.0)).pow(3);
        assert_eq!(p.coefficients(), vec![1.0, 3.0, 3.0, 1.0]);
        assert_eq!((s() + c(2.0)).pow(0).coefficients(), vec![1.0]);
    }

    #[test]
    fn test_arithmetic() {
        let p = (s() + c(1.0)) * (s() - c(1.0));
        assert_eq!(p.coefficients(), vec![1.0, 0.0, -1.0]);

        let q = p.clone() - p;
        assert!(q.is_zero());
    }

    #[test]
    fn test_derivative_and_eval() {
        let p = Polynomial::from_descending(&[1.0, 3.0, 3.0, 1.0]);
        assert_eq!(p.derivative().coefficients(), vec![3.0, 6.0, 3.0]);
        assert_relative_eq!(p.eval(-1.0), 0.0);
        assert_relative_eq!(p.eval(1.0), 8.0);

        let z = p.eval_complex(Complex::new(0.0, 1.0));
        // (i + 1)^3 = -2 + 2i
        assert_relative_eq!(z.re, -2.0, epsilon = 1e-12);
        assert_relative_eq!(z.im, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let p = Polynomial::from_descending(&[1.0, 1.0, 10.0, 72.0, 152.0, 240.0]);
        assert_eq!(p.to_string(), "s^5 + s^4 + 10s^3 + 72s^2 + 152s + 240");

        let q = Polynomial::from_descending(&[-1.0, 0.0, -2.5, 1.0]);
        assert_eq!(q.to_string_in("x"), "-x^3 - 2.5x + 1");
    }
}
