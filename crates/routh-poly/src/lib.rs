//! Polynomial front end for Routh-Hurwitz analysis.
//!
//! This crate supplies the two collaborators the stability core depends on:
//!
//! - [`parser`]: turns a characteristic equation typed as text
//!   (`"s^5+s^4+10s^3+72s^2+152s+240"`, `"(s+1)^3"`, `"2s(s+4)+10"`) into an
//!   expanded [`Polynomial`] and its descending coefficient sequence
//! - [`solver`]: finds the polynomial's roots numerically so they can be
//!   classified independently of the Routh array
//!
//! # Example
//!
//! ```
//! use routh_poly::{parse_polynomial, find_roots};
//!
//! let p = parse_polynomial("s^2 + 3s + 2").unwrap();
//! assert_eq!(p.coefficients(), vec![1.0, 3.0, 2.0]);
//! assert_eq!(find_roots(&p).unwrap().len(), 2);
//! ```

pub mod error;
pub mod parser;
pub mod polynomial;
pub mod solver;

pub use error::{ParseError, ParseResult, RootError, RootResult};
pub use parser::{coefficients, parse_polynomial, parse_polynomial_in};
pub use polynomial::Polynomial;
pub use solver::{find_roots, find_roots_of};
