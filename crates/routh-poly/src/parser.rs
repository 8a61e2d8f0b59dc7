//! Characteristic polynomial parsing and expansion.
//!
//! Accepts the notation people type for characteristic equations and
//! expands it into a dense polynomial:
//!
//! - `+ - * /` with the usual precedence, unary signs
//! - `^` or `**` for non-negative integer powers (right associative)
//! - implicit multiplication: `10s`, `2(s + 1)`, `(s + 1)(s + 2)`, `s(s + 3)`
//! - decimal and scientific literals (`0.5`, `.25`, `1e-3`)
//! - parentheses and arbitrary whitespace
//!
//! Division is only allowed by nonzero constants; the result must stay a
//! polynomial.
//!
//! ```
//! use routh_poly::parser::coefficients;
//!
//! assert_eq!(coefficients("s^5+s^4+10s^3+72s^2+152s+240").unwrap(),
//!            vec![1.0, 1.0, 10.0, 72.0, 152.0, 240.0]);
//! assert_eq!(coefficients("(s+1)^3").unwrap(), vec![1.0, 3.0, 3.0, 1.0]);
//! ```

use crate::error::{ParseError, ParseResult};
use crate::polynomial::Polynomial;
use std::fmt;

/// Default transform variable.
pub const DEFAULT_VARIABLE: &str = "s";

/// Largest degree an expansion may reach.
pub const MAX_DEGREE: usize = 256;

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Ident(name) => f.write_str(name),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Caret => f.write_str("^"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    position: usize,
}

fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let start = i;
        let kind = match b {
            b' ' | b'\t' | b'\n' | b'\r' => {
                i += 1;
                continue;
            }
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' if bytes.get(i + 1) == Some(&b'*') => {
                i += 1;
                TokenKind::Caret
            }
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'^' => TokenKind::Caret,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'0'..=b'9' | b'.' => {
                i = scan_number(bytes, i);
                let text = &input[start..i];
                let value = text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    text: text.to_string(),
                    position: start,
                })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    position: start,
                });
                continue;
            }
            b if b.is_ascii_alphabetic() || b == b'_' => {
                while i < bytes.len() && (bytes[i].is_ascii_alphabetic() || bytes[i] == b'_') {
                    i += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(input[start..i].to_string()),
                    position: start,
                });
                continue;
            }
            _ => {
                let ch = input[start..].chars().next().unwrap_or('?');
                return Err(ParseError::UnexpectedChar { ch, position: start });
            }
        };
        i += 1;
        tokens.push(Token {
            kind,
            position: start,
        });
    }

    Ok(tokens)
}

/// Returns the end offset of the number literal starting at `i`.
fn scan_number(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }
    // Exponent only when digits follow, so `2e` stays `2 * e`.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}

struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    variable: &'a str,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek_position(&self) -> usize {
        self.peek().map_or(usize::MAX, |t| t.position)
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> ParseResult<Polynomial<f64>> {
        let mut acc = self.term()?;
        loop {
            match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => {
                    self.next();
                    acc = acc + self.term()?;
                }
                Some(TokenKind::Minus) => {
                    self.next();
                    acc = acc - self.term()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    // term := unary (('*' | '/') unary | power)*
    //
    // Implicit multiplication needs the variable or '(' on the right; a
    // number there (`2 3`, `s2`, `(s+1)2`) is left for the caller to reject.
    fn term(&mut self) -> ParseResult<Polynomial<f64>> {
        let mut acc = self.unary()?;
        loop {
            match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Star) => {
                    self.next();
                    let rhs = self.unary()?;
                    acc = &acc * &rhs;
                }
                Some(TokenKind::Slash) => {
                    self.next();
                    let position = self.peek_position();
                    let divisor = self.unary()?;
                    acc = divide(&acc, &divisor, position)?;
                }
                Some(TokenKind::Ident(_) | TokenKind::LParen) => {
                    let rhs = self.power()?;
                    acc = &acc * &rhs;
                }
                _ => return Ok(acc),
            }
        }
    }

    // unary := ('+' | '-') unary | power
    fn unary(&mut self) -> ParseResult<Polynomial<f64>> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Plus) => {
                self.next();
                self.unary()
            }
            Some(TokenKind::Minus) => {
                self.next();
                Ok(-self.unary()?)
            }
            _ => self.power(),
        }
    }

    // power := atom ('^' unary)?
    fn power(&mut self) -> ParseResult<Polynomial<f64>> {
        let base = self.atom()?;
        if !matches!(self.peek().map(|t| &t.kind), Some(TokenKind::Caret)) {
            return Ok(base);
        }
        self.next();

        let position = self.peek_position();
        let exponent = constant_exponent(&self.unary()?, position)?;
        let base_degree = base.degree().unwrap_or(0);
        if base_degree.saturating_mul(exponent as usize) > MAX_DEGREE {
            return Err(ParseError::invalid_exponent(
                format!("expansion would exceed degree {MAX_DEGREE}"),
                position,
            ));
        }
        Ok(base.pow(exponent))
    }

    // atom := number | variable | '(' expr ')'
    fn atom(&mut self) -> ParseResult<Polynomial<f64>> {
        let token = self.next().ok_or(ParseError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(v) => Ok(Polynomial::constant(v)),
            TokenKind::Ident(name) if name == self.variable => Ok(Polynomial::variable()),
            TokenKind::Ident(name) => Err(ParseError::UnknownIdentifier {
                name,
                expected: self.variable.to_string(),
                position: token.position,
            }),
            TokenKind::LParen => {
                let inner = self.expr()?;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(ParseError::unexpected(other.kind.to_string(), other.position)),
                    None => Err(ParseError::UnclosedParenthesis {
                        position: token.position,
                    }),
                }
            }
            other => Err(ParseError::unexpected(other.to_string(), token.position)),
        }
    }
}

fn divide(
    numerator: &Polynomial<f64>,
    divisor: &Polynomial<f64>,
    position: usize,
) -> ParseResult<Polynomial<f64>> {
    if !divisor.is_constant() {
        return Err(ParseError::NonConstantDivisor { position });
    }
    let d = divisor.coefficient(0);
    if d == 0.0 {
        return Err(ParseError::DivisionByZero { position });
    }
    Ok(numerator.scale(1.0 / d))
}

fn constant_exponent(exponent: &Polynomial<f64>, position: usize) -> ParseResult<u32> {
    if !exponent.is_constant() {
        return Err(ParseError::invalid_exponent(
            "exponent must not depend on the variable",
            position,
        ));
    }
    let value = exponent.coefficient(0);
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(ParseError::invalid_exponent(
            format!("{value} is not a non-negative integer"),
            position,
        ));
    }
    if value > MAX_DEGREE as f64 {
        return Err(ParseError::invalid_exponent(
            format!("{value} exceeds the maximum degree {MAX_DEGREE}"),
            position,
        ));
    }
    Ok(value as u32)
}

/// Parses and expands a polynomial in the variable `s`.
pub fn parse_polynomial(expr: &str) -> ParseResult<Polynomial<f64>> {
    parse_polynomial_in(expr, DEFAULT_VARIABLE)
}

/// Parses and expands a polynomial in the given variable.
pub fn parse_polynomial_in(expr: &str, variable: &str) -> ParseResult<Polynomial<f64>> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        variable,
    };
    let polynomial = parser.expr()?;
    if let Some(token) = parser.next() {
        return Err(ParseError::unexpected(token.kind.to_string(), token.position));
    }
    if polynomial.is_zero() {
        return Err(ParseError::ZeroPolynomial);
    }
    Ok(polynomial)
}

/// Descending-degree coefficient sequence of `expr` in the variable `s`.
///
/// The leading coefficient is nonzero and every power down to `s^0` is
/// present, so the length is `degree + 1`.
pub fn coefficients(expr: &str) -> ParseResult<Vec<f64>> {
    parse_polynomial(expr).map(|p| p.coefficients())
}
