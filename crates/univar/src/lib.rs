//! # univar
//!
//! Dense univariate polynomial arithmetic over plain numeric coefficients.
//!
//! This crate provides:
//! - [`Polynomial`]: a normalized, immutable coefficient-vector value type
//! - Construction from dense coefficient lists or sparse exponent maps
//! - Addition, multiplication, integer powers, formal differentiation
//! - Numeric evaluation at one point or as a two-point signed difference
//! - Canonical human-readable rendering via `Display`
//!
//! ## Quick Start
//!
//! ```
//! use univar::Polynomial;
//!
//! // 2x^3 - 3x + 1
//! let p = Polynomial::new(vec![1i64, -3, 0, 2]);
//! assert_eq!(p.to_string(), "2x^3 - 3x + 1");
//! assert_eq!(p.eval(&2), 11);
//! assert_eq!(p.derivative().to_string(), "6x^2 - 3");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
mod display;
pub mod error;

#[cfg(test)]
mod proptests;

pub use dense::Polynomial;
pub use error::PolyError;
pub use univar_scalar::Scalar;
