//! The coefficient trait.
//!
//! This module defines the single trait polynomial coefficients must
//! implement. It is deliberately smaller than a full ring hierarchy:
//! polynomials over a plain numeric type only need the additive and
//! multiplicative structure plus two hooks, one for differentiation
//! (multiplication by a small integer) and one for rendering (sign).

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// A numeric coefficient type.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - `neg` is the additive inverse
///
/// Floating-point types satisfy these laws only approximately; that is the
/// host numeric type's limit, not a contract violation.
pub trait Scalar:
    Clone + PartialEq + Debug + Display + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Returns true if this value is strictly below zero.
    ///
    /// Drives subtraction-style rendering of negative terms. A negative
    /// zero is not negative in this sense.
    fn is_negative(&self) -> bool;

    /// Computes `self * n` for a small machine integer.
    ///
    /// Used by differentiation, where each coefficient is scaled by its
    /// exponent.
    fn mul_by_scalar(&self, n: i64) -> Self;
}
