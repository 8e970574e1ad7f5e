//! `Scalar` implementations for primitive numeric types.

use num_traits::{One, Zero};

use crate::traits::Scalar;

impl Scalar for i64 {
    fn zero() -> Self {
        <i64 as Zero>::zero()
    }

    fn one() -> Self {
        <i64 as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    fn is_negative(&self) -> bool {
        *self < 0
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self * n
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        <f64 as Zero>::zero()
    }

    fn one() -> Self {
        <f64 as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }

    // Strict comparison so -0.0 (which is zero) never reads as a sign.
    fn is_negative(&self) -> bool {
        *self < 0.0
    }

    #[allow(clippy::cast_precision_loss)]
    fn mul_by_scalar(&self, n: i64) -> Self {
        self * n as f64
    }
}
