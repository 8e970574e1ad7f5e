//! Canonical string rendering for polynomials.
//!
//! Terms run from highest degree to lowest, zero terms are skipped, unit
//! coefficients are elided on non-constant terms, and negative terms read
//! as subtraction: `3x^2 - 4x + 1`, never `3x^2 + -4x + 1`.

use std::fmt;

use univar_scalar::Scalar;

use crate::dense::Polynomial;

impl<C: Scalar> fmt::Display for Polynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (exp, c) in self.coeffs().iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let negative = c.is_negative();
            if first {
                if negative {
                    write!(f, "-")?;
                }
                first = false;
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let magnitude = if negative { -c.clone() } else { c.clone() };
            if exp == 0 {
                write!(f, "{magnitude}")?;
            } else {
                if !magnitude.is_one() {
                    write!(f, "{magnitude}")?;
                }
                write!(f, "x")?;
                if exp >= 2 {
                    write!(f, "^{exp}")?;
                }
            }
        }

        Ok(())
    }
}
