//! Dense univariate polynomials.
//!
//! Coefficients are stored lowest degree first, and every constructor
//! normalizes by stripping trailing zeros, so equality is plain
//! element-wise comparison. All producing operations return a new
//! polynomial; operands are never mutated.

use univar_scalar::Scalar;

use crate::error::PolyError;

/// A dense univariate polynomial.
///
/// `coeffs[i]` is the coefficient of `x^i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<C: Scalar> {
    /// Coefficients in ascending degree order.
    /// Invariant: no trailing zeros, except the zero polynomial `[0]`.
    coeffs: Vec<C>,
}

impl<C: Scalar> Polynomial<C> {
    /// Creates a new polynomial from coefficients, normalizing as it goes.
    ///
    /// Trailing zero coefficients are removed; an empty vector becomes the
    /// zero polynomial.
    #[must_use]
    pub fn new(mut coeffs: Vec<C>) -> Self {
        // Normalize: remove trailing zeros
        while coeffs.len() > 1 && coeffs.last().map_or(false, Scalar::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(C::zero());
        }

        Self { coeffs }
    }

    /// Creates a polynomial from a dense coefficient list.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::EmptyCoefficients`] if `coeffs` is empty.
    pub fn from_coefficients(coeffs: Vec<C>) -> Result<Self, PolyError> {
        if coeffs.is_empty() {
            return Err(PolyError::EmptyCoefficients);
        }
        Ok(Self::new(coeffs))
    }

    /// Creates a polynomial from sparse `(exponent, coefficient)` terms.
    ///
    /// Exponents absent from `terms` get a zero coefficient; if an exponent
    /// appears more than once, the last entry wins. The terms may arrive in
    /// any order.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::EmptyTerms`] if `terms` yields nothing.
    pub fn from_terms<I>(terms: I) -> Result<Self, PolyError>
    where
        I: IntoIterator<Item = (usize, C)>,
    {
        let terms: Vec<(usize, C)> = terms.into_iter().collect();
        let Some(max_exp) = terms.iter().map(|&(exp, _)| exp).max() else {
            return Err(PolyError::EmptyTerms);
        };

        let mut coeffs = vec![C::zero(); max_exp + 1];
        for (exp, c) in terms {
            coeffs[exp] = c;
        }

        Ok(Self::new(coeffs))
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![C::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![C::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: C) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![C::zero(), C::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: C, n: usize) -> Self {
        let mut coeffs = vec![C::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial has degree 0 by convention.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the coefficient of x^i (zero beyond the degree).
    #[must_use]
    pub fn coeff(&self, i: usize) -> C {
        self.coeffs.get(i).cloned().unwrap_or_else(C::zero)
    }

    /// Returns all coefficients, lowest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[C] {
        &self.coeffs
    }

    /// Returns the highest-degree coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &C {
        // Invariant: coeffs is never empty
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Adds two polynomials.
    ///
    /// The shorter operand is padded with zeros up to the longer length
    /// while summing; neither operand's storage is touched.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            let a = self.coeffs.get(i).cloned().unwrap_or_else(C::zero);
            let b = other.coeffs.get(i).cloned().unwrap_or_else(C::zero);
            result.push(a + b);
        }

        Self::new(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials by schoolbook convolution.
    ///
    /// The product of sequences of lengths p and q has length p + q - 1,
    /// with entry k equal to the sum of `a[i] * b[j]` over `i + j = k`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![C::zero(); n + m - 1];

        for i in 0..n {
            for j in 0..m {
                result[i + j] =
                    result[i + j].clone() + self.coeffs[i].clone() * other.coeffs[j].clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &C) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// `pow(0)` is the constant polynomial 1; negative exponents are ruled
    /// out by the parameter type.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }

        result
    }

    /// Computes the formal derivative.
    ///
    /// A constant differentiates to the zero polynomial; otherwise the
    /// coefficient of x^k in the result is `(k + 1) * coeffs[k + 1]`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        for (i, c) in self.coeffs.iter().skip(1).enumerate() {
            result.push(c.mul_by_scalar(i as i64 + 1));
        }

        Self::new(result)
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &C) -> C {
        let mut result = C::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Evaluates the signed difference `f(x2) - f(x1)`.
    ///
    /// The two-point form familiar from definite integrals, applied to the
    /// polynomial itself; no integration is performed.
    #[must_use]
    pub fn eval_between(&self, x1: &C, x2: &C) -> C {
        self.eval(x2) - self.eval(x1)
    }
}

impl<C: Scalar> std::ops::Add for Polynomial<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl<C: Scalar> std::ops::Sub for Polynomial<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl<C: Scalar> std::ops::Mul for Polynomial<C> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(&self, &rhs)
    }
}

impl<C: Scalar> std::ops::Neg for Polynomial<C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}
