//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;
    use univar_scalar::Scalar;

    // Strategy for generating small polynomials (degree 0-4) over i64,
    // which keeps every property exact
    fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::vec(-100i64..100, 1..=5).prop_map(Polynomial::new)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial<i64>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = Polynomial::one();
            prop_assert_eq!(a.mul(&one), a.clone());
            prop_assert_eq!(one.mul(&a), a);
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        // Normalization invariant

        #[test]
        fn poly_normalized_after_ops(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert!(sum.coeffs().len() == 1 || !sum.leading_coeff().is_zero());
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) over the integers
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            prop_assert!(a.add(&b).degree() <= a.degree().max(b.degree()));
        }

        #[test]
        fn poly_derivative_drops_degree(a in small_poly()) {
            let d = a.derivative();
            if a.degree() > 0 && !d.is_zero() {
                prop_assert!(d.degree() <= a.degree() - 1);
            }
        }

        // Power

        #[test]
        fn poly_pow_matches_repeated_mul(a in small_poly(), n in 0u32..5) {
            let mut expected = Polynomial::one();
            for _ in 0..n {
                expected = expected.mul(&a);
            }
            prop_assert_eq!(a.pow(n), expected);
        }

        #[test]
        fn poly_pow_one_is_identity(a in small_poly()) {
            prop_assert_eq!(a.pow(1), a);
        }

        // Calculus

        #[test]
        fn poly_derivative_linear(a in small_poly(), b in small_poly()) {
            // (a + b)' = a' + b'
            prop_assert_eq!(a.add(&b).derivative(), a.derivative().add(&b.derivative()));
        }

        #[test]
        fn poly_derivative_product_rule(a in small_poly(), b in small_poly()) {
            // (a * b)' = a' * b + a * b'
            let left = a.mul(&b).derivative();
            let right = a.derivative().mul(&b).add(&a.mul(&b.derivative()));
            prop_assert_eq!(left, right);
        }

        // Evaluation

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in -10i64..10) {
            // (a + b)(x) = a(x) + b(x)
            prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -10i64..10) {
            // (a * b)(x) = a(x) * b(x)
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn poly_eval_between_antisymmetric(a in small_poly(), x1 in -10i64..10, x2 in -10i64..10) {
            prop_assert_eq!(a.eval_between(&x1, &x2), -a.eval_between(&x2, &x1));
        }

        #[test]
        fn poly_eval_between_matches_difference(a in small_poly(), x1 in -10i64..10, x2 in -10i64..10) {
            prop_assert_eq!(a.eval_between(&x1, &x2), a.eval(&x2) - a.eval(&x1));
        }

        // Rendering

        #[test]
        fn poly_format_idempotent(a in small_poly()) {
            prop_assert_eq!(a.to_string(), a.to_string());
        }

        #[test]
        fn poly_format_never_shows_plus_minus(a in small_poly()) {
            let s = a.to_string();
            prop_assert!(!s.contains("+ -"));
            // A unit coefficient must be elided, so no term starts with "1x"
            prop_assert!(!s.starts_with("1x") && !s.starts_with("-1x") && !s.contains(" 1x"));
        }
    }
}
