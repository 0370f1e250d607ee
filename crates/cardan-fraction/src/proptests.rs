//! Property-based tests for the fraction kinds.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use cardan_bignum::Integer;

    use crate::fraction::{BigFraction, Fraction64};

    fn num() -> impl Strategy<Value = i64> {
        -200i64..200i64
    }

    fn den() -> impl Strategy<Value = i64> {
        prop_oneof![(-200i64..=-1i64), (1i64..=200i64)]
    }

    proptest! {
        #[test]
        fn add_commutative_up_to_equivalence(a in num(), b in den(), c in num(), d in den()) {
            let x = Fraction64::new(a, b);
            let y = Fraction64::new(c, d);
            prop_assert!((&x + &y).equivalent(&(&y + &x)));
        }

        #[test]
        fn canonical_form_is_idempotent(a in num(), b in den()) {
            let f = Fraction64::new(a, b);
            let canon = f.normalize().reduce();
            prop_assert_eq!(canon.clone(), canon.normalize().reduce());
        }

        #[test]
        fn canonical_form_preserves_value(a in num(), b in den()) {
            let f = Fraction64::new(a, b);
            prop_assert!(f.equivalent(&f.normalize().reduce()));
        }

        #[test]
        fn expand_preserves_equivalence(a in num(), b in den(), k in 1i64..50) {
            let f = Fraction64::new(a, b);
            prop_assert!(f.equivalent(&f.expand(&k)));
        }

        #[test]
        fn invert_is_multiplicative_inverse(a in num(), b in den()) {
            let f = Fraction64::new(a, b);
            prop_assume!(f.is_invertible());
            prop_assert!((&f * &f.invert()).equivalent(&Fraction64::one()));
        }

        #[test]
        fn pow_additive_in_exponent(a in -12i64..12, b in 1i64..12, m in -3i32..4, n in -3i32..4) {
            prop_assume!(a != 0);
            let f = Fraction64::new(a, b);
            let lhs = &f.pow(m) * &f.pow(n);
            prop_assert!(lhs.equivalent(&f.pow(m + n)));
        }

        #[test]
        fn ordering_matches_decimal(a in num(), b in den(), c in num(), d in den()) {
            let x = Fraction64::new(a, b);
            let y = Fraction64::new(c, d);
            prop_assert_eq!(x.le(&y), x.to_f64() <= y.to_f64() + 1e-12);
        }

        #[test]
        fn signum_matches_value(a in num(), b in den()) {
            let f = Fraction64::new(a, b);
            let v = f.to_f64();
            if f.signum() > 0 {
                prop_assert!(v > 0.0);
            } else if f.signum() < 0 {
                prop_assert!(v < 0.0);
            } else {
                prop_assert!(v == 0.0);
            }
        }

        #[test]
        fn reduce_leaves_irreducible(a in num(), b in den()) {
            let f = Fraction64::new(a, b);
            prop_assume!(f.is_invertible());
            prop_assert!(f.reduce().is_irreducible());
        }

        #[test]
        fn big_fraction_agrees_with_machine(a in num(), b in den(), c in num(), d in den()) {
            let x = Fraction64::new(a, b);
            let y = Fraction64::new(c, d);
            let sum = &x + &y;

            let bx = x.to_big_fraction();
            let by = y.to_big_fraction();
            let big_sum = &bx + &by;

            prop_assert_eq!(big_sum, sum.to_big_fraction());
        }

        #[test]
        fn big_fraction_dyadic(a in num(), k in 0u32..16) {
            prop_assume!(a != 0);
            let f = BigFraction::new(Integer::new(a), Integer::new(2).pow(k));
            prop_assert!(f.is_dyadic());
        }
    }
}
