//! Property-based tests for the scalar field instances.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use cardan_bignum::{Decimal, Integer};

    use crate::traits::QuotientField;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // The ring laws, phrased once against the operator table.
    fn check_ring_laws<F: QuotientField>(a: &F, b: &F, c: &F) {
        assert!(a.add(b).eq_by_comparing(&b.add(a)));
        assert!(a.mul(b).eq_by_comparing(&b.mul(a)));
        assert!(a.add(&F::zero()).eq_by_comparing(a));
        assert!(a.mul(&F::one()).eq_by_comparing(a));
        assert!(a.add(&a.neg()).is_zero());
        assert!(a
            .mul(&b.add(c))
            .eq_by_comparing(&a.mul(b).add(&a.mul(c))));
    }

    proptest! {
        #[test]
        fn machine_ring_laws(a in small_int(), b in small_int(), c in small_int()) {
            check_ring_laws(&a, &b, &c);
        }

        #[test]
        fn integer_ring_laws(a in small_int(), b in small_int(), c in small_int()) {
            check_ring_laws(&Integer::new(a), &Integer::new(b), &Integer::new(c));
        }

        #[test]
        fn decimal_ring_laws(a in small_int(), b in small_int(), c in small_int()) {
            check_ring_laws(
                &Decimal::from_i64(a),
                &Decimal::from_i64(b),
                &Decimal::from_i64(c),
            );
        }

        #[test]
        fn float_ring_identities(a in -1e6f64..1e6f64) {
            // floats satisfy the identity laws exactly
            assert!(a.add(&<f64 as QuotientField>::zero()).eq_by_comparing(&a));
            assert!(QuotientField::mul(&a, &<f64 as QuotientField>::one()).eq_by_comparing(&a));
        }

        #[test]
        fn pow_additive_in_exponent(a in -30i64..30, m in 0i32..5, n in 0i32..5) {
            prop_assume!(a != 0);
            let a = Integer::new(a);
            let lhs = QuotientField::pow(&a, m + n);
            let rhs = QuotientField::pow(&a, m).mul(&QuotientField::pow(&a, n));
            // 30^10 is far below 34 digits, so both sides are exact
            prop_assert!(lhs.eq_by_comparing(&rhs));
        }

        #[test]
        fn div_inverts_mul(a in small_int(), b in non_zero_int()) {
            let a = Decimal::from_i64(a);
            let b = Decimal::from_i64(b);
            let q = QuotientField::div(&a, &b);
            let diff = q.mul(&b).sub(&a).abs();
            prop_assert!(diff < Decimal::from_f64(1e-25));
        }
    }
}
