//! Property-based tests for the arbitrary precision types.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Decimal, Integer};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_mul_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn gcd_exact_div_round_trip(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            // dividing out the gcd leaves coprime parts
            let ra = a.exact_div(&g);
            let rb = b.exact_div(&g);
            prop_assert_eq!(ra.gcd(&rb).to_i64(), Some(1));
        }

        #[test]
        fn power_of_two_detects_shifts(k in 0u32..50) {
            let p = Integer::new(2).pow(k);
            prop_assert!(p.is_power_of_two());
        }

        #[test]
        fn decimal_add_commutative(a in small_int(), b in small_int()) {
            let a = Decimal::from_i64(a);
            let b = Decimal::from_i64(b);
            prop_assert!((a.clone() + b.clone()).eq_by_comparing(&(b + a)));
        }

        #[test]
        fn decimal_div_mul_round_trip(a in small_int(), b in non_zero_int()) {
            let a = Decimal::from_i64(a);
            let b = Decimal::from_i64(b);
            let q = a.clone() / b.clone();
            let back = q * b;

            let diff = (back - a).abs();
            prop_assert!(diff < Decimal::from_f64(1e-25));
        }

        #[test]
        fn decimal_sqrt_squares_back(a in 0i64..10_000) {
            let a = Decimal::from_i64(a);
            let r = a.sqrt();
            let diff = (r.clone() * r - a).abs();
            prop_assert!(diff < Decimal::from_f64(1e-25));
        }
    }
}
