//! Property-based tests for the complex kinds.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use cardan_bignum::Decimal;

    use crate::{BigComplex, BigGaussian, Complex64, Gaussian};

    fn component() -> impl Strategy<Value = f64> {
        prop_oneof![(-100.0f64..100.0), (-1.0f64..1.0)]
    }

    fn small_int() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    proptest! {
        #[test]
        fn mul_commutative(a in component(), b in component(), c in component(), d in component()) {
            let x = Complex64::new(a, b);
            let y = Complex64::new(c, d);
            prop_assert!((x * y).eq_by_comparing(y * x));
        }

        #[test]
        fn invert_is_right_inverse(a in component(), b in component()) {
            let z = Complex64::new(a, b);
            prop_assume!(z.is_invertible() && z.abs_sqr() > 1e-9);

            let p = z * z.invert();
            prop_assert!((p.re() - 1.0).abs() < 1e-9);
            prop_assert!(p.im().abs() < 1e-9);
        }

        #[test]
        fn polar_round_trip(a in component(), b in component()) {
            let z = Complex64::new(a, b);
            prop_assume!(z.abs_sqr() > 1e-9);

            let back = z.to_polar().to_complex();
            let tol = 1e-9 * z.abs().max(1.0);
            prop_assert!((back.re() - z.re()).abs() < tol);
            prop_assert!((back.im() - z.im()).abs() < tol);
        }

        #[test]
        fn pow_additive_in_exponent(a in component(), b in component(), m in -4i32..5, n in -4i32..5) {
            let z = Complex64::new(a, b);
            prop_assume!(z.abs_sqr() > 1e-3);

            let lhs = z.pow(m) * z.pow(n);
            let rhs = z.pow(m + n);
            let tol = 1e-6 * rhs.abs().max(1.0);
            prop_assert!((lhs - rhs).abs() < tol);
        }

        #[test]
        fn arg_in_range(a in component(), b in component()) {
            let z = Complex64::new(a, b);
            prop_assume!(z.is_invertible());

            let theta = z.arg();
            prop_assert!(theta > -std::f64::consts::PI - 1e-12);
            prop_assert!(theta <= std::f64::consts::PI + 1e-12);
        }

        #[test]
        fn gaussian_mul_matches_promoted(a in small_int(), b in small_int(), c in small_int(), d in small_int()) {
            let x = Gaussian::new(a, b);
            let y = Gaussian::new(c, d);
            // closed integer product agrees with the floating product
            prop_assert!((x * y).to_complex().eq_by_comparing(x.to_complex() * y.to_complex()));
        }

        #[test]
        fn big_gaussian_invert_round_trip(a in small_int(), b in small_int()) {
            let z = BigGaussian::from_i64(a, b);
            prop_assume!(z.is_invertible());

            let p = &z.to_big_complex() * &z.invert();
            let err = (&p - &BigComplex::one()).abs();
            prop_assert!(err < Decimal::from_f64(1e-25));
        }

        #[test]
        fn big_complex_conjugate_product_is_real(a in small_int(), b in small_int()) {
            let z = BigComplex::from_f64(a as f64, b as f64);
            let p = &z * &z.conjugate();
            prop_assert!(p.im().eq_by_comparing(&Decimal::from_i64(0)));
            prop_assert!(p.re().eq_by_comparing(&z.abs_sqr()));
        }
    }
}
