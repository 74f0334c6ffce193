//! Property-based tests for exact arithmetic and square-free splitting.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{fsqrt, isqrt, Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    /// True if no square of an integer > 1 divides `n`.
    fn is_square_free(n: u64) -> bool {
        let mut k = 2u64;
        while k * k <= n {
            if n % (k * k) == 0 {
                return false;
            }
            k += 1;
        }
        true
    }

    proptest! {
        #[test]
        fn isqrt_reconstructs(n in 0u64..2_000_000u64) {
            let (a, b) = isqrt(&Integer::from(n)).unwrap();
            let a = a.to_u64().unwrap();
            let b = b.to_u64().unwrap();
            prop_assert_eq!(a * a * b, n);
            prop_assert!(is_square_free(b));
        }

        #[test]
        fn isqrt_of_square_times_square_free(a in 1u64..5000u64, b in 1u64..500u64) {
            prop_assume!(is_square_free(b));
            let n = Integer::from(a * a * b);
            let (root, rest) = isqrt(&n).unwrap();
            prop_assert_eq!(root.to_u64(), Some(a));
            prop_assert_eq!(rest.to_u64(), Some(b));
        }

        #[test]
        fn isqrt_rejects_negative(n in -100_000i64..=-1i64) {
            prop_assert!(isqrt(&Integer::new(n)).is_err());
        }

        #[test]
        fn fsqrt_reconstructs(num in 0i64..10_000i64, den in 1i64..10_000i64) {
            let q = Rational::from_i64(num, den);
            let (a, b) = fsqrt(&q).unwrap();
            prop_assert_eq!(&a * &a * Rational::from_integer(b.clone()), q);
            prop_assert!(is_square_free(b.to_u64().unwrap()));
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_sign_matches_numerator(num in small_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert_eq!(a.signum(), (num.signum() * den.signum()) as i8);
            prop_assert_eq!(a.is_zero(), num == 0);
        }
    }
}
