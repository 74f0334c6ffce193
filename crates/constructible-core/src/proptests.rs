//! Property-based tests for field arithmetic, ordering and hashing.

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use proptest::prelude::*;

    use crate::{Constructible, FieldTower, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -50i64..50i64
    }

    fn q_sqrt2() -> FieldTower {
        FieldTower::extend(Constructible::from(2)).unwrap()
    }

    fn in_q_sqrt2(a: i64, b: i64) -> Constructible {
        Constructible::from_parts(Constructible::from(a), Constructible::from(b), q_sqrt2())
    }

    fn sqrt(n: i64) -> Constructible {
        Constructible::from(n).sqrt().unwrap()
    }

    fn hash_of(x: &Constructible) -> u64 {
        let mut hasher = DefaultHasher::new();
        x.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        #[test]
        fn addition_commutative(a in small_int(), b in small_int(), c in small_int(), d in small_int()) {
            let x = in_q_sqrt2(a, b);
            let y = in_q_sqrt2(c, d);
            prop_assert_eq!(&x + &y, &y + &x);
        }

        #[test]
        fn multiplication_commutative(a in small_int(), b in small_int(), c in small_int(), d in small_int()) {
            let x = in_q_sqrt2(a, b);
            let y = in_q_sqrt2(c, d);
            prop_assert_eq!(&x * &y, &y * &x);
        }

        #[test]
        fn distributive(
            a in small_int(), b in small_int(),
            c in small_int(), d in small_int(),
            e in small_int(), f in small_int(),
        ) {
            let x = in_q_sqrt2(a, b);
            let y = in_q_sqrt2(c, d);
            let z = in_q_sqrt2(e, f);
            prop_assert_eq!(&x * (&y + &z), &x * &y + &x * &z);
        }

        #[test]
        fn inverse_is_exact(a in small_int(), b in small_int()) {
            let x = in_q_sqrt2(a, b);
            prop_assume!(!x.is_zero());
            prop_assert_eq!(&x * x.inverse().unwrap(), 1);
        }

        #[test]
        fn sign_agrees_with_float(a in small_int(), b in small_int()) {
            let x = in_q_sqrt2(a, b);
            let approx = x.to_f64();
            let expected = if approx > 0.0 { 1 } else if approx < 0.0 { -1 } else { 0 };
            prop_assert_eq!(x.signum(), expected);
        }

        #[test]
        fn ordering_agrees_with_subtraction(a in small_int(), b in small_int(), c in small_int(), d in small_int()) {
            let x = in_q_sqrt2(a, b);
            let y = in_q_sqrt2(c, d);
            prop_assert_eq!(x < y, (&y - &x).signum() > 0);
            prop_assert_eq!(x == y, (a, b) == (c, d));
        }

        #[test]
        fn sqrt_of_square_is_abs(a in small_int(), b in small_int()) {
            let x = in_q_sqrt2(a, b);
            let root = (&x * &x).sqrt().unwrap();
            prop_assert_eq!(root.field(), x.field());
            prop_assert_eq!(root, x.abs());
        }

        #[test]
        fn hash_independent_of_tower(a in small_int(), b in small_int(), c in small_int(), d in small_int()) {
            // (a + b√2)(c + d√3) built two ways, in different towers.
            let product = (a + sqrt(2) * b) * (c + sqrt(3) * d);
            let expanded = Constructible::from(a * c)
                + sqrt(3) * (a * d)
                + sqrt(2) * (b * c)
                + sqrt(6) * (b * d);
            prop_assert_eq!(&product, &expanded);
            prop_assert_eq!(hash_of(&product), hash_of(&expanded));
        }

        #[test]
        fn rational_hash_independent_of_tower(n in small_int(), d in 1i64..50i64) {
            let q = Rational::from_i64(n, d);
            let lifted = Constructible::lift_rational(&q, &sqrt(5).field());
            prop_assert_eq!(hash_of(&lifted), hash_of(&Constructible::from(q)));
        }
    }
}
