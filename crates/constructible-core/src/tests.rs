//! Regression tests across the whole algebra.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use num_traits::Zero;

use crate::{Constructible, DomainError, FieldTower, Rational};

fn sqrt(x: impl Into<Constructible>) -> Constructible {
    x.into().sqrt().unwrap()
}

fn hash_of<T: Hash>(x: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_product_of_roots_collapses() {
    let r = sqrt(2) * sqrt(3);
    assert!(r > 0);
    assert_eq!(r, sqrt(6));

    let r = sqrt(6) / sqrt(3);
    assert!(r > 0);
    assert_eq!(r, sqrt(2));
}

#[test]
fn test_sqrt_of_square() {
    let r = sqrt(2) + sqrt(3) + sqrt(5);
    assert_eq!(sqrt(&r * &r), r);
}

#[test]
fn test_polynomial_identities() {
    let r = sqrt(2) + sqrt(3);
    assert!(r > 0);
    assert_eq!(r.pow(4) - 10 * r.pow(2) + 1, 0);

    let r = sqrt(2) + sqrt(3) + sqrt(5);
    let r2 = &r * &r;
    let r4 = &r2 * &r2;
    let r6 = &r2 * &r4;
    let r8 = &r2 * &r6;
    assert!(r > 0);
    assert_eq!(r8 - 40 * r6 + 352 * r4 - 960 * r2 + 576, 0);
}

#[test]
fn test_heptadecagon() {
    let r = sqrt(17);
    let u = sqrt(2 * (17 - &r));
    let v = sqrt(2 * (17 + &r));
    let cos = (-1 + &r + &u + 2 * sqrt(17 + 3 * &r - &u - 2 * &v)) / 16;
    let sin = sqrt(1 - &cos * &cos);

    let mut s_i = Constructible::zero();
    let mut c_i = Constructible::one();
    for i in 0..17 {
        let s = &sin * &c_i + &cos * &s_i;
        let c = &cos * &c_i - &sin * &s_i;
        assert_eq!(&s * &s + &c * &c, 1, "radius not equal to 1 at i={i}");
        s_i = s;
        c_i = c;
    }

    assert_eq!(s_i, 0);
    assert_eq!(c_i, 1);
}

#[test]
fn test_hash_of_rationals() {
    for q in [
        Rational::from(0),
        Rational::from(1),
        Rational::from(-1),
        Rational::from_i64(1, 4),
        Rational::from_i64(1, 2),
    ] {
        let x = Constructible::from(q.clone());
        assert_eq!(x, q);
        assert_eq!(hash_of(&x), hash_of(&q), "hash({q})");
    }
}

#[test]
fn test_hash_of_equal_values() {
    let pairs = [
        (sqrt(2), 2 / sqrt(2)),
        (sqrt(2), 1 / sqrt(Rational::from_i64(1, 2))),
        (sqrt(2) + sqrt(3), sqrt(3) + sqrt(2)),
        (sqrt(2) * sqrt(3), sqrt(6)),
    ];
    for (a, b) in &pairs {
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b), "{a} == {b}, but hash is different");
    }
}

#[test]
fn test_values_usable_as_set_keys() {
    use std::collections::HashSet;

    let set: HashSet<Constructible> = [sqrt(8), 2 * sqrt(2), sqrt(2) + sqrt(2), sqrt(3)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&(sqrt(6) / sqrt(2))));
}

#[test]
fn test_str_and_debug() {
    let field = FieldTower::extend(Constructible::from(5)).unwrap();
    let x = Constructible::from_parts(Constructible::from(2), Constructible::from(3), field);
    assert_eq!(Constructible::from(2).to_string(), "2");
    assert_eq!(x.to_string(), "(2 + 3 * sqrt(5))");
    assert_eq!(
        format!("{x:?}"),
        "Constructible(Rational(2), Rational(3), Extension(Rational(5), Base))"
    );
}

#[test]
fn test_rational_operations() {
    let values = [
        Rational::from(0),
        Rational::from(1),
        Rational::from(-3),
        Rational::from_i64(7, 16),
    ];
    for a in &values {
        for b in &values {
            let (x, y) = (Constructible::from(a), Constructible::from(b));
            assert_eq!(&x + &y, a + b);
            assert_eq!(&x - &y, a - b);
            assert_eq!(&x * &y, a * b);
            assert_eq!(x + b, a + b);
            assert_eq!(a * &y, a * b);
            if !b.is_zero() {
                assert_eq!(Constructible::from(a) / b.clone(), a / b);
            }
        }
        assert_eq!(-Constructible::from(a), -a);
        assert_eq!(Constructible::from(a).abs(), a.abs());
    }
}

#[test]
fn test_domain_errors() {
    assert!(matches!(
        Constructible::from(-2).sqrt(),
        Err(DomainError::NegativeSquareRoot { .. })
    ));
    assert_eq!(
        (sqrt(3) - sqrt(3)).inverse().unwrap_err(),
        DomainError::DivisionByZero
    );
    assert_eq!(
        sqrt(3).checked_div(&Constructible::zero()).unwrap_err(),
        DomainError::DivisionByZero
    );
}

#[test]
fn test_join_expresses_both_in_one_field() {
    let (x, y) = sqrt(2).join(&sqrt(3));
    assert_eq!(x.field(), y.field());
    assert_eq!(x, sqrt(2));
    assert_eq!(y, sqrt(3));
    assert_eq!(x.field().to_string(), "Q[sqrt(2)][sqrt(3)]");
}
