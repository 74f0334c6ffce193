//! Operator overloading.
//!
//! Every operator funnels into one routine on references. Plain `Rational`
//! and `i64` operands are promoted to base-field values first, on either
//! side of the operator.

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use constructible_integers::Rational;

use crate::number::Constructible;

/// `x / y` for the `Div` operator, which cannot report errors.
fn divide(x: &Constructible, y: &Constructible) -> Constructible {
    match x.checked_div(y) {
        Ok(quotient) => quotient,
        Err(err) => panic!("{err}"),
    }
}

macro_rules! binop {
    ($Trait:ident, $method:ident, $f:path) => {
        impl $Trait for Constructible {
            type Output = Constructible;
            fn $method(self, rhs: Constructible) -> Constructible {
                $f(&self, &rhs)
            }
        }

        impl $Trait<&Constructible> for Constructible {
            type Output = Constructible;
            fn $method(self, rhs: &Constructible) -> Constructible {
                $f(&self, rhs)
            }
        }

        impl $Trait<Constructible> for &Constructible {
            type Output = Constructible;
            fn $method(self, rhs: Constructible) -> Constructible {
                $f(self, &rhs)
            }
        }

        impl $Trait<&Constructible> for &Constructible {
            type Output = Constructible;
            fn $method(self, rhs: &Constructible) -> Constructible {
                $f(self, rhs)
            }
        }

        binop!(@promote $Trait, $method, $f, Rational);
        binop!(@promote $Trait, $method, $f, &Rational);
        binop!(@promote $Trait, $method, $f, i64);
    };

    (@promote $Trait:ident, $method:ident, $f:path, $T:ty) => {
        impl $Trait<$T> for Constructible {
            type Output = Constructible;
            fn $method(self, rhs: $T) -> Constructible {
                $f(&self, &Constructible::from(rhs))
            }
        }

        impl $Trait<$T> for &Constructible {
            type Output = Constructible;
            fn $method(self, rhs: $T) -> Constructible {
                $f(self, &Constructible::from(rhs))
            }
        }

        impl $Trait<Constructible> for $T {
            type Output = Constructible;
            fn $method(self, rhs: Constructible) -> Constructible {
                $f(&Constructible::from(self), &rhs)
            }
        }

        impl $Trait<&Constructible> for $T {
            type Output = Constructible;
            fn $method(self, rhs: &Constructible) -> Constructible {
                $f(&Constructible::from(self), rhs)
            }
        }
    };
}

binop!(Add, add, Constructible::add_ref);
binop!(Sub, sub, Constructible::sub_ref);
binop!(Mul, mul, Constructible::mul_ref);
// Panics on a zero divisor, like the rational reciprocal; see `checked_div`.
binop!(Div, div, divide);

macro_rules! assignop {
    ($Trait:ident, $method:ident, $Op:ident, $op:ident) => {
        impl<T> $Trait<T> for Constructible
        where
            Constructible: $Op<T, Output = Constructible>,
        {
            fn $method(&mut self, rhs: T) {
                *self = std::mem::take(self).$op(rhs);
            }
        }
    };
}

assignop!(AddAssign, add_assign, Add, add);
assignop!(SubAssign, sub_assign, Sub, sub);
assignop!(MulAssign, mul_assign, Mul, mul);
assignop!(DivAssign, div_assign, Div, div);

impl Neg for Constructible {
    type Output = Constructible;
    fn neg(self) -> Constructible {
        self.neg_ref()
    }
}

impl Neg for &Constructible {
    type Output = Constructible;
    fn neg(self) -> Constructible {
        self.neg_ref()
    }
}

impl Sum for Constructible {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Constructible::zero(), |acc, x| acc.add_ref(&x))
    }
}

impl<'a> Sum<&'a Constructible> for Constructible {
    fn sum<I: Iterator<Item = &'a Constructible>>(iter: I) -> Self {
        iter.fold(Constructible::zero(), |acc, x| acc.add_ref(x))
    }
}

impl Product for Constructible {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Constructible::one(), |acc, x| acc.mul_ref(&x))
    }
}

impl<'a> Product<&'a Constructible> for Constructible {
    fn product<I: Iterator<Item = &'a Constructible>>(iter: I) -> Self {
        iter.fold(Constructible::one(), |acc, x| acc.mul_ref(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqrt(n: i64) -> Constructible {
        Constructible::from(n).sqrt().unwrap()
    }

    #[test]
    fn test_operand_forms() {
        let s = sqrt(2);
        let expected = sqrt(2) * 3;
        assert_eq!(&s + &s + &s, expected);
        assert_eq!(s.clone() + &s + s.clone(), expected);
        assert_eq!(&s * 3, expected);
        assert_eq!(3 * &s, expected);
        assert_eq!(Rational::from(3) * s.clone(), expected);
        assert_eq!(&Rational::from(3) * &s, expected);
    }

    #[test]
    fn test_mixed_promotion() {
        let s = sqrt(2);
        assert_eq!(1 - &s, -(&s - 1));
        assert_eq!(&s / 2, s.clone() * Rational::from_i64(1, 2));
        assert_eq!(2 / &s, s);
        assert_eq!(Rational::from_i64(1, 2) + &s - &s, Rational::from_i64(1, 2));
    }

    #[test]
    fn test_assign_ops() {
        let mut x = sqrt(3);
        x += 1;
        x *= &sqrt(3);
        // (√3 + 1)·√3 = 3 + √3
        assert_eq!(x, sqrt(3) + 3);
        x -= sqrt(3);
        x /= Rational::from(3);
        assert_eq!(x, 1);
    }

    #[test]
    fn test_sum_and_product() {
        let roots = [sqrt(2), sqrt(3), sqrt(6)];
        let product: Constructible = roots.iter().product();
        assert_eq!(product, 6);
        let sum: Constructible = roots.into_iter().sum();
        assert!(sum > 5);
        assert!(sum < 6);
        assert_eq!(Vec::<Constructible>::new().into_iter().sum::<Constructible>(), 0);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_division_by_zero_panics() {
        let _ = sqrt(2) / (sqrt(2) - sqrt(2));
    }
}
