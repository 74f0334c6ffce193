//! Exact sign computation and the comparisons built on it.
//!
//! For `x = a + b√r` with `r > 0`:
//! - if `a` and `b` have the same sign, that is the sign of `x`;
//! - otherwise `sign(x) = sign(a) · sign(a² − r·b²)`, since
//!   `(a + b√r)(a − b√r) = a² − r·b²` and `a − b√r` has the sign of `a`.
//!
//! The second case recurses one level down the tower.

use std::cmp::Ordering;

use constructible_integers::Rational;

use crate::number::{Constructible, Repr};

impl Constructible {
    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            return 0;
        }
        match &self.repr {
            Repr::Rational(q) => q.signum(),
            Repr::Quadratic(x) => {
                if x.a.is_zero() {
                    return x.b.signum();
                }
                if x.b.is_zero() {
                    return x.a.signum();
                }
                let sign_a = x.a.signum();
                if sign_a == x.b.signum() {
                    return sign_a;
                }
                let norm = x
                    .a
                    .mul_ref(&x.a)
                    .sub_ref(&x.ext.radicand.mul_ref(&x.b).mul_ref(&x.b));
                sign_a * norm.signum()
            }
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.signum() < 0 {
            self.neg_ref()
        } else {
            self.clone()
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.sub_ref(other).signum().cmp(&0)
    }
}

impl PartialEq for Constructible {
    fn eq(&self, other: &Self) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        if self.is_zero() {
            return false;
        }
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Constructible {}

impl PartialOrd for Constructible {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Constructible {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialEq<Rational> for Constructible {
    fn eq(&self, other: &Rational) -> bool {
        *self == Constructible::from(other)
    }
}

impl PartialEq<Constructible> for Rational {
    fn eq(&self, other: &Constructible) -> bool {
        other == self
    }
}

impl PartialEq<i64> for Constructible {
    fn eq(&self, other: &i64) -> bool {
        *self == Constructible::from(*other)
    }
}

impl PartialEq<Constructible> for i64 {
    fn eq(&self, other: &Constructible) -> bool {
        other == self
    }
}

impl PartialOrd<Rational> for Constructible {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.compare(&Constructible::from(other)))
    }
}

impl PartialOrd<Constructible> for Rational {
    fn partial_cmp(&self, other: &Constructible) -> Option<Ordering> {
        Some(Constructible::from(self).compare(other))
    }
}

impl PartialOrd<i64> for Constructible {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.compare(&Constructible::from(*other)))
    }
}

impl PartialOrd<Constructible> for i64 {
    fn partial_cmp(&self, other: &Constructible) -> Option<Ordering> {
        Some(Constructible::from(*self).compare(other))
    }
}
