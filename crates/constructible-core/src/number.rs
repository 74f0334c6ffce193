//! The constructible number value type and its field arithmetic.
//!
//! An element of `K[√r]` is stored as the pair `(a, b)` with `a, b ∈ K`,
//! meaning `a + b·√r`. An element of Q is just a [`Rational`].
//!
//! Arithmetic between elements of the same tower works componentwise:
//!
//! ```text
//! (a + b√r) + (c + d√r) = (a + c) + (b + d)√r
//! (a + b√r) · (c + d√r) = (ac + bdr) + (ad + bc)√r
//! 1 / (a + b√r)         = (a − b√r) / (a² − b²r)
//! ```
//!
//! Elements of different towers are first moved into the join of the two
//! towers (see [`crate::join`]).

use std::borrow::Cow;
use std::sync::Arc;

use constructible_integers::{DomainError, Integer, Rational};
use num_traits::{One, Zero};

use crate::join::join_fields;
use crate::tower::{same_extension, Extension, FieldTower};

/// An exact constructible real number.
///
/// Values are immutable. The same number can be represented in many
/// towers, so equality, ordering and hashing are defined on the value, not
/// on the representation.
#[derive(Clone)]
pub struct Constructible {
    pub(crate) repr: Repr,
    is_zero: bool,
}

#[derive(Clone)]
pub(crate) enum Repr {
    /// An element of Q.
    Rational(Rational),
    /// `a + b·√r` in `ext = base[√r]`, with `a, b ∈ base`.
    Quadratic(Arc<Quadratic>),
}

pub(crate) struct Quadratic {
    pub(crate) a: Constructible,
    pub(crate) b: Constructible,
    pub(crate) ext: Arc<Extension>,
}

impl Constructible {
    /// The rational zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_rational(Rational::zero())
    }

    /// The rational one.
    #[must_use]
    pub fn one() -> Self {
        Self::from_rational(Rational::one())
    }

    /// Wraps a rational as an element of the base field Q.
    #[must_use]
    pub fn from_rational(q: Rational) -> Self {
        let is_zero = q.is_zero();
        Self {
            repr: Repr::Rational(q),
            is_zero,
        }
    }

    pub(crate) fn quadratic(a: Self, b: Self, ext: Arc<Extension>) -> Self {
        let is_zero = a.is_zero && b.is_zero;
        Self {
            repr: Repr::Quadratic(Arc::new(Quadratic { a, b, ext })),
            is_zero,
        }
    }

    /// Assembles `a + b·√r` in `field = base[√r]` from its raw parts.
    ///
    /// For the base field, `b` must be zero and `a` is returned as is.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` do not live in the level below `field`.
    #[must_use]
    pub fn from_parts(a: Self, b: Self, field: FieldTower) -> Self {
        match field {
            FieldTower::Base => {
                assert!(
                    a.field().is_base() && b.is_zero,
                    "an element of Q has no sqrt component"
                );
                a
            }
            FieldTower::Extension(ext) => {
                assert!(
                    a.field() == ext.base && b.field() == ext.base,
                    "components must live in the base of the extension"
                );
                Self::quadratic(a, b, ext)
            }
        }
    }

    /// Represents the rational `q` as an element of `field`.
    ///
    /// The result has a zero sqrt component at every level of the tower.
    #[must_use]
    pub fn lift_rational(q: &Rational, field: &FieldTower) -> Self {
        let levels: Vec<&Arc<Extension>> = field.extensions().collect();
        let mut value = Self::from_rational(q.clone());
        let mut zero = Self::zero();
        for ext in levels.into_iter().rev() {
            value = Self::quadratic(value, zero.clone(), Arc::clone(ext));
            zero = Self::quadratic(zero.clone(), zero, Arc::clone(ext));
        }
        value
    }

    /// The tower this representation lives in.
    #[must_use]
    pub fn field(&self) -> FieldTower {
        match &self.repr {
            Repr::Rational(_) => FieldTower::Base,
            Repr::Quadratic(x) => FieldTower::Extension(Arc::clone(&x.ext)),
        }
    }

    /// The radicand `r` of the topmost extension, if the value is stored above Q.
    #[must_use]
    pub fn radicand(&self) -> Option<&Self> {
        match &self.repr {
            Repr::Rational(_) => None,
            Repr::Quadratic(x) => Some(&x.ext.radicand),
        }
    }

    /// The tower one level below this representation, if any.
    #[must_use]
    pub fn base_field(&self) -> Option<&FieldTower> {
        match &self.repr {
            Repr::Rational(_) => None,
            Repr::Quadratic(x) => Some(&x.ext.base),
        }
    }

    /// The components `(a, b)` of `a + b·√r`, if the value is stored above Q.
    #[must_use]
    pub fn components(&self) -> Option<(&Self, &Self)> {
        match &self.repr {
            Repr::Rational(_) => None,
            Repr::Quadratic(x) => Some((&x.a, &x.b)),
        }
    }

    /// The rational value, if the value is stored directly in Q.
    #[must_use]
    pub fn as_rational(&self) -> Option<&Rational> {
        match &self.repr {
            Repr::Rational(q) => Some(q),
            Repr::Quadratic(_) => None,
        }
    }

    /// The rational value, if every sqrt component of the representation is zero.
    ///
    /// Within a tower the representation is unique, so this finds every
    /// rational value that is stored in any tower.
    pub(crate) fn lifted_rational(&self) -> Option<&Rational> {
        let mut value = self;
        loop {
            match &value.repr {
                Repr::Rational(q) => return Some(q),
                Repr::Quadratic(x) if x.b.is_zero => value = &x.a,
                Repr::Quadratic(_) => return None,
            }
        }
    }

    /// Returns true if this is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.is_zero
    }

    /// Structural equality of two representations.
    pub(crate) fn same_repr(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Rational(p), Repr::Rational(q)) => p == q,
            (Repr::Quadratic(x), Repr::Quadratic(y)) => {
                Arc::ptr_eq(x, y)
                    || (x.a.same_repr(&y.a)
                        && x.b.same_repr(&y.b)
                        && same_extension(&x.ext, &y.ext))
            }
            _ => false,
        }
    }

    /// The conjugate `a − b·√r` in the same field.
    ///
    /// Rationals are their own conjugate.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        match &self.repr {
            Repr::Rational(_) => self.clone(),
            Repr::Quadratic(x) => Self::quadratic(x.a.clone(), x.b.neg_ref(), Arc::clone(&x.ext)),
        }
    }

    /// Expresses `self` and `other` as elements of one common tower.
    ///
    /// The returned values are equal to the inputs.
    #[must_use]
    pub fn join(&self, other: &Self) -> (Self, Self) {
        let (x, y) = self.unify(other);
        (x.into_owned(), y.into_owned())
    }

    pub(crate) fn unify<'a>(&'a self, other: &'a Self) -> (Cow<'a, Self>, Cow<'a, Self>) {
        let (field1, field2) = (self.field(), other.field());
        if field1 == field2 {
            return (Cow::Borrowed(self), Cow::Borrowed(other));
        }
        let joined = join_fields(&field1, &field2);
        (
            Cow::Owned(joined.left.apply(self)),
            Cow::Owned(joined.right.apply(other)),
        )
    }

    /// Approximate value, for display and sanity checks only.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match &self.repr {
            Repr::Rational(q) => q.to_f64(),
            Repr::Quadratic(_) if self.is_zero => 0.0,
            Repr::Quadratic(x) => x.a.to_f64() + x.b.to_f64() * x.ext.radicand.to_f64().sqrt(),
        }
    }

    pub(crate) fn neg_ref(&self) -> Self {
        match &self.repr {
            Repr::Rational(q) => Self::from_rational(-q),
            Repr::Quadratic(x) => Self::quadratic(x.a.neg_ref(), x.b.neg_ref(), Arc::clone(&x.ext)),
        }
    }

    pub(crate) fn add_ref(&self, other: &Self) -> Self {
        if self.is_zero {
            return other.clone();
        }
        if other.is_zero {
            return self.clone();
        }
        let (x, y) = self.unify(other);
        match (&x.repr, &y.repr) {
            (Repr::Rational(p), Repr::Rational(q)) => Self::from_rational(p + q),
            (Repr::Quadratic(u), Repr::Quadratic(v)) => {
                Self::quadratic(u.a.add_ref(&v.a), u.b.add_ref(&v.b), Arc::clone(&u.ext))
            }
            // Joining never moves a value down to Q.
            (Repr::Rational(p), Repr::Quadratic(_)) => {
                Self::lift_rational(p, &y.field()).add_ref(&y)
            }
            (Repr::Quadratic(_), Repr::Rational(q)) => {
                x.add_ref(&Self::lift_rational(q, &x.field()))
            }
        }
    }

    pub(crate) fn sub_ref(&self, other: &Self) -> Self {
        self.add_ref(&other.neg_ref())
    }

    pub(crate) fn mul_ref(&self, other: &Self) -> Self {
        if self.is_zero {
            return self.clone();
        }
        if other.is_zero {
            return other.clone();
        }
        if let Some(q) = other.as_rational() {
            return self.scale(q);
        }
        if let Some(p) = self.as_rational() {
            return other.scale(p);
        }
        let (x, y) = self.unify(other);
        match (&x.repr, &y.repr) {
            (Repr::Quadratic(u), Repr::Quadratic(v)) => {
                let r = &u.ext.radicand;
                let a = u.a.mul_ref(&v.a).add_ref(&u.b.mul_ref(&v.b).mul_ref(r));
                let b = u.a.mul_ref(&v.b).add_ref(&u.b.mul_ref(&v.a));
                Self::quadratic(a, b, Arc::clone(&u.ext))
            }
            // Joining never moves a value down to Q.
            (Repr::Rational(p), _) => y.scale(p),
            (_, Repr::Rational(q)) => x.scale(q),
        }
    }

    /// Multiplies every component by a rational, keeping the field.
    pub(crate) fn scale(&self, q: &Rational) -> Self {
        match &self.repr {
            Repr::Rational(p) => Self::from_rational(p * q),
            Repr::Quadratic(x) => Self::quadratic(x.a.scale(q), x.b.scale(q), Arc::clone(&x.ext)),
        }
    }

    /// The multiplicative inverse.
    ///
    /// `1/(a + b√r) = (a − b√r) / (a² − b²r)`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DivisionByZero`] if the value is zero.
    pub fn inverse(&self) -> Result<Self, DomainError> {
        match &self.repr {
            Repr::Rational(q) => Ok(Self::from_rational(q.recip()?)),
            Repr::Quadratic(x) => {
                let norm = x
                    .a
                    .mul_ref(&x.a)
                    .sub_ref(&x.b.mul_ref(&x.b).mul_ref(&x.ext.radicand));
                let norm_inv = norm.inverse()?;
                Ok(Self::quadratic(
                    x.a.mul_ref(&norm_inv),
                    x.b.neg_ref().mul_ref(&norm_inv),
                    Arc::clone(&x.ext),
                ))
            }
        }
    }

    /// Exact division.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, DomainError> {
        Ok(self.mul_ref(&other.inverse()?))
    }

    /// Computes `self^n` by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_ref(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_ref(&base);
            }
        }

        result
    }
}

impl Default for Constructible {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Rational> for Constructible {
    fn from(q: Rational) -> Self {
        Self::from_rational(q)
    }
}

impl From<&Rational> for Constructible {
    fn from(q: &Rational) -> Self {
        Self::from_rational(q.clone())
    }
}

impl From<Integer> for Constructible {
    fn from(n: Integer) -> Self {
        Self::from_rational(Rational::from_integer(n))
    }
}

impl From<i64> for Constructible {
    fn from(n: i64) -> Self {
        Self::from_rational(Rational::from(n))
    }
}

impl From<i32> for Constructible {
    fn from(n: i32) -> Self {
        Self::from_rational(Rational::from(n))
    }
}
