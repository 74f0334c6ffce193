//! Human-readable and debug renderings.

use std::fmt;

use num_traits::One;

use crate::number::{Constructible, Repr};

impl fmt::Display for Constructible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match &self.repr {
            Repr::Rational(q) => return write!(f, "{q}"),
            Repr::Quadratic(x) => x,
        };
        let (a, b, r) = (&x.a, &x.b, &x.ext.radicand);

        if b.is_zero() {
            return write!(f, "{a}");
        }

        let unit = b.lifted_rational().filter(|q| q.abs().is_one());
        match (unit, a.is_zero()) {
            (Some(q), true) if q.is_negative() => write!(f, "-sqrt({r})"),
            (Some(_), true) => write!(f, "sqrt({r})"),
            (Some(q), false) if q.is_negative() => write!(f, "({a} - sqrt({r}))"),
            (Some(_), false) => write!(f, "({a} + sqrt({r}))"),
            (None, true) => write!(f, "({b} * sqrt({r}))"),
            (None, false) if b.signum() < 0 => write!(f, "({a} - {} * sqrt({r}))", b.neg_ref()),
            (None, false) => write!(f, "({a} + {b} * sqrt({r}))"),
        }
    }
}

/// Debug rendering of a component: rationals as bare `Rational(..)` leaves.
pub(crate) struct Leaf<'a>(pub(crate) &'a Constructible);

impl fmt::Debug for Leaf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.repr {
            Repr::Rational(q) => write!(f, "{q:?}"),
            Repr::Quadratic(_) => write!(f, "{:?}", self.0),
        }
    }
}

impl fmt::Debug for Constructible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Rational(q) => write!(f, "Constructible({q:?}, Rational(0), Base)"),
            Repr::Quadratic(x) => write!(
                f,
                "Constructible({:?}, {:?}, {:?})",
                Leaf(&x.a),
                Leaf(&x.b),
                self.field()
            ),
        }
    }
}
