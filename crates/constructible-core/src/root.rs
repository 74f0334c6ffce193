//! Square roots inside a field, with denesting of nested radicals.
//!
//! For `x = a + b√r` suppose `y = p + q√r` satisfies `y² = x`. Then
//! `p² + q²r = a`, `2pq = b` and `p² − q²r = ±n` with `n² = a² − r·b²`.
//! So either `p² = (a + n)/2` or `q² = (a + n)/(2r)`, and the other
//! coefficient follows from `2pq = b`. Both candidates are tried, each one a
//! square root problem one level down the tower.
//!
//! Only when neither works does `sqrt` adjoin a fresh extension.

use std::sync::Arc;

use constructible_integers::{fsqrt, DomainError, Rational};
use num_traits::One;
use tracing::debug;

use crate::number::{Constructible, Repr};
use crate::tower::Extension;

impl Constructible {
    /// Looks for a square root in this value's own field.
    ///
    /// Returns `Ok(None)` if the root does not exist in the field. A returned
    /// root is always nonnegative.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeSquareRoot`] if the value is negative.
    pub fn try_sqrt(&self) -> Result<Option<Self>, DomainError> {
        if self.signum() < 0 {
            return Err(DomainError::negative_sqrt(self));
        }
        Ok(self.root_in_field())
    }

    /// The exact square root.
    ///
    /// The root is expressed in the value's own field when possible, which
    /// avoids redundant towers such as `Q[√2][√3][√6]`. Otherwise the result
    /// is the generator of the new tower `field[√self]`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeSquareRoot`] if the value is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use constructible_core::Constructible;
    ///
    /// let root = Constructible::from(2).sqrt().unwrap();
    /// assert_eq!(root.to_string(), "sqrt(2)");
    /// assert_eq!(root.clone() * root, 2);
    ///
    /// let three = Constructible::from(9).sqrt().unwrap();
    /// assert_eq!(three.to_string(), "3");
    /// ```
    pub fn sqrt(&self) -> Result<Self, DomainError> {
        if let Some(root) = self.try_sqrt()? {
            return Ok(root);
        }

        let field = self.field();
        debug!(radicand = %self, height = field.height() + 1, "adjoining a new square root");
        let zero = Self::lift_rational(&Rational::from(0), &field);
        let one = Self::lift_rational(&Rational::one(), &field);
        Ok(Self::quadratic(zero, one, Extension::adjoin(self.clone())))
    }

    /// The nonnegative square root in this value's own field, if there is one.
    ///
    /// The value must be nonnegative.
    pub(crate) fn root_in_field(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(self.clone());
        }

        let x = match &self.repr {
            Repr::Rational(q) => {
                return match fsqrt(q) {
                    Ok((root, rest)) if rest.is_one() => Some(Self::from_rational(root)),
                    _ => None,
                };
            }
            Repr::Quadratic(x) => x,
        };

        let r = &x.ext.radicand;
        let norm = x.a.mul_ref(&x.a).sub_ref(&r.mul_ref(&x.b).mul_ref(&x.b));
        if norm.signum() < 0 {
            return None;
        }
        let n = norm.root_in_field()?;

        let a_plus_n = x.a.add_ref(&n);
        if a_plus_n.signum() <= 0 {
            return None;
        }
        let half = Rational::from_i64(1, 2);

        if let Some(p) = a_plus_n.scale(&half).root_in_field() {
            let q = x.b.checked_div(&p).ok()?.scale(&half);
            return Some(Self::quadratic(p, q, Arc::clone(&x.ext)).abs());
        }

        if let Some(q) = a_plus_n.checked_div(r).ok()?.scale(&half).root_in_field() {
            let p = x.b.checked_div(&q).ok()?.scale(&half);
            return Some(Self::quadratic(p, q, Arc::clone(&x.ext)).abs());
        }

        None
    }
}
