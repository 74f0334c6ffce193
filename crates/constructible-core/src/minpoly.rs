//! Minimal polynomials and representation-independent hashing.
//!
//! Starting from `X − x` over the field of `x`, the polynomial is multiplied
//! by its conjugate (`√r ↦ −√r` in every coefficient) once per tower level.
//! The product has its coefficients in the level below, so after walking the
//! whole tower it has rational coefficients and vanishes at `x`. It is a
//! power of the minimal polynomial; the squarefree part removes the excess.

use std::hash::{Hash, Hasher};

use constructible_integers::Rational;
use crate::number::Constructible;
use crate::poly::RationalPoly;

/// The first component of a coefficient, one level down.
fn lower(c: &Constructible) -> Constructible {
    c.components().map_or_else(|| c.clone(), |(a, _)| a.clone())
}

fn is_self_conjugate(c: &Constructible) -> bool {
    c.components().map_or(true, |(_, b)| b.is_zero())
}

impl Constructible {
    /// The monic minimal polynomial over Q.
    ///
    /// # Example
    ///
    /// ```
    /// use constructible_core::Constructible;
    ///
    /// let r = Constructible::from(2).sqrt().unwrap() + Constructible::from(3).sqrt().unwrap();
    /// assert_eq!(r.minpoly().to_string(), "x^4 - 10*x^2 + 1");
    /// ```
    #[must_use]
    pub fn minpoly(&self) -> RationalPoly {
        if let Some(q) = self.lifted_rational() {
            return RationalPoly::new(vec![-q, Rational::from(1)]);
        }

        let field = self.field();
        let one = Self::lift_rational(&Rational::from(1), &field);
        let mut poly = vec![self.neg_ref(), one];

        for _ in 0..field.height() {
            if poly.iter().all(is_self_conjugate) {
                poly = poly.iter().map(lower).collect();
                continue;
            }

            let conj: Vec<Self> = poly.iter().map(Self::conjugate).collect();
            let deg = poly.len() - 1;
            let mut product = Vec::with_capacity(2 * deg + 1);

            for m in 0..=2 * deg {
                // p[i]·conj(p[m−i]) and p[m−i]·conj(p[i]) are conjugate, so
                // each pair contributes twice the first component.
                let mut coeff = if m % 2 == 0 {
                    lower(&poly[m / 2].mul_ref(&conj[m / 2]))
                } else {
                    Self::zero()
                };
                for i in m.saturating_sub(deg)..(m + 1) / 2 {
                    let cross = lower(&poly[i].mul_ref(&conj[m - i]));
                    coeff = coeff.add_ref(&cross.scale(&Rational::from(2)));
                }
                product.push(coeff);
            }

            poly = product;
        }

        // Every level has been conjugated away, so each coefficient is rational.
        debug_assert!(
            poly.iter().all(|c| c.lifted_rational().is_some()),
            "minimal polynomial coefficient left above Q"
        );
        let coeffs = poly
            .iter()
            .map(|c| c.lifted_rational().cloned().unwrap_or_default())
            .collect();
        RationalPoly::new(coeffs).squarefree_part()
    }

    /// Returns true if the value is rational, in whatever field it is stored.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.to_rational().is_some()
    }

    /// The rational value, if the value is rational.
    ///
    /// Unlike [`Constructible::as_rational`] this also recognizes rationals
    /// stored in an extension, such as `√2·√2`.
    #[must_use]
    pub fn to_rational(&self) -> Option<Rational> {
        if let Some(q) = self.lifted_rational() {
            return Some(q.clone());
        }
        let poly = self.minpoly();
        (poly.degree() == 1).then(|| -poly.coeff(0))
    }
}

impl Hash for Constructible {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal values hash equal: rationals hash like the bare `Rational`,
        // everything else by its minimal polynomial.
        if let Some(q) = self.lifted_rational() {
            q.hash(state);
            return;
        }
        let poly = self.minpoly();
        if poly.degree() == 1 {
            (-poly.coeff(0)).hash(state);
        } else {
            poly.coeffs().hash(state);
        }
    }
}
