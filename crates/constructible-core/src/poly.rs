//! Dense univariate polynomials over Q.
//!
//! Only what the minimal polynomial computation needs: exact division,
//! GCD and the squarefree part.

use std::fmt;

use constructible_integers::Rational;
use num_traits::{One, Zero};

use crate::number::Constructible;

/// A dense univariate polynomial with rational coefficients.
///
/// Coefficients are stored in ascending degree order, constant term first.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RationalPoly {
    coeffs: Vec<Rational>,
}

impl RationalPoly {
    /// Creates a new polynomial from coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<Rational>) -> Self {
        // Normalize: remove trailing zeros
        while coeffs.len() > 1 && coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(Rational::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![Rational::zero()],
        }
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &Rational {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Rational {
        self.coeffs.get(i).cloned().unwrap_or_default()
    }

    /// Returns all coefficients, constant term first.
    #[must_use]
    pub fn coeffs(&self) -> &[Rational] {
        &self.coeffs
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &Rational) -> Self {
        Self::new(self.coeffs.iter().map(|x| x * c).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        let mut factor = Rational::zero();
        for c in self.coeffs.iter().skip(1) {
            factor = factor + Rational::one();
            result.push(c * &factor);
        }

        Self::new(result)
    }

    /// Scales the polynomial so that its leading coefficient is 1.
    #[must_use]
    pub fn monic(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        self.scale(&(&Rational::one() / self.leading_coeff()))
    }

    /// Divides by `divisor`, returning (quotient, remainder).
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero polynomial.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division by zero polynomial");

        if self.degree() < divisor.degree() {
            return (Self::zero(), self.clone());
        }

        let lead_inv = &Rational::one() / divisor.leading_coeff();
        let mut quotient = vec![Rational::zero(); self.degree() - divisor.degree() + 1];
        let mut remainder = self.coeffs.clone();

        while remainder.len() >= divisor.coeffs.len() && !remainder.iter().all(Zero::is_zero) {
            let shift = remainder.len() - divisor.coeffs.len();
            let coeff = &remainder[remainder.len() - 1] * &lead_inv;

            for (i, d) in divisor.coeffs.iter().enumerate() {
                remainder[shift + i] = &remainder[shift + i] - &(&coeff * d);
            }
            quotient[shift] = coeff;

            // The leading term is now zero by construction.
            remainder.pop();
        }

        (Self::new(quotient), Self::new(remainder))
    }

    /// Monic greatest common divisor by the Euclidean algorithm.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut p = self.clone();
        let mut q = other.clone();

        while !q.is_zero() {
            let (_, r) = p.div_rem(&q);
            p = q;
            q = r;
        }

        p.monic()
    }

    /// The monic product of the distinct irreducible factors, `p / gcd(p, p')`.
    #[must_use]
    pub fn squarefree_part(&self) -> Self {
        if self.degree() == 0 {
            return self.monic();
        }
        let g = self.gcd(&self.derivative());
        let (part, _) = self.div_rem(&g);
        part.monic()
    }

    /// Evaluates the polynomial at a constructible point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &Constructible) -> Constructible {
        let mut result = Constructible::zero();
        for c in self.coeffs.iter().rev() {
            result = result.mul_ref(x).add_ref(&Constructible::from(c));
        }
        result
    }
}

impl fmt::Display for RationalPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let sign = if c.is_negative() { "-" } else { "+" };
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {sign} ")?;
            }
            first = false;

            let abs = c.abs();
            match i {
                0 => write!(f, "{abs}")?,
                _ => {
                    if !abs.is_one() {
                        write!(f, "{abs}*")?;
                    }
                    if i == 1 {
                        write!(f, "x")?;
                    } else {
                        write!(f, "x^{i}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[i64]) -> RationalPoly {
        RationalPoly::new(coeffs.iter().map(|&c| Rational::from(c)).collect())
    }

    #[test]
    fn test_normalization() {
        assert_eq!(poly(&[1, 2, 0, 0]).degree(), 1);
        assert!(poly(&[0, 0]).is_zero());
        assert!(RationalPoly::new(Vec::new()).is_zero());
    }

    #[test]
    fn test_div_rem() {
        // (x² − 1) / (x − 1) = x + 1
        let (q, r) = poly(&[-1, 0, 1]).div_rem(&poly(&[-1, 1]));
        assert_eq!(q, poly(&[1, 1]));
        assert!(r.is_zero());

        // (x² + 1) / (x − 1) = x + 1, remainder 2
        let (q, r) = poly(&[1, 0, 1]).div_rem(&poly(&[-1, 1]));
        assert_eq!(q, poly(&[1, 1]));
        assert_eq!(r, poly(&[2]));
    }

    #[test]
    fn test_gcd() {
        // gcd((x−1)(x+2), (x−1)(x−3)) = x − 1
        let a = poly(&[-2, 1, 1]);
        let b = poly(&[3, -4, 1]);
        assert_eq!(a.gcd(&b), poly(&[-1, 1]));
    }

    #[test]
    fn test_squarefree_part() {
        // (x² − 2)² = x⁴ − 4x² + 4
        let p = poly(&[4, 0, -4, 0, 1]);
        assert_eq!(p.squarefree_part(), poly(&[-2, 0, 1]));

        // 3x − 6 is made monic
        assert_eq!(poly(&[-6, 3]).squarefree_part(), poly(&[-2, 1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(poly(&[1, 0, -10, 0, 1]).to_string(), "x^4 - 10*x^2 + 1");
        assert_eq!(poly(&[-2, 1]).to_string(), "x - 2");
        assert_eq!(poly(&[0]).to_string(), "0");
    }

    #[test]
    fn test_eval() {
        let p = poly(&[-2, 0, 1]);
        assert_eq!(p.eval(&Constructible::from(3)), 7);
        assert_eq!(p.eval(&Constructible::from(2).sqrt().unwrap()), 0);
    }
}
