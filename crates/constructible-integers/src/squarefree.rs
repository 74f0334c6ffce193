//! Square-free splitting of nonnegative integers and rationals.
//!
//! Every nonnegative integer can be written as `n = a² · b` with `b`
//! square-free. The splitting is what decides whether a rational has an
//! exact square root: it does iff the square-free part is 1.
//!
//! # Algorithm
//!
//! Trial division by 2, 3, 5 and then by the candidates `30k + {7, 11, 13,
//! 17, 19, 23, 29, 31}`, which skips 73% of all integers. Even powers of a
//! divisor go into `a`, a left-over odd power goes into the square-free part.
//! The search stops once a candidate's square exceeds the remaining cofactor,
//! or as soon as the cofactor drops into the precomputed small table.
//!
//! The trial division is a placeholder; large inputs with big prime factors
//! are slow.

use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use crate::{DomainError, Integer, Rational};

/// Largest integer answered from the precomputed square-free table.
pub const SMALL_CACHE_LIMIT: u64 = 100;

/// Gaps between consecutive wheel candidates starting at 7.
const WHEEL_INCREMENTS: [u64; 8] = [4, 2, 4, 2, 4, 6, 2, 6];

/// `SMALL_SQUARE_FREE[n] = (a, b)` with `n = a² · b`, for `n` in `0..=SMALL_CACHE_LIMIT`.
///
/// Built in full on first access and never written again.
static SMALL_SQUARE_FREE: Lazy<Vec<(u64, u64)>> =
    Lazy::new(|| (0..=SMALL_CACHE_LIMIT).map(split_machine_word).collect());

/// Trial divisor candidates: 2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, ...
///
/// All primes appear; the composites that slip through are harmless because
/// their prime factors have already been divided out.
#[derive(Clone, Debug)]
struct WheelDivisors {
    next: u64,
    step: usize,
}

impl WheelDivisors {
    fn new() -> Self {
        Self { next: 2, step: 0 }
    }
}

impl Iterator for WheelDivisors {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next;
        self.next = match current {
            2 => 3,
            3 => 5,
            5 => 7,
            _ => {
                let inc = WHEEL_INCREMENTS[self.step];
                self.step = (self.step + 1) % WHEEL_INCREMENTS.len();
                current.checked_add(inc)?
            }
        };
        Some(current)
    }
}

/// Square-free splitting on machine words, used to fill the small table.
fn split_machine_word(n: u64) -> (u64, u64) {
    if n == 0 {
        return (0, 1);
    }

    let (mut a, mut b, mut c) = (1, n, 1);
    for k in WheelDivisors::new() {
        let k_sqr = k * k;
        if k_sqr > b {
            break;
        }
        while b % k_sqr == 0 {
            a *= k;
            b /= k_sqr;
        }
        if b % k == 0 {
            b /= k;
            c *= k;
        }
    }
    (a, b * c)
}

fn small_split(n: &Integer) -> Option<(Integer, Integer)> {
    let n = n.to_u64().filter(|&n| (1..=SMALL_CACHE_LIMIT).contains(&n))?;
    let index = usize::try_from(n).ok()?;
    let (a, b) = SMALL_SQUARE_FREE[index];
    Some((Integer::from(a), Integer::from(b)))
}

/// Splits a nonnegative integer `n` into `(a, b)` with `n = a² · b` and `b`
/// square-free.
///
/// If `n` is a perfect square, `a` is its square root and `b` is one.
/// By convention `isqrt(0) = (0, 1)`.
///
/// # Errors
///
/// Returns [`DomainError::NegativeSquareRoot`] if `n` is negative.
///
/// # Example
///
/// ```
/// use constructible_integers::{isqrt, Integer};
///
/// let (a, b) = isqrt(&Integer::new(120)).unwrap();
/// assert_eq!((a, b), (Integer::new(2), Integer::new(30)));
/// ```
pub fn isqrt(n: &Integer) -> Result<(Integer, Integer), DomainError> {
    if n.is_negative() {
        return Err(DomainError::negative_sqrt(n));
    }
    if n.is_zero() {
        return Ok((Integer::zero(), Integer::one()));
    }
    if let Some(split) = small_split(n) {
        return Ok(split);
    }

    // n = a² · b · c, where c collects the primes already stripped once.
    let mut a = Integer::one();
    let mut b = n.clone();
    let mut c = Integer::one();

    for k in WheelDivisors::new() {
        let k = Integer::from(k);
        let k_sqr = &k * &k;
        if k_sqr > b {
            break;
        }

        loop {
            let (quotient, remainder) = b.div_rem(&k_sqr);
            if !remainder.is_zero() {
                break;
            }
            a = a * &k;
            b = quotient;
        }

        let (quotient, remainder) = b.div_rem(&k);
        if remainder.is_zero() {
            b = quotient;
            c = c * &k;
        }

        if let Some((small_a, small_b)) = small_split(&b) {
            return Ok((a * small_a, c * small_b));
        }
    }

    Ok((a, b * c))
}

/// Splits a nonnegative rational `q` into `(a, b)` with `q = a² · b`, `a`
/// rational and `b` a square-free integer.
///
/// Numerator and denominator are split independently:
/// `q = (n/(d_a · d_b))² · (n_b · d_b)` where `num = n_a² n_b`, `den = d_a² d_b`.
///
/// # Errors
///
/// Returns [`DomainError::NegativeSquareRoot`] if `q` is negative.
pub fn fsqrt(q: &Rational) -> Result<(Rational, Integer), DomainError> {
    if q.is_negative() {
        return Err(DomainError::negative_sqrt(q));
    }
    if q.is_zero() {
        return Ok((Rational::zero(), Integer::one()));
    }

    let (num_root, num_rest) = isqrt(&q.numerator())?;
    let (den_root, den_rest) = isqrt(&q.denominator())?;

    let root = Rational::new(num_root, &den_root * &den_rest);
    Ok((root, num_rest * den_rest))
}
