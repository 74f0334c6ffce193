//! # Constructible
//!
//! Exact arithmetic on constructible numbers: the lengths that can be built
//! with compass and straightedge, i.e. the reals reachable from Q by a
//! finite chain of square roots.
//!
//! ## Features
//!
//! - **Exact**: no floating point anywhere; comparisons are decided exactly
//! - **Smallest towers**: `√2·√3` lands in the same field as `√6`, and
//!   nested radicals such as `√(3 + 2√2)` are denested to `1 + √2`
//! - **Value semantics**: equal values compare and hash equal, however
//!   they were built
//!
//! ## Quick Start
//!
//! ```rust
//! use constructible::prelude::*;
//!
//! let r = sqrt(2)? + sqrt(3)?;
//! assert_eq!(r.pow(4) - 10 * r.pow(2) + 1, 0);
//! assert_eq!(sqrt(2)? * sqrt(3)?, sqrt(6)?);
//! assert!(sqrt(-1).is_err());
//! # Ok::<(), DomainError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use constructible_core as core;
pub use constructible_integers as integers;

pub use constructible_core::{
    join_fields, Constructible, DomainError, Embedding, Extension, FieldJoin, FieldTower,
    RationalPoly,
};
pub use constructible_integers::{fsqrt, isqrt, Integer, Rational};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::sqrt;
    pub use constructible_core::{Constructible, DomainError, FieldTower};
    pub use constructible_integers::{Integer, Rational};
}

/// The exact square root of a rational or constructible value.
///
/// See [`Constructible::sqrt`].
///
/// # Errors
///
/// Returns [`DomainError::NegativeSquareRoot`] if `x` is negative.
pub fn sqrt(x: impl Into<Constructible>) -> Result<Constructible, DomainError> {
    x.into().sqrt()
}
