//! # constructible-core
//!
//! Exact arithmetic on constructible numbers: the reals reachable from Q by
//! a finite chain of square roots.
//!
//! This crate provides:
//! - Field towers `Q[√r₁][√r₂]...` with value equality (`FieldTower`)
//! - The number type `Constructible` with exact `+ − × ÷`, ordering and
//!   square roots, including denesting of nested radicals
//! - Joining of two towers into their smallest common extension
//! - Minimal polynomials over Q and a representation-independent hash
//!
//! ## Representation
//!
//! ```text
//! Constructible
//!  ├── Rational(q)                    element of Q
//!  └── Quadratic(a, b, K[√r])         a + b·√r with a, b ∈ K
//! ```
//!
//! The same value can live in many towers: `√2·√3` and `√6` compare and
//! hash equal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod fmt;
pub mod join;
pub mod minpoly;
pub mod number;
mod ops;
pub mod poly;
pub mod root;
pub mod sign;
pub mod tower;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use constructible_integers::{DomainError, Integer, Rational};
pub use join::{join_fields, Embedding, FieldJoin};
pub use number::Constructible;
pub use poly::RationalPoly;
pub use tower::{Extension, FieldTower};
