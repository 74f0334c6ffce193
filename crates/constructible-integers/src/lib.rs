//! # constructible-integers
//!
//! Exact integer and rational arithmetic for the constructible number tower.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals in lowest terms (`Rational`)
//! - Square-free splitting `n = a² · b` of integers and rationals
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Square-free splitting uses wheel trial division; cofactors that fall
//!   into `1..=SMALL_CACHE_LIMIT` are answered from a precomputed table

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;
pub mod squarefree;

#[cfg(test)]
mod proptests;

pub use error::DomainError;
pub use integer::Integer;
pub use rational::Rational;
pub use squarefree::{fsqrt, isqrt, SMALL_CACHE_LIMIT};
