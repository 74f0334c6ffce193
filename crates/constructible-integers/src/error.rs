//! The single error kind of the constructible number algebra.

use thiserror::Error;

/// A math domain error.
///
/// Raised for square roots of verifiably negative values, reciprocals of
/// zero, and extensions by a radicand that is already a square in its field.
/// Finding no square root inside a given field is *not* an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The square root of a negative value was requested.
    #[error("math domain error: square root of negative value {value}")]
    NegativeSquareRoot {
        /// Rendering of the offending value.
        value: String,
    },

    /// Division by (or reciprocal of) zero.
    #[error("math domain error: division by zero")]
    DivisionByZero,

    /// A quadratic extension by a radicand that already has a root in its field.
    #[error("math domain error: {radicand} is already a square in its field")]
    DegenerateExtension {
        /// Rendering of the offending radicand.
        radicand: String,
    },
}

impl DomainError {
    /// Builds a [`DomainError::NegativeSquareRoot`] for the given value.
    pub fn negative_sqrt(value: impl ToString) -> Self {
        Self::NegativeSquareRoot {
            value: value.to_string(),
        }
    }

    /// Builds a [`DomainError::DegenerateExtension`] for the given radicand.
    pub fn degenerate(radicand: impl ToString) -> Self {
        Self::DegenerateExtension {
            radicand: radicand.to_string(),
        }
    }
}
