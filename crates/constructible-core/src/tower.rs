//! Towers of quadratic extensions of Q.
//!
//! A tower is either the rational field itself or `K[√r]` for a tower `K`
//! and a nonnegative radicand `r ∈ K` that has no square root in `K`:
//!
//! ```text
//! Q ⊂ Q[√r₁] ⊂ Q[√r₁][√r₂] ⊂ ...
//! ```
//!
//! Towers are compared by value, never by identity.

use std::fmt;
use std::sync::Arc;

use constructible_integers::DomainError;
use tracing::trace;

use crate::fmt::Leaf;
use crate::number::Constructible;

/// A chain of quadratic extensions of the rationals.
#[derive(Clone, Default)]
pub enum FieldTower {
    /// The rational field Q.
    #[default]
    Base,
    /// `base[√radicand]`.
    Extension(Arc<Extension>),
}

/// One quadratic extension step `base[√radicand]`.
///
/// The radicand lives in exactly the level being extended.
pub struct Extension {
    pub(crate) radicand: Constructible,
    pub(crate) base: FieldTower,
}

impl Extension {
    /// `radicand.field()[√radicand]`, without checking the radicand.
    ///
    /// Callers guarantee that `radicand` is nonnegative and not a square in
    /// its own field.
    pub(crate) fn adjoin(radicand: Constructible) -> Arc<Self> {
        let base = radicand.field();
        Arc::new(Self { radicand, base })
    }

    /// The value whose square root is adjoined.
    #[must_use]
    pub fn radicand(&self) -> &Constructible {
        &self.radicand
    }

    /// The field being extended.
    #[must_use]
    pub fn base(&self) -> &FieldTower {
        &self.base
    }
}

impl FieldTower {
    /// Builds `radicand.field()[√radicand]`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeSquareRoot`] for a negative radicand and
    /// [`DomainError::DegenerateExtension`] if the radicand already has a
    /// square root in its own field.
    pub fn extend(radicand: Constructible) -> Result<Self, DomainError> {
        if radicand.try_sqrt()?.is_some() {
            trace!(radicand = %radicand, "rejecting degenerate extension");
            return Err(DomainError::degenerate(&radicand));
        }
        Ok(Self::Extension(Extension::adjoin(radicand)))
    }

    /// Returns true for the rational field.
    #[must_use]
    pub fn is_base(&self) -> bool {
        matches!(self, Self::Base)
    }

    /// The radicand of the topmost extension, if any.
    #[must_use]
    pub fn radicand(&self) -> Option<&Constructible> {
        match self {
            Self::Base => None,
            Self::Extension(ext) => Some(&ext.radicand),
        }
    }

    /// The field one level down, if any.
    #[must_use]
    pub fn base(&self) -> Option<&FieldTower> {
        match self {
            Self::Base => None,
            Self::Extension(ext) => Some(&ext.base),
        }
    }

    /// Number of quadratic extensions above Q.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut field = self;
        while let Self::Extension(ext) = field {
            height += 1;
            field = &ext.base;
        }
        height
    }

    /// Degree of the tower over Q, `2^height`.
    #[must_use]
    pub fn degree(&self) -> u128 {
        1u128 << self.height()
    }

    /// The extension steps from the top of the tower down to Q.
    pub fn extensions(&self) -> impl Iterator<Item = &Arc<Extension>> {
        let mut field = self;
        std::iter::from_fn(move || match field {
            Self::Base => None,
            Self::Extension(ext) => {
                field = &ext.base;
                Some(ext)
            }
        })
    }
}

impl PartialEq for FieldTower {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Base, Self::Base) => true,
            (Self::Extension(a), Self::Extension(b)) => same_extension(a, b),
            _ => false,
        }
    }
}

impl Eq for FieldTower {}

/// Value equality of two extension steps.
pub(crate) fn same_extension(a: &Arc<Extension>, b: &Arc<Extension>) -> bool {
    // Inside a fixed tower every element has exactly one representation,
    // so structural equality of the radicands is value equality once the
    // bases agree.
    Arc::ptr_eq(a, b) || (a.base == b.base && a.radicand.same_repr(&b.radicand))
}

impl fmt::Debug for FieldTower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "Base"),
            Self::Extension(ext) => write!(f, "{ext:?}"),
        }
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Extension({:?}, {:?})", Leaf(&self.radicand), self.base)
    }
}

impl fmt::Display for FieldTower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let radicands: Vec<String> = self
            .extensions()
            .map(|ext| ext.radicand.to_string())
            .collect();
        write!(f, "Q")?;
        for r in radicands.iter().rev() {
            write!(f, "[sqrt({r})]")?;
        }
        Ok(())
    }
}
