//! Joining two field towers into their smallest common extension.
//!
//! Given towers `F₁` and `F₂`, [`join_fields`] builds a tower `F` together
//! with value-preserving embeddings `F₁ → F` and `F₂ → F`.
//!
//! # Algorithm
//!
//! Recursion on the height of `F₂ = B₂[√r]`:
//!
//! 1. If either tower is Q, the other one is the join; rationals are lifted.
//! 2. Otherwise join `F₁` with `B₂` into `J`, and look for a square root `s`
//!    of `r` inside `J`.
//!    - If `s` exists, `F = J` and `a + b√r ↦ a + b·s`.
//!    - If not, `F = J[√r]`; elements of `F₁` get a zero sqrt component,
//!      elements of `F₂` are mapped componentwise.
//!
//! This is what collapses `√2·√3` onto `√6`: joining `Q[√6]` with
//! `Q[√2][√3]` finds `√3 = √6·√2/2` inside `Q[√6][√2]` and stops there.

use std::sync::Arc;

use constructible_integers::Rational;
use num_traits::Zero;
use tracing::trace;

use crate::number::Constructible;
use crate::tower::{Extension, FieldTower};

/// A value-preserving map from one tower into a larger one.
#[derive(Clone, Debug)]
pub enum Embedding {
    /// The source and target towers are the same.
    Identity,
    /// The source is Q; rationals are lifted into `target`.
    Lift {
        /// The target tower.
        target: FieldTower,
    },
    /// `x ↦ inner(x) + 0·√r` in `target = J[√r]`.
    AppendZero {
        /// Embedding of the source into `J`.
        inner: Box<Embedding>,
        /// The target extension.
        target: Arc<Extension>,
    },
    /// `a + b√r ↦ inner(a) + inner(b)·√r'` in `target = J[√r']`, with `r' = inner(r)`.
    Componentwise {
        /// Embedding of the source's base into `J`.
        inner: Box<Embedding>,
        /// The target extension.
        target: Arc<Extension>,
    },
    /// `a + b√r ↦ inner(a) + inner(b)·root`, where `root² = inner(r)`.
    ViaRoot {
        /// Embedding of the source's base into the target.
        inner: Box<Embedding>,
        /// The nonnegative square root of the embedded radicand.
        root: Constructible,
    },
}

impl Embedding {
    fn target(&self) -> Option<FieldTower> {
        match self {
            Self::Identity => None,
            Self::Lift { target } => Some(target.clone()),
            Self::AppendZero { target, .. } | Self::Componentwise { target, .. } => {
                Some(FieldTower::Extension(Arc::clone(target)))
            }
            Self::ViaRoot { root, .. } => Some(root.field()),
        }
    }

    /// Maps an element of the source tower into the target tower.
    #[must_use]
    pub fn apply(&self, x: &Constructible) -> Constructible {
        if let Some(q) = x.as_rational() {
            return match self.target() {
                Some(target) => Constructible::lift_rational(q, &target),
                None => x.clone(),
            };
        }

        match self {
            Self::Identity | Self::Lift { .. } => x.clone(),
            Self::AppendZero { inner, target } => {
                let zero = Constructible::lift_rational(&Rational::zero(), &target.base);
                Constructible::quadratic(inner.apply(x), zero, Arc::clone(target))
            }
            Self::Componentwise { inner, target } => match x.components() {
                Some((a, b)) => {
                    Constructible::quadratic(inner.apply(a), inner.apply(b), Arc::clone(target))
                }
                None => x.clone(),
            },
            Self::ViaRoot { inner, root } => match x.components() {
                Some((a, b)) => inner.apply(a).add_ref(&inner.apply(b).mul_ref(root)),
                None => x.clone(),
            },
        }
    }
}

/// The smallest common extension of two towers.
#[derive(Clone, Debug)]
pub struct FieldJoin {
    /// The joined tower.
    pub field: FieldTower,
    /// Embedding of the first tower.
    pub left: Embedding,
    /// Embedding of the second tower.
    pub right: Embedding,
}

/// Joins two towers.
///
/// Recursion depth is the height of `field2`.
#[must_use]
pub fn join_fields(field1: &FieldTower, field2: &FieldTower) -> FieldJoin {
    if field1 == field2 {
        return FieldJoin {
            field: field1.clone(),
            left: Embedding::Identity,
            right: Embedding::Identity,
        };
    }

    let ext2 = match (field1, field2) {
        (FieldTower::Base, _) => {
            return FieldJoin {
                field: field2.clone(),
                left: Embedding::Lift {
                    target: field2.clone(),
                },
                right: Embedding::Identity,
            };
        }
        (_, FieldTower::Base) => {
            return FieldJoin {
                field: field1.clone(),
                left: Embedding::Identity,
                right: Embedding::Lift {
                    target: field1.clone(),
                },
            };
        }
        (_, FieldTower::Extension(ext2)) => ext2,
    };

    let below = join_fields(field1, &ext2.base);
    let radicand = below.right.apply(&ext2.radicand);

    // Radicands are nonnegative, so looking for a root cannot fail.
    if let Some(root) = radicand.root_in_field() {
        trace!(radicand = %radicand, root = %root, "radicand already has a root in the join");
        return FieldJoin {
            field: below.field,
            left: below.left,
            right: Embedding::ViaRoot {
                inner: Box::new(below.right),
                root,
            },
        };
    }

    trace!(radicand = %radicand, height = below.field.height() + 1, "join grows by one level");
    let ext = Arc::new(Extension {
        radicand,
        base: below.field,
    });
    FieldJoin {
        field: FieldTower::Extension(Arc::clone(&ext)),
        left: Embedding::AppendZero {
            inner: Box::new(below.left),
            target: Arc::clone(&ext),
        },
        right: Embedding::Componentwise {
            inner: Box::new(below.right),
            target: ext,
        },
    }
}
