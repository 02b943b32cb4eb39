#![deny(missing_docs)]
//! Boundary model for game-state filtering.
//!
//! A [`Boundary`] is a per-column constraint of one of three kinds: an
//! inclusive range, a set of allowed values, or a precomputed row selector.
//! [`Boundaries`] keeps at most one boundary per column. Literals are plain
//! scalars that the evaluator casts to the target Arrow column type.

mod core;

pub use crate::core::{
    Boundaries, Boundary, BoundaryKind, ScalarValue, ScalarValueRef, SIDE_COLUMN, SITE_COLUMN,
    TEAM_COLUMN,
};
