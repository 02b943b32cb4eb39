#![deny(missing_docs)]
//! Boundary filtering over columnar game-state telemetry.
//!
//! A snapshot of per-tick player records is loaded from parquet into an Arrow
//! [`Table`]. Callers register per-column [`Boundary`] values (ranges, sets of
//! allowed values, or precomputed row selectors) in a [`Boundaries`] registry,
//! and [`evaluate`] reduces them to a single row mask. Applying the mask and
//! aggregating the selected rows is left to the caller, with helpers in
//! [`analysis`].

mod observability;

#[cfg(test)]
mod test_util;

/// Downstream aggregations over selected rows.
pub mod analysis;

/// Boundary evaluation into row masks.
pub mod eval;

/// Options for reading snapshots.
pub mod option;

/// Inventory projections that feed selector boundaries.
pub mod projection;

/// Session object tying a snapshot to its boundaries.
pub mod state;

/// In-memory table and parquet loader.
pub mod table;

pub use gamestate_predicate::{
    Boundaries, Boundary, BoundaryKind, ScalarValue, ScalarValueRef, SIDE_COLUMN, SITE_COLUMN,
    TEAM_COLUMN,
};

pub use crate::{
    eval::{count_selected, evaluate, EvalError},
    option::LoadOptions,
    state::{GameState, GameStateError},
    table::{load, load_with, LoadError, Table, TableError},
};
