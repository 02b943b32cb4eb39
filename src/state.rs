use std::sync::Arc;

use arrow::array::{BooleanArray, ListArray};
use gamestate_predicate::Boundaries;
use thiserror::Error;

use crate::{
    eval::{evaluate, EvalError},
    observability::log_info,
    option::LoadOptions,
    projection::{self, ProjectionError, WEAPON_CLASS_COLUMN},
    table::{load_with, LoadError, Table, TableError},
};

/// Error returned by [`GameState`] operations.
#[derive(Debug, Error)]
pub enum GameStateError {
    /// Reading the snapshot failed.
    #[error("load error: {0}")]
    Load(#[from] LoadError),
    /// Boundary evaluation failed.
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
    /// An inventory projection failed.
    #[error("projection error: {0}")]
    Projection(#[from] ProjectionError),
    /// A derived column could not be attached.
    #[error("table error: {0}")]
    Table(#[from] TableError),
}

/// A telemetry snapshot on disk, its loaded table, and the active boundaries.
///
/// Nothing is read until [`GameState::read_data`] is called.
#[derive(Debug)]
pub struct GameState {
    options: LoadOptions,
    table: Option<Table>,
    boundaries: Boundaries,
}

impl GameState {
    /// Creates a session for the snapshot described by `options`.
    pub fn new(options: impl Into<LoadOptions>) -> Self {
        Self {
            options: options.into(),
            table: None,
            boundaries: Boundaries::new(),
        }
    }

    /// Creates a session around an already materialised table.
    pub fn from_table(options: impl Into<LoadOptions>, table: Table) -> Self {
        Self {
            options: options.into(),
            table: Some(table),
            boundaries: Boundaries::new(),
        }
    }

    /// Reads the snapshot, replacing any previously loaded table.
    pub fn read_data(&mut self) -> Result<&Table, GameStateError> {
        let table = load_with(&self.options)?;
        Ok(self.table.insert(table))
    }

    /// The loaded table, if [`GameState::read_data`] has run.
    #[must_use]
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Column names of the loaded table.
    #[must_use]
    pub fn columns(&self) -> Option<Vec<&str>> {
        self.table.as_ref().map(Table::columns)
    }

    /// Active boundaries.
    #[must_use]
    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    /// Mutable access for registering or clearing boundaries.
    pub fn boundaries_mut(&mut self) -> &mut Boundaries {
        &mut self.boundaries
    }

    /// Evaluates the active boundaries against the loaded table.
    ///
    /// # Errors
    /// [`EvalError::NotReady`] before [`GameState::read_data`]; otherwise any
    /// error from [`evaluate`].
    pub fn check_boundaries(&self) -> Result<BooleanArray, EvalError> {
        let table = self.table.as_ref().ok_or(EvalError::NotReady)?;
        evaluate(table, &self.boundaries)
    }

    /// Evaluates the active boundaries and returns the matching rows.
    pub fn filtered(&self) -> Result<Table, GameStateError> {
        let mask = self.check_boundaries()?;
        let table = self.table.as_ref().ok_or(EvalError::NotReady)?;
        Ok(table.select(&mask)?)
    }

    /// Projects weapon classes from `inventory` and appends them as the
    /// `weapon_class` column.
    pub fn extract_weapon_classes(&mut self) -> Result<Arc<ListArray>, GameStateError> {
        let table = self.table.as_ref().ok_or(EvalError::NotReady)?;
        let classes = Arc::new(projection::extract_weapon_classes(table)?);
        let table = table
            .clone()
            .with_column(WEAPON_CLASS_COLUMN, classes.clone())?;
        log_info!(
            component = "state",
            event = "derived_column_added",
            column = WEAPON_CLASS_COLUMN,
            rows = table.num_rows(),
        );
        self.table = Some(table);
        Ok(classes)
    }
}
