//! Aggregations over a selected table.

use arrow::{
    array::{Array, AsArray},
    compute::{cast, sum},
    datatypes::{DataType, Float64Type},
    error::ArrowError,
};
use thiserror::Error;

use crate::table::Table;

/// Error returned by aggregation helpers.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The table has no column with the requested name.
    #[error("column `{name}` does not exist")]
    MissingColumn {
        /// Requested column.
        name: String,
    },
    /// The column is not numeric.
    #[error("column `{name}` of type {data_type} is not numeric")]
    NotNumeric {
        /// Requested column.
        name: String,
        /// Arrow type of the column.
        data_type: DataType,
    },
    /// An Arrow kernel failed.
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

/// Arithmetic mean of a numeric column, skipping nulls.
///
/// Returns `None` when the column holds no non-null value.
pub fn mean(table: &Table, column: &str) -> Result<Option<f64>, AnalysisError> {
    let array = table
        .column(column)
        .ok_or_else(|| AnalysisError::MissingColumn {
            name: column.to_string(),
        })?;
    if !array.data_type().is_numeric() {
        return Err(AnalysisError::NotNumeric {
            name: column.to_string(),
            data_type: array.data_type().clone(),
        });
    }

    let values = cast(array, &DataType::Float64)?;
    let values = values.as_primitive::<Float64Type>();
    let count = values.len() - values.null_count();
    Ok(sum(values).map(|total| total / count as f64))
}
