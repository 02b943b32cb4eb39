use arrow::{datatypes::DataType, error::ArrowError};
use gamestate_predicate::ScalarValue;
use thiserror::Error;

/// Error returned when boundaries cannot be evaluated against a table.
///
/// Any error aborts the whole evaluation; no partial mask is produced.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Evaluation was requested before a table was loaded.
    #[error("table not loaded; call read_data() before checking boundaries")]
    NotReady,
    /// A selector does not cover exactly one slot per table row.
    #[error("selector `{column}` has {actual} rows, table has {expected}")]
    LengthMismatch {
        /// Name the selector was registered under.
        column: String,
        /// Table row count.
        expected: usize,
        /// Selector length.
        actual: usize,
    },
    /// The boundary carries a kind this evaluator does not know how to apply.
    #[error("boundary on `{column}` has an unrecognised kind")]
    UnknownConstraintKind {
        /// Column the boundary was registered for.
        column: String,
    },
    /// Range and set boundaries cannot be applied to nested columns.
    #[error("column `{column}` of type {data_type} cannot be compared against literals")]
    UnsupportedColumn {
        /// Column the boundary was registered for.
        column: String,
        /// Arrow type of that column.
        data_type: DataType,
    },
    /// A literal could not be represented in the column's type.
    #[error("literal {value} cannot be compared with column `{column}`: {source}")]
    Coercion {
        /// Column the boundary was registered for.
        column: String,
        /// Offending literal.
        value: ScalarValue,
        /// Cast failure reported by Arrow.
        #[source]
        source: ArrowError,
    },
    /// An Arrow compute kernel failed.
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
}
