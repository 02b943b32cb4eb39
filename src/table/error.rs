use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Error returned while reading a telemetry snapshot.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("failed to open {path}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The parquet footer or pages could not be decoded.
    #[error("parquet error: {0}")]
    Parquet(#[from] ParquetError),
    /// Decoded batches could not be assembled.
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
    /// A projected column is absent from the file schema.
    #[error("column `{name}` not found in file schema")]
    UnknownColumn {
        /// Requested column name.
        name: String,
    },
}

/// Error returned by table transformations.
#[derive(Debug, Error)]
pub enum TableError {
    /// An added column or a row mask does not line up with the table rows.
    #[error("`{column}` has {actual} rows, table has {expected}")]
    LengthMismatch {
        /// Column or mask label.
        column: String,
        /// Table row count.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
    /// Arrow rejected the rebuilt batch.
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
}
