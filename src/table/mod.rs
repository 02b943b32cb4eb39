//! In-memory columnar snapshot of game-state telemetry.

mod error;
mod loader;

use std::sync::Arc;

use arrow::{
    array::{Array, ArrayRef, BooleanArray},
    compute::filter_record_batch,
    datatypes::{Field, Schema, SchemaRef},
    record_batch::RecordBatch,
};
pub use error::{LoadError, TableError};
pub use loader::{load, load_with};

/// Ordered collection of equally long named columns.
///
/// The column set is fixed once loaded; [`Table::with_column`] is the only way
/// a derived column enters the table.
#[derive(Clone, Debug)]
pub struct Table {
    batch: RecordBatch,
}

impl Table {
    /// Wraps an existing record batch.
    #[must_use]
    pub fn from_batch(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// Arrow schema of the table.
    #[must_use]
    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    /// Column names in table order.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.batch
            .schema_ref()
            .fields()
            .iter()
            .map(|field| field.name().as_str())
            .collect()
    }

    /// Number of rows shared by every column.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ArrayRef> {
        self.batch.column_by_name(name)
    }

    /// Borrow the underlying record batch.
    #[must_use]
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Consume the table, returning the record batch.
    #[must_use]
    pub fn into_batch(self) -> RecordBatch {
        self.batch
    }

    /// Appends a derived column, replacing any column with the same name.
    pub fn with_column(self, name: &str, array: ArrayRef) -> Result<Self, TableError> {
        if array.len() != self.num_rows() {
            return Err(TableError::LengthMismatch {
                column: name.to_string(),
                expected: self.num_rows(),
                actual: array.len(),
            });
        }

        let schema = self.batch.schema();
        let field = Arc::new(Field::new(name, array.data_type().clone(), true));
        let mut fields = schema.fields().iter().cloned().collect::<Vec<_>>();
        let mut columns = self.batch.columns().to_vec();
        match schema.index_of(name) {
            Ok(idx) => {
                fields[idx] = field;
                columns[idx] = array;
            }
            Err(_) => {
                fields.push(field);
                columns.push(array);
            }
        }

        let schema = Arc::new(Schema::new_with_metadata(fields, schema.metadata().clone()));
        Ok(Self {
            batch: RecordBatch::try_new(schema, columns)?,
        })
    }

    /// Keeps the rows where `mask` is true. Null mask slots drop the row.
    pub fn select(&self, mask: &BooleanArray) -> Result<Self, TableError> {
        if mask.len() != self.num_rows() {
            return Err(TableError::LengthMismatch {
                column: "mask".to_string(),
                expected: self.num_rows(),
                actual: mask.len(),
            });
        }
        Ok(Self {
            batch: filter_record_batch(&self.batch, mask)?,
        })
    }
}

impl From<RecordBatch> for Table {
    fn from(batch: RecordBatch) -> Self {
        Self::from_batch(batch)
    }
}
