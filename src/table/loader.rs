//! Parquet ingestion for telemetry snapshots.

use std::{fs::File, path::Path};

use arrow::{compute::concat_batches, record_batch::RecordBatchReader};
use parquet::arrow::{arrow_reader::ParquetRecordBatchReaderBuilder, ProjectionMask};

use super::{LoadError, Table};
use crate::{observability::log_info, option::LoadOptions};

/// Read a whole parquet file into a single in-memory [`Table`].
pub fn load(path: impl AsRef<Path>) -> Result<Table, LoadError> {
    load_with(&LoadOptions::from(path.as_ref()))
}

/// Read a parquet file using explicit [`LoadOptions`].
pub fn load_with(options: &LoadOptions) -> Result<Table, LoadError> {
    let path = options.file_path();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut builder =
        ParquetRecordBatchReaderBuilder::try_new(file)?.with_batch_size(options.batch_size);

    if let Some(names) = &options.projection {
        let file_schema = builder.schema().clone();
        let mut roots = Vec::with_capacity(names.len());
        for name in names {
            let idx = file_schema
                .index_of(name)
                .map_err(|_| LoadError::UnknownColumn { name: name.clone() })?;
            roots.push(idx);
        }
        let mask = ProjectionMask::roots(builder.parquet_schema(), roots);
        builder = builder.with_projection(mask);
    }

    let reader = builder.build()?;
    let schema = reader.schema();
    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    let batch = concat_batches(&schema, &batches)?;

    log_info!(
        component = "loader",
        event = "table_loaded",
        path = %path.display(),
        batches = batches.len(),
        rows = batch.num_rows(),
        columns = batch.num_columns(),
    );

    Ok(Table::from_batch(batch))
}
