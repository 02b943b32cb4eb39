use std::path::{Path, PathBuf};

/// Default number of rows decoded per parquet batch.
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Options controlling how a telemetry snapshot is read from disk.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub(crate) path: PathBuf,
    pub(crate) batch_size: usize,
    pub(crate) projection: Option<Vec<String>>,
}

impl<P> From<P> for LoadOptions
where
    P: Into<PathBuf>,
{
    fn from(path: P) -> Self {
        LoadOptions {
            path: path.into(),
            batch_size: DEFAULT_BATCH_SIZE,
            projection: None,
        }
    }
}

impl LoadOptions {
    /// Point the options at a different file.
    pub fn path(self, path: impl Into<PathBuf>) -> Self {
        LoadOptions {
            path: path.into(),
            ..self
        }
    }

    /// Rows decoded per parquet batch; values below one are clamped to one.
    pub fn batch_size(self, batch_size: usize) -> Self {
        LoadOptions {
            batch_size: batch_size.max(1),
            ..self
        }
    }

    /// Read only the named top-level columns, in file order.
    pub fn projection<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LoadOptions {
            projection: Some(columns.into_iter().map(Into::into).collect()),
            ..self
        }
    }
}

impl LoadOptions {
    pub(crate) fn file_path(&self) -> &Path {
        &self.path
    }
}
