use polars::prelude::PolarsError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that end an inspection. Each one is reported once on stderr.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Error: File not found at {}", .0.display())]
    FileNotFound(PathBuf),

    /// Polars could not parse the file content
    #[error("Polars Compute Error: {0}")]
    Compute(String),

    #[error("Error: Polars reported no data found for path {}", .0.display())]
    NoData(PathBuf),

    /// The binary was built without a reader for the file format
    #[error(
        "Error: Make sure parquet-peek was built with the 'parquet' feature enabled.\n\
         Run: cargo install parquet-peek --features parquet"
    )]
    MissingDependency,

    #[error("An unexpected error occurred: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl InspectError {
    /// Sort a Polars failure into the categories above.
    pub fn from_polars(err: PolarsError, path: &Path) -> Self {
        match err {
            PolarsError::IO { error, .. } if error.kind() == io::ErrorKind::NotFound => {
                InspectError::FileNotFound(path.to_path_buf())
            }
            PolarsError::ComputeError(msg) => InspectError::Compute(msg.to_string()),
            PolarsError::NoData(_) => InspectError::NoData(path.to_path_buf()),
            other => InspectError::Unexpected(anyhow::Error::new(other)),
        }
    }

    pub fn from_io(err: io::Error, path: &Path) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            InspectError::FileNotFound(path.to_path_buf())
        } else {
            InspectError::Unexpected(anyhow::Error::new(err).context(format!(
                "Failed to open file: {}",
                path.display()
            )))
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<io::Error> for InspectError {
    fn from(err: io::Error) -> Self {
        InspectError::Unexpected(err.into())
    }
}
