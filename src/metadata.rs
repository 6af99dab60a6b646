use anyhow::Result;
use arrow::datatypes::SchemaRef;
use std::path::{Path, PathBuf};

/// Reads structural information about a file without touching its rows.
pub trait SchemaSource {
    fn schema(&self) -> Result<SchemaRef>;

    /// Row count recorded in the file footer.
    fn total_rows(&self) -> Result<u64>;
}

/// Footer reader backed by the `parquet` crate's arrow integration.
#[derive(Debug, Clone)]
pub struct ParquetMetadata {
    path: PathBuf,
}

impl ParquetMetadata {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[cfg(feature = "parquet")]
impl SchemaSource for ParquetMetadata {
    fn schema(&self) -> Result<SchemaRef> {
        use anyhow::Context;
        use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
        use std::fs::File;

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open file: {}", self.path.display()))?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
        log::debug!(
            "Read arrow schema with {} fields from {}",
            builder.schema().fields().len(),
            self.path.display()
        );
        Ok(builder.schema().clone())
    }

    fn total_rows(&self) -> Result<u64> {
        use anyhow::Context;
        use parquet::file::reader::{FileReader, SerializedFileReader};
        use std::fs::File;

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open file: {}", self.path.display()))?;
        let reader = SerializedFileReader::new(file)?;
        let num_rows = reader.metadata().file_metadata().num_rows();
        log::debug!(
            "Footer of {} records {} rows in {} row groups",
            self.path.display(),
            num_rows,
            reader.metadata().num_row_groups()
        );
        u64::try_from(num_rows)
            .map_err(|_| anyhow::anyhow!("Negative row count in file metadata: {}", num_rows))
    }
}

#[cfg(not(feature = "parquet"))]
impl SchemaSource for ParquetMetadata {
    fn schema(&self) -> Result<SchemaRef> {
        Err(crate::error::InspectError::MissingDependency.into())
    }

    fn total_rows(&self) -> Result<u64> {
        Err(crate::error::InspectError::MissingDependency.into())
    }
}
