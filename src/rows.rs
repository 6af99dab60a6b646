use crate::error::InspectError;
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};

/// Reads rows from the start of a file.
pub trait RowSource {
    /// Up to `num_rows` rows from row 0. Fewer come back when the file is shorter.
    fn head(&self, num_rows: usize) -> Result<DataFrame, InspectError>;
}

/// Row reader backed by Polars' parquet reader.
#[derive(Debug, Clone)]
pub struct PolarsRows {
    path: PathBuf,
}

impl PolarsRows {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[cfg(feature = "parquet")]
impl RowSource for PolarsRows {
    fn head(&self, num_rows: usize) -> Result<DataFrame, InspectError> {
        use polars::prelude::{ParquetReader, SerReader};
        use std::fs::File;

        let file = File::open(&self.path).map_err(|e| InspectError::from_io(e, &self.path))?;
        let df = ParquetReader::new(file)
            .with_slice(Some((0, num_rows)))
            .finish()
            .map_err(|e| InspectError::from_polars(e, &self.path))?;

        log::debug!(
            "Read {} of at most {} rows from {}",
            df.height(),
            num_rows,
            self.path.display()
        );
        Ok(df)
    }
}

#[cfg(not(feature = "parquet"))]
impl RowSource for PolarsRows {
    fn head(&self, _num_rows: usize) -> Result<DataFrame, InspectError> {
        Err(InspectError::MissingDependency)
    }
}

#[cfg(all(test, feature = "parquet"))]
mod tests {
    use super::*;
    use polars::prelude::*;
    use std::fs::File;

    fn numbers_file(dir: &tempfile::TempDir, rows: i64) -> PathBuf {
        let path = dir.path().join("numbers.parquet");
        let mut df = df!(
            "id" => (0..rows).collect::<Vec<_>>(),
            "label" => (0..rows).map(|i| format!("row-{}", i)).collect::<Vec<_>>(),
        )
        .unwrap();
        ParquetWriter::new(File::create(&path).unwrap())
            .finish(&mut df)
            .unwrap();
        path
    }

    #[test]
    fn returns_requested_number_of_rows() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = numbers_file(&dir, 10);

        let df = PolarsRows::new(&path).head(4).unwrap();
        assert_eq!(df.height(), 4);
        let ids: Vec<Option<i64>> = df
            .column("id")
            .unwrap()
            .as_materialized_series()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(ids, [Some(0), Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn short_file_returns_all_rows() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = numbers_file(&dir, 2);

        let df = PolarsRows::new(&path).head(50).unwrap();
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn zero_rows_requested_is_not_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = numbers_file(&dir, 5);

        let df = PolarsRows::new(&path).head(0).unwrap();
        assert_eq!(df.height(), 0);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.parquet");

        let err = PolarsRows::new(&path).head(3).unwrap_err();
        assert!(matches!(err, InspectError::FileNotFound(p) if p == path));
    }

    #[test]
    fn garbage_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("garbage.parquet");
        std::fs::write(&path, b"PAR1 but not really").unwrap();

        let err = PolarsRows::new(&path).head(3).unwrap_err();
        assert!(matches!(
            err,
            InspectError::Compute(_) | InspectError::Unexpected(_)
        ));
    }
}
