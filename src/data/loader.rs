//! Metadata CSV Loader Module
//! Handles loading the CORD-19 metadata file using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to parse CSV: {0}")]
    Malformed(#[from] PolarsError),
}

/// Holds the loaded (and later cleaned) metadata DataFrame for the app.
pub struct MetadataLoader {
    df: Option<DataFrame>,
}

impl Default for MetadataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Read a metadata CSV into a DataFrame.
    ///
    /// Column types are inferred from the first 10k rows; `max_rows` caps the
    /// number of data rows read. Parse failures (ragged rows, bad encoding)
    /// abort the read with no partial result.
    pub fn read_csv(path: &Path, max_rows: Option<usize>) -> Result<DataFrame, LoaderError> {
        if !path.exists() {
            return Err(LoaderError::FileNotFound(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_n_rows(max_rows)
            .finish()?
            .collect()?;

        Ok(df)
    }

    /// Get a reference to the held DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Get the number of rows in the held DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Set DataFrame directly (used for async loading)
    pub fn set_dataframe(&mut self, df: DataFrame) {
        self.df = Some(df);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("metadata.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const SAMPLE: &str = "\
cord_uid,title,abstract,journal,publish_time
a1,Covid Vaccine Trial,A short abstract here,Nature,2020-05-01
b2,Another Covid Study,,Nature,bad-date
c3,Flu Season Review,Short,Lancet,2019-11-20
";

    #[test]
    fn missing_file_is_reported() {
        let err = MetadataLoader::read_csv(Path::new("/no/such/metadata.csv"), None).unwrap_err();
        assert!(matches!(err, LoaderError::FileNotFound(_)));
    }

    #[test]
    fn loads_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, SAMPLE);

        let df = MetadataLoader::read_csv(&path, None).unwrap();
        assert_eq!(df.height(), 3);
        let names: Vec<&str> = df.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            ["cord_uid", "title", "abstract", "journal", "publish_time"]
        );
    }

    #[test]
    fn row_cap_limits_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, SAMPLE);

        let df = MetadataLoader::read_csv(&path, Some(2)).unwrap();
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "cord_uid,title\na1,one\nb2,two,extra,fields\n");

        let err = MetadataLoader::read_csv(&path, None).unwrap_err();
        assert!(matches!(err, LoaderError::Malformed(_)));
    }
}
