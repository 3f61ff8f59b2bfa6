//! Error types for CSV ingestion.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a CSV file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV or invalid UTF-8.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Header row present but every column name is blank.
    #[error("could not detect header row in {path}")]
    NoHeader { path: PathBuf },

    /// CSV file has no data rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

impl IngestError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::FileNotFound { path }
            | Self::FileRead { path, .. }
            | Self::CsvParse { path, .. }
            | Self::NoHeader { path }
            | Self::EmptyCsv { path } => path,
        }
    }

    /// Returns true when the file was read but holds no data rows.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyCsv { .. })
    }

    /// Underlying cause without the path prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::FileNotFound { .. } => "file not found".to_string(),
            Self::FileRead { source, .. } => source.to_string(),
            Self::CsvParse { source, .. } => source.to_string(),
            Self::NoHeader { .. } => "no header row".to_string(),
            Self::EmptyCsv { .. } => "no data rows".to_string(),
        }
    }

    /// Classifies a `csv` crate error, separating I/O from parse failures.
    ///
    /// I/O failures keep their `io::ErrorKind` and wrap the original error.
    pub(crate) fn from_csv(path: PathBuf, err: csv::Error) -> Self {
        let io_kind = match err.kind() {
            csv::ErrorKind::Io(io) => Some(io.kind()),
            _ => None,
        };
        match io_kind {
            Some(kind) => Self::from_io(path, std::io::Error::new(kind, err)),
            None => Self::CsvParse { path, source: err },
        }
    }

    /// Maps an I/O error, keeping "not found" distinct.
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
        assert_eq!(err.path(), Path::new("/path/to/file.csv"));
    }

    #[test]
    fn test_empty_input_flag() {
        let empty = IngestError::EmptyCsv {
            path: PathBuf::from("e.csv"),
        };
        let missing = IngestError::NoHeader {
            path: PathBuf::from("e.csv"),
        };
        assert!(empty.is_empty_input());
        assert!(!missing.is_empty_input());
        assert_eq!(missing.detail(), "no header row");
    }

    #[test]
    fn test_not_found_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::from_io(PathBuf::from("x.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_other_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IngestError::from_io(PathBuf::from("x.csv"), io);
        assert!(matches!(err, IngestError::FileRead { .. }));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_csv_io_error_is_classified() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::from_csv(PathBuf::from("x.csv"), csv::Error::from(io));
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let mut reader = csv::ReaderBuilder::new().from_reader(&b"a\n\xff\n"[..]);
        let parse = reader.records().find_map(|record| record.err()).unwrap();
        let err = IngestError::from_csv(PathBuf::from("bad.csv"), parse);

        assert!(matches!(err, IngestError::CsvParse { .. }));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.downcast_ref::<csv::Error>().is_some());
        assert_eq!(err.detail(), source.to_string());
        assert!(err.to_string().starts_with("failed to parse CSV bad.csv: "));
    }
}
