//! Loaders used at the user-facing boundary.

use std::path::Path;

use csvprof_model::Row;
use tracing::{error, warn};

use crate::error::{IngestError, Result};

use super::reader::read_csv_rows;

/// User-facing diagnostic for a failed or empty load.
pub fn describe_load_error(err: &IngestError) -> String {
    let path = err.path().display();
    match err {
        IngestError::FileNotFound { .. } => format!("File not found: {path}"),
        IngestError::EmptyCsv { .. } => format!("Empty file: {path} has no data rows"),
        _ => format!("Error reading {path}: {}", err.detail()),
    }
}

/// Loads rows from `path`, absorbing only the empty-input case.
///
/// A file without data rows prints its diagnostic to stderr and yields an
/// empty vector. Any other failure is logged and returned; the caller
/// reports it with [`describe_load_error`].
pub fn try_load_rows(path: &Path) -> Result<Vec<Row>> {
    match read_csv_rows(path) {
        Ok(rows) => Ok(rows),
        Err(err) if err.is_empty_input() => {
            warn!(path = %err.path().display(), "CSV file has no data rows");
            eprintln!("{}", describe_load_error(&err));
            Ok(Vec::new())
        }
        Err(err) => {
            error!(path = %err.path().display(), error = %err, "failed to load CSV file");
            Err(err)
        }
    }
}

/// Loads rows from `path`, never failing.
///
/// Missing files, read or parse errors and files without data rows all
/// print a diagnostic to stderr and yield an empty vector.
pub fn load_rows(path: &Path) -> Vec<Row> {
    try_load_rows(path).unwrap_or_else(|err| {
        eprintln!("{}", describe_load_error(&err));
        Vec::new()
    })
}
