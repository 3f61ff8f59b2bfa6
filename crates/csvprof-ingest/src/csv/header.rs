//! CSV header parsing and normalization.

use std::path::Path;

use csv::StringRecord;

use crate::error::{IngestError, Result};

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Converts the raw header record into column names.
///
/// An empty record means the file has no content at all. A record whose
/// names are all blank is rejected as headerless.
pub fn column_names(record: &StringRecord, path: &Path) -> Result<Vec<String>> {
    if record.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let columns: Vec<String> = record.iter().map(normalize_header).collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }

    Ok(columns)
}
