//! CSV file reading into row records.

use std::path::Path;

use csv::ReaderBuilder;
use csvprof_model::{CellValue, Row};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

use super::header::column_names;

/// Reads a CSV file into rows keyed by the header names.
///
/// - The first record is the header; a UTF-8 BOM and surrounding whitespace
///   are stripped from column names
/// - Records shorter than the header get `None` for the trailing columns,
///   fields beyond the header are ignored
/// - Cell text is kept verbatim
///
/// A file without data rows is reported as [`IngestError::EmptyCsv`].
pub fn read_csv_rows(path: &Path) -> Result<Vec<Row>> {
    debug!(path = %path.display(), "opening CSV file");

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::from_csv(path.to_path_buf(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| IngestError::from_csv(path.to_path_buf(), e))?
        .clone();
    let columns = column_names(&headers, path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::from_csv(path.to_path_buf(), e))?;
        let mut row = Row::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            let value = record.get(idx).map(|field| CellValue::Text(field.to_string()));
            row.insert(column.as_str(), value);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    info!(
        path = %path.display(),
        rows = rows.len(),
        columns = columns.len(),
        "loaded CSV file"
    );
    Ok(rows)
}
