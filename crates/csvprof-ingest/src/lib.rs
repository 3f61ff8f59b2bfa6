//! CSV data ingestion.
//!
//! Reads a comma-delimited UTF-8 file with a header row into [`Row`] records.
//!
//! Three entry points are provided:
//!
//! - [`read_csv_rows`] returns a typed [`IngestError`] on failure
//! - [`try_load_rows`] treats a file without data rows as empty and returns
//!   every other failure
//! - [`load_rows`] absorbs every failure, prints a diagnostic and returns an
//!   empty vector, so callers only ever deal with "rows or no rows"
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use csvprof_ingest::load_rows;
//!
//! let rows = load_rows(Path::new("data/customers.csv"));
//! ```
//!
//! [`Row`]: csvprof_model::Row

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{describe_load_error, load_rows, read_csv_rows, try_load_rows};
