//! Column profiling core.
//!
//! Two pieces live here:
//!
//! - **Missing-value classification**: [`is_missing`] decides whether a cell
//!   is a real observation or a missing marker
//! - **Column profiling**: [`profile_columns`] aggregates counts, distinct
//!   values and ranked top values for every column of a row set
//!
//! # Example
//!
//! ```
//! use csvprof_core::profile_columns;
//! use csvprof_model::{MissingTokenSet, Row};
//!
//! let rows: Vec<Row> = vec![
//!     vec![("a", Some("1"))].into_iter().collect(),
//!     vec![("a", Some("NA"))].into_iter().collect(),
//! ];
//! let report = profile_columns(&rows, &MissingTokenSet::default());
//! assert_eq!(report.columns[0].missing_count, 1);
//! ```

mod classify;
mod profile;

pub use classify::{is_missing, normalize};
pub use profile::{ColumnAccumulator, profile_columns, profile_columns_with, profile_rows_default};
