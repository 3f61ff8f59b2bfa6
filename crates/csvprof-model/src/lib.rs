//! Data model for CSV column profiling.
//!
//! This crate defines the types shared by the loader, the profiler and the
//! renderers:
//!
//! - **Rows**: [`Row`] and [`CellValue`], the immutable input records
//! - **Configuration**: [`MissingTokenSet`] and [`ProfileOptions`]
//! - **Reports**: [`ColumnReport`], [`ProfileReport`] and [`TopValue`]

mod options;
mod report;
mod row;

pub use options::{DEFAULT_MISSING_TOKENS, DEFAULT_TOP_N, MissingTokenSet, ProfileOptions};
pub use report::{ColumnReport, ProfileReport, TopValue};
pub use row::{CellValue, Row};
