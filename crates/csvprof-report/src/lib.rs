//! Profile report rendering.
//!
//! This crate turns a [`ProfileReport`] into output for people or tools:
//!
//! - **Text**: the line-oriented per-column listing
//! - **Table**: a one-row-per-column summary table
//! - **JSON**: the report structure, pretty-printed
//!
//! Renderers only format fields; they never compute statistics.
//!
//! [`ProfileReport`]: csvprof_model::ProfileReport

mod json;
mod table;
mod text;

pub use json::render_json;
pub use table::render_table;
pub use text::{NO_VALUES_PLACEHOLDER, SEPARATOR, render_text, render_text_to_string};
