//! CSV reading utilities.

mod header;
mod loader;
mod reader;

pub use loader::{describe_load_error, load_rows, try_load_rows};
pub use reader::read_csv_rows;
