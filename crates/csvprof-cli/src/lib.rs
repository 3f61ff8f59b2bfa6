//! CLI library components for the CSV column profiler.

pub mod commands;
pub mod logging;
pub mod prompt;
