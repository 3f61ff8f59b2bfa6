//! CLI argument definitions for the CSV column profiler.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use csvprof_model::DEFAULT_TOP_N;

#[derive(Parser)]
#[command(
    name = "csvprof",
    version,
    about = "Profile the columns of a CSV file",
    long_about = "Profile the columns of a CSV file.\n\n\
                  Reports row counts, missing values, cardinality and the most\n\
                  frequent values of every column. Prompts for the file when no\n\
                  PATH is given."
)]
pub struct Cli {
    /// CSV file to profile (prompted for when omitted).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Treat TOKEN as missing (repeatable, replaces the default set).
    ///
    /// Matching ignores case and surrounding whitespace. Pass an empty
    /// token (`--missing-token ""`) to keep blank cells missing.
    #[arg(long = "missing-token", value_name = "TOKEN")]
    pub missing_tokens: Vec<String>,

    /// Only null and blank cells count as missing.
    #[arg(long = "strict-missing", conflicts_with = "missing_tokens")]
    pub strict_missing: bool,

    /// Number of most frequent values listed per column (at least 1).
    #[arg(
        long = "top",
        value_name = "N",
        default_value_t = DEFAULT_TOP_N,
        value_parser = parse_top
    )]
    pub top: usize,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

/// Parses `--top`, rejecting zero.
fn parse_top(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(top) => Ok(top),
        Err(err) => Err(err.to_string()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
