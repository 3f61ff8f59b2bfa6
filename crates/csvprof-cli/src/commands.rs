//! The profile command: load, profile, render.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use csvprof_core::profile_columns_with;
use csvprof_ingest::{describe_load_error, try_load_rows};
use csvprof_model::{ProfileOptions, ProfileReport};
use csvprof_report::{render_json, render_table, render_text};
use tracing::{info, warn};

use crate::prompt::prompt_for_path;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Per-column text listing.
    #[default]
    Text,
    /// Summary table.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Whether tables carry ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableStyling {
    /// Style when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Inputs for a profile run.
#[derive(Debug, Clone, Default)]
pub struct ProfileArgs {
    /// CSV file; prompted for when `None`.
    pub path: Option<PathBuf>,
    pub options: ProfileOptions,
    pub format: OutputFormat,
    pub table_styling: TableStyling,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileOutcome {
    /// The file had data and the report was written.
    Profiled(ProfileReport),
    /// The file was read but had no data rows.
    NoData,
}

/// Runs a profile, reading the prompt answer from `input` and writing the
/// prompt and report to `output`.
///
/// A file without data rows is not an error: the diagnostic goes to stderr
/// and [`ProfileOutcome::NoData`] is returned. Any other load failure is
/// returned as an error carrying the same diagnostic.
pub fn run_profile<R: BufRead, W: Write>(
    args: &ProfileArgs,
    input: &mut R,
    output: &mut W,
) -> Result<ProfileOutcome> {
    let path = match &args.path {
        Some(path) => path.clone(),
        None => prompt_for_path(input, output)?,
    };

    let rows = try_load_rows(&path).map_err(|err| anyhow!(describe_load_error(&err)))?;
    if rows.is_empty() {
        warn!(path = %path.display(), "nothing to profile");
        return Ok(ProfileOutcome::NoData);
    }

    let report = profile_columns_with(&rows, &args.options);
    info!(
        path = %path.display(),
        columns = report.len(),
        format = ?args.format,
        "writing report"
    );
    write_report(&report, args, output)?;
    Ok(ProfileOutcome::Profiled(report))
}

fn write_report<W: Write>(report: &ProfileReport, args: &ProfileArgs, output: &mut W) -> Result<()> {
    match args.format {
        OutputFormat::Text => render_text(report, output).context("write text report")?,
        OutputFormat::Table => {
            let mut table = render_table(report);
            apply_styling(&mut table, args.table_styling);
            writeln!(output, "{table}").context("write table report")?;
        }
        OutputFormat::Json => {
            let json = render_json(report).context("serialize report")?;
            writeln!(output, "{json}").context("write JSON report")?;
        }
    }
    output.flush().context("flush report")?;
    Ok(())
}

fn apply_styling(table: &mut Table, styling: TableStyling) {
    match styling {
        TableStyling::Auto => {}
        TableStyling::Always => {
            table.enforce_styling();
        }
        TableStyling::Never => {
            table.force_no_tty();
        }
    }
}
