//! Interactive path prompt.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Text shown when asking for the input file.
pub const PATH_PROMPT: &str = "Enter CSV path: ";

/// Asks for a CSV path on `output` and reads one line from `input`.
///
/// Surrounding whitespace and a matching pair of quotes (as left by
/// drag-and-drop in most terminals) are removed.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "{PATH_PROMPT}").context("write prompt")?;
    output.flush().context("flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("read CSV path")?;

    let path = clean_path_input(&line);
    if path.is_empty() {
        bail!("no CSV path provided");
    }
    Ok(PathBuf::from(path))
}

fn clean_path_input(line: &str) -> &str {
    let trimmed = line.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    trimmed
}
