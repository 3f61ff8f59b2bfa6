//! Line-oriented text listing.

use std::io::{self, Write};

use csvprof_model::{ColumnReport, ProfileReport};

/// Line printed before each column block.
pub const SEPARATOR: &str = "------------------------------";

/// Line printed instead of the ranked list when a column has no present values.
pub const NO_VALUES_PLACEHOLDER: &str = "  (no non-missing values)";

/// Writes the per-column listing to `writer`.
pub fn render_text<W: Write>(report: &ProfileReport, writer: &mut W) -> io::Result<()> {
    if report.is_empty() {
        return writeln!(writer, "No columns to profile.");
    }
    for column in report {
        write_column(column, writer)?;
    }
    Ok(())
}

/// Renders the per-column listing into a string.
pub fn render_text_to_string(report: &ProfileReport) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_text(report, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

fn write_column<W: Write>(column: &ColumnReport, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{SEPARATOR}")?;
    writeln!(writer, "Column: {}", column.name)?;
    writeln!(writer, "Total rows: {}", column.total_rows)?;
    writeln!(writer, "Missing count: {}", column.missing_count)?;
    writeln!(writer, "Non-missing count: {}", column.non_missing_count)?;
    writeln!(writer, "Missing %: {:.1}%", column.missing_percent)?;
    writeln!(writer, "Unique values (non-missing): {}", column.unique_count)?;
    if column.unique_count == 0 {
        writeln!(writer, "{NO_VALUES_PLACEHOLDER}")?;
    }
    for (rank, top) in column.top_values.iter().enumerate() {
        writeln!(writer, "  {}. '{}' — {}", rank + 1, top.value, top.count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvprof_model::TopValue;

    fn column(name: &str, top_values: Vec<TopValue>) -> ColumnReport {
        let non_missing: usize = top_values.iter().map(|top| top.count).sum();
        ColumnReport {
            name: name.to_string(),
            total_rows: 4,
            missing_count: 4 - non_missing,
            non_missing_count: non_missing,
            missing_percent: 100.0 * (4 - non_missing) as f64 / 4.0,
            unique_count: top_values.len(),
            top_values,
        }
    }

    #[test]
    fn test_empty_report() {
        let output = render_text_to_string(&ProfileReport::default());
        assert_eq!(output, "No columns to profile.\n");
    }

    #[test]
    fn test_placeholder_when_no_values() {
        let report = ProfileReport::new(vec![column("blank", Vec::new())]);
        let output = render_text_to_string(&report);
        assert!(output.contains("Missing %: 100.0%\n"));
        assert!(output.ends_with(&format!("{NO_VALUES_PLACEHOLDER}\n")));
    }

    #[test]
    fn test_ranked_lines() {
        let report = ProfileReport::new(vec![column(
            "k",
            vec![TopValue::new("a", 3), TopValue::new("b b", 1)],
        )]);
        let output = render_text_to_string(&report);
        assert!(output.contains("  1. 'a' — 3\n  2. 'b b' — 1\n"));
        assert!(output.starts_with(SEPARATOR));
    }

    #[test]
    fn test_no_placeholder_when_ranking_is_disabled() {
        let mut report = column("k", vec![TopValue::new("a", 1), TopValue::new("b", 1)]);
        report.top_values.clear();
        let output = render_text_to_string(&ProfileReport::new(vec![report]));
        assert!(output.ends_with("Unique values (non-missing): 2\n"));
        assert!(!output.contains(NO_VALUES_PLACEHOLDER));
    }
}
