//! JSON output.

use csvprof_model::ProfileReport;

/// Serializes the report as pretty-printed JSON.
pub fn render_json(report: &ProfileReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
