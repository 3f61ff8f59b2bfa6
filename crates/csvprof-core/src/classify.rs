//! Missing-value classification.

use csvprof_model::{CellValue, MissingTokenSet};

/// Returns true if `value` represents missing data.
///
/// Null cells are always missing. Text cells are trimmed and lower-cased
/// before the token lookup, so `" NA "`, `"na"` and `"Na"` behave alike.
/// Non-text values are always present.
pub fn is_missing(value: Option<&CellValue>, tokens: &MissingTokenSet) -> bool {
    match value {
        None => true,
        Some(CellValue::Text(text)) => tokens.matches(text),
        Some(_) => false,
    }
}

/// Canonical form of a present value for frequency counting.
///
/// Text is trimmed but keeps its case; other values are unchanged.
pub fn normalize(value: &CellValue) -> CellValue {
    match value {
        CellValue::Text(text) => CellValue::Text(text.trim().to_string()),
        other => other.clone(),
    }
}
