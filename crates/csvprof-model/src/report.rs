//! Profile report types.

use serde::{Deserialize, Serialize};

use crate::row::CellValue;

/// A ranked value and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopValue {
    pub value: CellValue,
    pub count: usize,
}

impl TopValue {
    pub fn new(value: impl Into<CellValue>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Descriptive statistics for one column.
///
/// `missing_count + non_missing_count == total_rows` and
/// `unique_count <= non_missing_count` always hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name: String,
    pub total_rows: usize,
    pub missing_count: usize,
    pub non_missing_count: usize,
    /// Percentage of missing cells, rounded to one decimal (0.0 to 100.0).
    pub missing_percent: f64,
    /// Distinct non-missing values after trimming.
    pub unique_count: usize,
    /// Most frequent values, descending by count, ties in first-seen order.
    pub top_values: Vec<TopValue>,
}

impl ColumnReport {
    /// Returns true if every cell in the column is missing.
    pub fn is_all_missing(&self) -> bool {
        self.non_missing_count == 0
    }

    /// Returns the most frequent value, if any.
    pub fn mode(&self) -> Option<&TopValue> {
        self.top_values.first()
    }
}

/// Column reports in the column order of the first input row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileReport {
    pub columns: Vec<ColumnReport>,
}

impl ProfileReport {
    pub fn new(columns: Vec<ColumnReport>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnReport> {
        self.columns.iter()
    }

    /// Looks up a column report by name.
    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|report| report.name == name)
    }
}

impl<'a> IntoIterator for &'a ProfileReport {
    type Item = &'a ColumnReport;
    type IntoIter = std::slice::Iter<'a, ColumnReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
