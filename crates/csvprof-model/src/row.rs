//! Row records and cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single non-null cell value.
///
/// CSV input only ever produces [`CellValue::Text`]. The other variants let
/// callers that build rows in code feed typed values through the profiler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Boolean(bool),
    Integer(i64),
    Text(String),
}

impl CellValue {
    /// Returns the string payload for text cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// One record of a dataset: column name to cell value, in column order.
///
/// `None` is the null sentinel. Column names are unique within a row;
/// inserting an existing name replaces its value and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    fields: Vec<(String, Option<CellValue>)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty row with room for `capacity` columns.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Sets the value for `column`.
    pub fn insert(&mut self, column: impl Into<String>, value: Option<CellValue>) {
        let column = column.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Builder-style [`Row::insert`].
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: Option<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Returns the cell for `column`; absent columns and null cells are both `None`.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Like [`Row::get`], but checks position `index` first.
    ///
    /// Rows read from one file share a column layout, so the hint turns the
    /// lookup into a single comparison; a mismatch falls back to a scan.
    pub fn get_at(&self, index: usize, column: &str) -> Option<&CellValue> {
        match self.fields.get(index) {
            Some((name, value)) if name == column => value.as_ref(),
            _ => self.get(column),
        }
    }

    /// Returns true if the row has an entry for `column`, even a null one.
    pub fn contains_column(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == column)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Entries in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&CellValue>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for Row
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value.map(Into::into));
        }
        row
    }
}
