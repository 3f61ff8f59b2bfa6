//! Per-column aggregation: counts, distinct values and ranked top values.

use std::collections::HashMap;

use csvprof_model::{
    CellValue, ColumnReport, DEFAULT_TOP_N, MissingTokenSet, ProfileOptions, ProfileReport, Row,
    TopValue,
};
use tracing::{debug, info};

use crate::classify::{is_missing, normalize};

/// Incremental statistics for a single column.
///
/// Feed cells one at a time with [`ColumnAccumulator::observe`] and build the
/// report with [`ColumnAccumulator::finish`]. Frequencies are kept in
/// first-seen order so ranking ties resolve the same way on every run.
#[derive(Debug, Clone)]
pub struct ColumnAccumulator {
    name: String,
    total_rows: usize,
    missing_count: usize,
    positions: HashMap<CellValue, usize>,
    frequencies: Vec<TopValue>,
}

impl ColumnAccumulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_rows: 0,
            missing_count: 0,
            positions: HashMap::new(),
            frequencies: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records one cell.
    pub fn observe(&mut self, value: Option<&CellValue>, tokens: &MissingTokenSet) {
        self.total_rows += 1;
        let value = match value {
            Some(value) if !is_missing(Some(value), tokens) => value,
            _ => {
                self.missing_count += 1;
                return;
            }
        };
        let key = normalize(value);
        match self.positions.get(&key) {
            Some(&index) => self.frequencies[index].count += 1,
            None => {
                self.positions.insert(key.clone(), self.frequencies.len());
                self.frequencies.push(TopValue::new(key, 1));
            }
        }
    }

    /// Builds the column report, keeping at most `top_n` ranked values.
    pub fn finish(self, top_n: usize) -> ColumnReport {
        let non_missing_count = self.total_rows - self.missing_count;
        let unique_count = self.frequencies.len();

        // Stable sort: equal counts stay in first-seen order.
        let mut top_values = self.frequencies;
        top_values.sort_by(|a, b| b.count.cmp(&a.count));
        top_values.truncate(top_n);

        ColumnReport {
            name: self.name,
            total_rows: self.total_rows,
            missing_count: self.missing_count,
            non_missing_count,
            missing_percent: missing_percent(self.missing_count, self.total_rows),
            unique_count,
            top_values,
        }
    }
}

/// Share of missing cells in percent, rounded to one decimal.
fn missing_percent(missing: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = 100.0 * missing as f64 / total as f64;
    (percent * 10.0).round() / 10.0
}

/// Profiles every column of `rows` with the default ranking depth.
///
/// Columns come from the first row, in its order. Rows lacking a column
/// contribute a missing cell for it. Empty input yields an empty report.
pub fn profile_columns(rows: &[Row], tokens: &MissingTokenSet) -> ProfileReport {
    profile(rows, tokens, DEFAULT_TOP_N)
}

/// Profiles every column of `rows` using explicit options.
pub fn profile_columns_with(rows: &[Row], options: &ProfileOptions) -> ProfileReport {
    profile(rows, &options.missing_tokens, options.top_n)
}

/// Profiles with the default missing tokens and ranking depth.
pub fn profile_rows_default(rows: &[Row]) -> ProfileReport {
    profile_columns_with(rows, &ProfileOptions::default())
}

fn profile(rows: &[Row], tokens: &MissingTokenSet, top_n: usize) -> ProfileReport {
    let Some(first) = rows.first() else {
        debug!("no rows to profile");
        return ProfileReport::default();
    };

    let mut accumulators: Vec<ColumnAccumulator> =
        first.columns().map(ColumnAccumulator::new).collect();

    // Positions come from the first row; rows with another layout still
    // resolve by name.
    for row in rows {
        for (index, accumulator) in accumulators.iter_mut().enumerate() {
            let value = row.get_at(index, accumulator.name());
            accumulator.observe(value, tokens);
        }
    }

    let columns: Vec<ColumnReport> = accumulators
        .into_iter()
        .map(|accumulator| {
            let report = accumulator.finish(top_n);
            debug!(
                column = %report.name,
                total_rows = report.total_rows,
                missing = report.missing_count,
                unique = report.unique_count,
                "profiled column"
            );
            report
        })
        .collect();

    info!(
        rows = rows.len(),
        columns = columns.len(),
        "profile complete"
    );

    ProfileReport::new(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[(&str, Option<&str>)]) -> Row {
        fields.iter().copied().collect()
    }

    #[test]
    fn test_empty_input() {
        let report = profile_columns(&[], &MissingTokenSet::default());
        assert!(report.is_empty());
    }

    #[test]
    fn test_reference_scenario() {
        let rows = vec![
            row(&[("a", Some("1")), ("b", Some("x"))]),
            row(&[("a", Some("")), ("b", Some("x"))]),
            row(&[("a", Some("2")), ("b", Some("y"))]),
        ];
        let report = profile_columns(&rows, &MissingTokenSet::default());

        let a = report.column("a").unwrap();
        assert_eq!(a.total_rows, 3);
        assert_eq!(a.missing_count, 1);
        assert_eq!(a.non_missing_count, 2);
        assert_eq!(a.missing_percent, 33.3);
        assert_eq!(a.unique_count, 2);
        assert_eq!(
            a.top_values,
            vec![TopValue::new("1", 1), TopValue::new("2", 1)]
        );

        let b = report.column("b").unwrap();
        assert_eq!(b.missing_count, 0);
        assert_eq!(b.unique_count, 2);
        assert_eq!(
            b.top_values,
            vec![TopValue::new("x", 2), TopValue::new("y", 1)]
        );
    }

    #[test]
    fn test_column_order_follows_first_row() {
        let rows = vec![
            row(&[("z", Some("1")), ("a", Some("2")), ("m", Some("3"))]),
            row(&[("a", Some("4")), ("m", Some("5")), ("z", Some("6"))]),
        ];
        let report = profile_columns(&rows, &MissingTokenSet::default());
        let names: Vec<&str> = report.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_reordered_rows_resolve_by_name() {
        let rows = vec![
            row(&[("z", Some("1")), ("a", Some("x"))]),
            row(&[("a", Some("x")), ("z", Some("NA"))]),
            row(&[("a", Some("y"))]),
        ];
        let report = profile_columns(&rows, &MissingTokenSet::default());
        let z = report.column("z").unwrap();
        assert_eq!(z.missing_count, 2);
        assert_eq!(z.top_values, vec![TopValue::new("1", 1)]);
        let a = report.column("a").unwrap();
        assert_eq!(a.missing_count, 0);
        assert_eq!(a.top_values[0], TopValue::new("x", 2));
    }

    #[test]
    fn test_wide_rows_keep_per_column_counts() {
        let names: Vec<String> = (0..200).map(|i| format!("c{i}")).collect();
        let rows: Vec<Row> = (0..50)
            .map(|r| {
                names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let value = if (r + i) % 2 == 0 { "even" } else { "odd" };
                        (name.as_str(), Some(value))
                    })
                    .collect()
            })
            .collect();
        let report = profile_columns(&rows, &MissingTokenSet::default());
        assert_eq!(report.len(), 200);
        for column in &report {
            assert_eq!(column.total_rows, 50);
            assert_eq!(column.unique_count, 2);
            assert_eq!(column.top_values[0].count, 25);
        }
        assert_eq!(report.columns[1].top_values[0], TopValue::new("odd", 25));
    }

    #[test]
    fn test_all_missing_column() {
        let rows = vec![
            row(&[("c", Some("NA"))]),
            row(&[("c", None)]),
            row(&[("c", Some(" null "))]),
        ];
        let report = profile_columns(&rows, &MissingTokenSet::default());
        let c = &report.columns[0];
        assert_eq!(c.unique_count, 0);
        assert!(c.top_values.is_empty());
        assert_eq!(c.missing_percent, 100.0);
    }

    #[test]
    fn test_clear_majority_ranks_first() {
        let mut rows: Vec<Row> = (0..5).map(|_| row(&[("v", Some("red"))])).collect();
        rows.push(row(&[("v", Some("blue"))]));
        rows.push(row(&[("v", Some("green"))]));
        rows.push(row(&[("v", Some("blue"))]));
        let report = profile_columns(&rows, &MissingTokenSet::default());
        assert_eq!(report.columns[0].top_values[0], TopValue::new("red", 5));
        assert_eq!(report.columns[0].top_values[1], TopValue::new("blue", 2));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let rows: Vec<Row> = ["d", "b", "c", "a", "b", "c", "a", "d"]
            .iter()
            .map(|value| row(&[("k", Some(*value))]))
            .collect();
        let report = profile_columns(&rows, &MissingTokenSet::default());
        assert_eq!(
            report.columns[0].top_values,
            vec![
                TopValue::new("d", 2),
                TopValue::new("b", 2),
                TopValue::new("c", 2),
            ]
        );
    }

    #[test]
    fn test_values_are_trimmed_not_lowercased() {
        let rows = vec![
            row(&[("k", Some(" Oslo"))]),
            row(&[("k", Some("Oslo  "))]),
            row(&[("k", Some("oslo"))]),
        ];
        let report = profile_columns(&rows, &MissingTokenSet::default());
        let k = &report.columns[0];
        assert_eq!(k.unique_count, 2);
        assert_eq!(k.top_values[0], TopValue::new("Oslo", 2));
    }

    #[test]
    fn test_missing_key_counts_as_missing() {
        let rows = vec![
            row(&[("a", Some("1")), ("b", Some("2"))]),
            row(&[("a", Some("3"))]),
        ];
        let report = profile_columns(&rows, &MissingTokenSet::default());
        let b = report.column("b").unwrap();
        assert_eq!(b.missing_count, 1);
        assert_eq!(b.non_missing_count, 1);
        assert_eq!(b.missing_percent, 50.0);
    }

    #[test]
    fn test_extra_keys_in_later_rows_are_ignored() {
        let rows = vec![
            row(&[("a", Some("1"))]),
            row(&[("a", Some("2")), ("extra", Some("x"))]),
        ];
        let report = profile_columns(&rows, &MissingTokenSet::default());
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_custom_tokens_and_top_n() {
        let rows: Vec<Row> = ["-", "a", "b", "c", "d", "NA"]
            .iter()
            .map(|value| row(&[("k", Some(*value))]))
            .collect();
        let options = ProfileOptions::new()
            .with_missing_tokens(MissingTokenSet::from_tokens(["-"]))
            .with_top_n(10);
        let report = profile_columns_with(&rows, &options);
        let k = &report.columns[0];
        assert_eq!(k.missing_count, 1);
        assert_eq!(k.unique_count, 5);
        assert_eq!(k.top_values.len(), 5);
        assert_eq!(k.top_values[4], TopValue::new("NA", 1));
    }

    #[test]
    fn test_typed_values_count_as_present() {
        let rows = vec![
            Row::new().with("n", Some(CellValue::Integer(0))),
            Row::new().with("n", Some(CellValue::Integer(0))),
            Row::new().with("n", Some(CellValue::Boolean(true))),
        ];
        let report = profile_rows_default(&rows);
        let n = &report.columns[0];
        assert_eq!(n.missing_count, 0);
        assert_eq!(n.top_values[0], TopValue::new(0_i64, 2));
    }

    #[test]
    fn test_missing_percent_rounding() {
        assert_eq!(missing_percent(1, 3), 33.3);
        assert_eq!(missing_percent(2, 3), 66.7);
        assert_eq!(missing_percent(1, 8), 12.5);
        assert_eq!(missing_percent(0, 7), 0.0);
        assert_eq!(missing_percent(7, 7), 100.0);
    }

    #[test]
    fn test_accumulator_streaming() {
        let tokens = MissingTokenSet::default();
        let mut accumulator = ColumnAccumulator::new("s");
        for value in ["x", "y", "NA", "x"] {
            accumulator.observe(Some(&CellValue::from(value)), &tokens);
        }
        accumulator.observe(None, &tokens);
        let report = accumulator.finish(1);
        assert_eq!(report.total_rows, 5);
        assert_eq!(report.missing_count, 2);
        assert_eq!(report.unique_count, 2);
        assert_eq!(report.top_values, vec![TopValue::new("x", 2)]);
    }
}
