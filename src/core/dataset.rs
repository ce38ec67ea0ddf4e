//! The column-oriented in-memory table all pipeline stages operate on.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::core::errors::{Error, Result};

/// Well-known column names.
///
/// The base columns are assumed (but never enforced) by the normalizer;
/// the derived columns are created by the first pipeline run and
/// overwritten by every subsequent run.
pub mod columns {
    pub const SLEEP_HOURS: &str = "sleep_hours";
    pub const STUDY_HOURS: &str = "study_hours";
    pub const STRESS_LEVEL: &str = "stress_level";
    pub const FEEDBACK: &str = "feedback";

    pub const BURNOUT_SCORE: &str = "burnout_score";
    pub const RISK: &str = "risk";
    pub const SENTIMENT_SCORE: &str = "sentiment_score";
}

/// A single raw or derived cell.
///
/// Ingestion produces `Text` for non-empty fields and `Missing` for empty
/// ones; normalization and the derived stages rewrite cells to `Number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Missing => Ok(()),
        }
    }
}

/// An ordered set of equally-long columns.
///
/// The column set is fixed once the first pipeline run has added the
/// derived columns; afterwards only cell values change, via
/// [`Dataset::set_cell`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    cells: HashMap<String, Vec<CellValue>>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from ordered (name, values) pairs.
    ///
    /// Fails when two columns share a name or have different lengths.
    pub fn from_columns<S, I>(columns: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Vec<CellValue>)>,
    {
        let mut names = Vec::new();
        let mut cells = HashMap::new();
        let mut row_count = None;

        for (name, values) in columns {
            let name = name.into();
            let expected = *row_count.get_or_insert(values.len());
            if values.len() != expected {
                return Err(Error::Ingestion {
                    message: format!(
                        "column '{}' has {} values, expected {}",
                        name,
                        values.len(),
                        expected
                    ),
                    path: None,
                });
            }
            if cells.insert(name.clone(), values).is_some() {
                return Err(Error::Ingestion {
                    message: format!("duplicate column '{name}'"),
                    path: None,
                });
            }
            names.push(name);
        }

        Ok(Self {
            columns: names,
            cells,
            row_count: row_count.unwrap_or(0),
        })
    }

    /// Column names in display order, derived columns last.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.cells.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.cells.get(name).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.cells.get(column).and_then(|values| values.get(row))
    }

    /// Numeric view of a cell; `None` for missing columns, out-of-range
    /// rows, and non-numeric cells.
    pub fn number_at(&self, column: &str, row: usize) -> Option<f64> {
        self.cell(row, column).and_then(CellValue::as_number)
    }

    /// Overwrite a single cell. Returns `false` (leaving the dataset
    /// untouched) when the column is unknown or the row out of bounds.
    pub fn set_cell(&mut self, row: usize, column: &str, value: CellValue) -> bool {
        match self.cells.get_mut(column).and_then(|values| values.get_mut(row)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Insert or replace a whole column. New columns append to the display
    /// order; `values` must have one entry per row.
    pub fn insert_column(&mut self, name: &str, values: Vec<CellValue>) {
        debug_assert_eq!(values.len(), self.row_count, "column '{name}' length mismatch");
        if self.cells.insert(name.to_string(), values).is_none() {
            self.columns.push(name.to_string());
        }
    }

    /// Row-major view for report serialization.
    pub fn records(&self) -> Vec<BTreeMap<String, CellValue>> {
        (0..self.row_count)
            .map(|row| {
                self.columns
                    .iter()
                    .filter_map(|name| {
                        self.cell(row, name)
                            .map(|cell| (name.clone(), cell.clone()))
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_columns([
            ("sleep_hours", vec!["6".into(), "4".into()]),
            ("feedback", vec!["fine".into(), CellValue::Missing]),
        ])
        .unwrap()
    }

    #[test]
    fn from_columns_rejects_ragged_input() {
        let result = Dataset::from_columns([
            ("a", vec![CellValue::Number(1.0)]),
            ("b", vec![CellValue::Number(1.0), CellValue::Number(2.0)]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn from_columns_rejects_duplicate_names() {
        let result = Dataset::from_columns([
            ("a", vec![CellValue::Number(1.0)]),
            ("a", vec![CellValue::Number(2.0)]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn set_cell_ignores_unknown_targets() {
        let mut dataset = sample();
        assert!(!dataset.set_cell(0, "nope", "x".into()));
        assert!(!dataset.set_cell(9, "sleep_hours", "x".into()));
        assert_eq!(dataset, sample());
    }

    #[test]
    fn set_cell_overwrites_in_bounds() {
        let mut dataset = sample();
        assert!(dataset.set_cell(1, "sleep_hours", "7".into()));
        assert_eq!(dataset.cell(1, "sleep_hours"), Some(&"7".into()));
    }

    #[test]
    fn insert_column_appends_once_and_replaces_after() {
        let mut dataset = sample();
        dataset.insert_column("score", vec![1.0.into(), 2.0.into()]);
        dataset.insert_column("score", vec![3.0.into(), 4.0.into()]);
        assert_eq!(
            dataset.columns().to_vec(),
            vec!["sleep_hours", "feedback", "score"]
        );
        assert_eq!(dataset.number_at("score", 0), Some(3.0));
    }

    #[test]
    fn display_renders_missing_as_empty() {
        assert_eq!(CellValue::Missing.to_string(), "");
        assert_eq!(CellValue::Number(9.0).to_string(), "9");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
    }
}
