//! Schema normalization: column-wide coercion of raw cells to numbers.

use crate::core::dataset::{columns, CellValue, Dataset};

/// Columns rewritten to `Number` by [`normalize_numeric_columns`].
pub const NUMERIC_COLUMNS: [&str; 3] = [
    columns::SLEEP_HOURS,
    columns::STUDY_HOURS,
    columns::STRESS_LEVEL,
];

/// Coerce one raw cell to a number.
///
/// Returns the value plus whether the safe default was substituted.
/// Unparseable text, missing cells, and non-finite values all coerce to 0
/// so no NaN or infinity ever enters the score formula.
pub fn coerce_numeric(cell: &CellValue) -> (f64, bool) {
    match cell {
        CellValue::Number(n) if n.is_finite() => (*n, false),
        CellValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => (n, false),
            _ => (0.0, true),
        },
        _ => (0.0, true),
    }
}

/// Rewrite every numeric column present in the dataset to `Number` cells.
///
/// Columns absent from the input are not created; downstream stages treat
/// a missing column as a distinct condition from "present but zero".
/// Returns the number of cells that fell back to the default.
pub fn normalize_numeric_columns(dataset: &mut Dataset) -> usize {
    let mut defaulted = 0;

    for column in NUMERIC_COLUMNS {
        let Some(cells) = dataset.column(column) else {
            continue;
        };
        let coerced: Vec<CellValue> = cells
            .iter()
            .map(|cell| {
                let (value, substituted) = coerce_numeric(cell);
                if substituted {
                    defaulted += 1;
                }
                CellValue::Number(value)
            })
            .collect();
        dataset.insert_column(column, coerced);
    }

    if defaulted > 0 {
        log::debug!("normalization defaulted {defaulted} cells to 0");
    }
    defaulted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clean_numbers_without_defaulting() {
        assert_eq!(coerce_numeric(&"3.5".into()), (3.5, false));
        assert_eq!(coerce_numeric(&" 7 ".into()), (7.0, false));
        assert_eq!(coerce_numeric(&CellValue::Number(2.0)), (2.0, false));
        assert_eq!(coerce_numeric(&"-4".into()), (-4.0, false));
    }

    #[test]
    fn defaults_unparseable_and_missing_cells() {
        assert_eq!(coerce_numeric(&"lots".into()), (0.0, true));
        assert_eq!(coerce_numeric(&"".into()), (0.0, true));
        assert_eq!(coerce_numeric(&CellValue::Missing), (0.0, true));
    }

    #[test]
    fn defaults_non_finite_values() {
        assert_eq!(coerce_numeric(&"NaN".into()), (0.0, true));
        assert_eq!(coerce_numeric(&"inf".into()), (0.0, true));
        assert_eq!(coerce_numeric(&CellValue::Number(f64::NAN)), (0.0, true));
    }

    #[test]
    fn normalizes_present_columns_and_counts_defaults() {
        let mut dataset = Dataset::from_columns([
            (columns::SLEEP_HOURS, vec!["6".into(), "bad".into()]),
            (columns::STRESS_LEVEL, vec![CellValue::Missing, "9".into()]),
        ])
        .unwrap();

        let defaulted = normalize_numeric_columns(&mut dataset);

        assert_eq!(defaulted, 2);
        assert_eq!(dataset.number_at(columns::SLEEP_HOURS, 0), Some(6.0));
        assert_eq!(dataset.number_at(columns::SLEEP_HOURS, 1), Some(0.0));
        assert_eq!(dataset.number_at(columns::STRESS_LEVEL, 0), Some(0.0));
        assert_eq!(dataset.number_at(columns::STRESS_LEVEL, 1), Some(9.0));
    }

    #[test]
    fn leaves_absent_columns_absent() {
        let mut dataset = Dataset::from_columns([(
            columns::SLEEP_HOURS,
            vec!["8".into()],
        )])
        .unwrap();

        normalize_numeric_columns(&mut dataset);

        assert!(!dataset.has_column(columns::STUDY_HOURS));
        assert!(!dataset.has_column(columns::STRESS_LEVEL));
    }
}
