//! Burnout scoring: study/sleep ratio weighted by stress, clamped to 0-100.

use crate::core::dataset::{columns, CellValue, Dataset};

/// Upper bound of the burnout scale.
pub const SCORE_CEILING: f64 = 100.0;

/// Multiplier applied to the stress-weighted ratio.
const STRESS_SCALE: f64 = 10.0;

/// Score one record.
///
/// `(study / sleep) * stress * 10`, clamped to `[0, 100]`. Zero or
/// negative sleep short-circuits to 0 rather than dividing by zero.
/// Negative study or stress values are not rejected; they flow through
/// the formula and only the clamp bounds the result.
pub fn burnout_score(sleep_hours: f64, study_hours: f64, stress_level: f64) -> f64 {
    if sleep_hours <= 0.0 {
        return 0.0;
    }
    ((study_hours / sleep_hours) * stress_level * STRESS_SCALE).clamp(0.0, SCORE_CEILING)
}

/// Write the `burnout_score` column for every record.
///
/// Missing input columns read as 0 for every row. Returns how many
/// records hit the zero-sleep guard.
pub fn score_dataset(dataset: &mut Dataset) -> usize {
    let mut guarded = 0;

    let scores: Vec<CellValue> = (0..dataset.row_count())
        .map(|row| {
            let sleep = dataset.number_at(columns::SLEEP_HOURS, row).unwrap_or(0.0);
            let study = dataset.number_at(columns::STUDY_HOURS, row).unwrap_or(0.0);
            let stress = dataset.number_at(columns::STRESS_LEVEL, row).unwrap_or(0.0);
            if sleep <= 0.0 {
                guarded += 1;
            }
            CellValue::Number(burnout_score(sleep, study, stress))
        })
        .collect();

    dataset.insert_column(columns::BURNOUT_SCORE, scores);

    if guarded > 0 {
        log::debug!("{guarded} records scored 0 via the zero-sleep guard");
    }
    guarded
}
