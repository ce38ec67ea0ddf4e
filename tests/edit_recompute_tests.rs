//! Edit application followed by full recompute.

use burnmap::io::csv::read_dataset_from_reader;
use burnmap::{
    apply_edits, columns, pipeline, CellEdit, CellValue, Dataset, EditSet, RiskThresholds,
};
use indoc::indoc;
use pretty_assertions::assert_eq;

const DERIVED: [&str; 3] = [
    columns::BURNOUT_SCORE,
    columns::RISK,
    columns::SENTIMENT_SCORE,
];

fn scored_fixture() -> Dataset {
    let csv = indoc! {"
        sleep_hours,study_hours,stress_level,feedback
        6,6,5,keeping up
        8,2,3,relaxed
        5,10,9,drowning in work
    "};
    let mut dataset = read_dataset_from_reader(csv.as_bytes()).expect("valid csv");
    pipeline::run(&mut dataset, &RiskThresholds::default());
    dataset
}

fn single_edit(key: &str, value: &str) -> EditSet {
    EditSet::from_form_fields([(key, value)])
}

fn recompute(dataset: &mut Dataset) {
    pipeline::run(dataset, &RiskThresholds::default());
}

#[test]
fn editing_one_cell_only_changes_that_records_derived_fields() {
    let original = scored_fixture();

    let (mut updated, outcome) = apply_edits(&original, &single_edit("stress_level_0", "10"));
    recompute(&mut updated);

    assert_eq!(outcome.applied, 1);

    // Row 0: (6/6) * 10 * 10 = 100 -> High, up from 50 -> Medium.
    assert_eq!(original.number_at(columns::BURNOUT_SCORE, 0), Some(50.0));
    assert_eq!(updated.number_at(columns::BURNOUT_SCORE, 0), Some(100.0));
    assert_eq!(
        updated.cell(0, columns::RISK),
        Some(&CellValue::Text("High".to_string()))
    );

    // Every other row's derived fields are untouched.
    for row in 1..original.row_count() {
        for column in DERIVED {
            assert_eq!(
                updated.cell(row, column),
                original.cell(row, column),
                "row {row} column {column} changed"
            );
        }
    }
}

#[test]
fn out_of_bounds_rows_are_silently_ignored() {
    let original = scored_fixture();

    let (updated, outcome) = apply_edits(&original, &single_edit("stress_level_99", "10"));

    assert_eq!(outcome.applied, 0);
    assert_eq!(outcome.ignored, 1);
    assert_eq!(updated, original);
}

#[test]
fn unknown_columns_are_silently_ignored() {
    let original = scored_fixture();

    let (updated, outcome) = apply_edits(&original, &single_edit("shoe_size_0", "44"));

    assert_eq!(outcome.applied, 0);
    assert_eq!(outcome.ignored, 1);
    assert_eq!(updated, original);
}

#[test]
fn edits_to_derived_cells_are_overwritten_by_the_recompute() {
    let original = scored_fixture();

    let (mut updated, outcome) = apply_edits(&original, &single_edit("burnout_score_1", "99"));
    assert_eq!(outcome.applied, 1);
    assert_eq!(updated.cell(1, columns::BURNOUT_SCORE), Some(&"99".into()));

    recompute(&mut updated);

    assert_eq!(updated, original);
}

#[test]
fn edited_values_are_raw_until_the_next_normalization() {
    let original = scored_fixture();
    let edits = single_edit("sleep_hours_1", "4");

    let (updated, _) = apply_edits(&original, &edits);
    assert_eq!(
        updated.cell(1, columns::SLEEP_HOURS),
        Some(&CellValue::Text("4".to_string()))
    );

    let mut recomputed = updated;
    recompute(&mut recomputed);
    assert_eq!(recomputed.number_at(columns::SLEEP_HOURS, 1), Some(4.0));
}

#[test]
fn unparseable_edit_defaults_on_recompute() {
    let original = scored_fixture();

    let (mut updated, _) = apply_edits(&original, &single_edit("sleep_hours_2", "plenty"));
    let report = pipeline::run(&mut updated, &RiskThresholds::default());

    assert_eq!(report.coerced_cells, 1);
    // Defaulted sleep trips the guard and zeroes the score.
    assert_eq!(updated.number_at(columns::BURNOUT_SCORE, 2), Some(0.0));
    assert_eq!(
        updated.cell(2, columns::RISK),
        Some(&CellValue::Text("Low".to_string()))
    );
}

#[test]
fn a_batch_applies_in_order_with_mixed_outcomes() {
    let original = scored_fixture();
    let mut edits = EditSet::new();
    edits.push(CellEdit {
        row: 0,
        column: "stress_level".to_string(),
        value: "1".to_string(),
    });
    edits.push(CellEdit {
        row: 0,
        column: "stress_level".to_string(),
        value: "2".to_string(),
    });
    edits.push(CellEdit {
        row: 42,
        column: "stress_level".to_string(),
        value: "3".to_string(),
    });

    let (updated, outcome) = apply_edits(&original, &edits);

    assert_eq!(outcome.applied, 2);
    assert_eq!(outcome.ignored, 1);
    // Last write wins.
    assert_eq!(updated.cell(0, columns::STRESS_LEVEL), Some(&"2".into()));
}
