//! Sparse cell edits and their pure application to a dataset.
//!
//! Edit keys follow the `{column}_{row_index}` form-field pattern; the
//! row index is the final underscore-separated segment, so column names
//! containing underscores parse correctly.

use crate::core::dataset::{CellValue, Dataset};

/// One cell overwrite. The value stays raw text until the next
/// normalization pass types it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub row: usize,
    pub column: String,
    pub value: String,
}

impl CellEdit {
    /// Parse a `{column}_{row_index}` key. Returns `None` when the key has
    /// no trailing numeric index segment.
    pub fn parse_key(key: &str, value: &str) -> Option<CellEdit> {
        let (column, index) = key.rsplit_once('_')?;
        if column.is_empty() {
            return None;
        }
        let row = index.parse::<usize>().ok()?;
        Some(CellEdit {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}

/// An ordered batch of edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSet {
    edits: Vec<CellEdit>,
}

impl EditSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edit: CellEdit) {
        self.edits.push(edit);
    }

    /// Collect edits from flat form-style fields, skipping keys that do
    /// not match the `{column}_{row_index}` pattern.
    pub fn from_form_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let edits = fields
            .into_iter()
            .filter_map(|(key, value)| CellEdit::parse_key(key, value))
            .collect();
        Self { edits }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellEdit> {
        self.edits.iter()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Applied/ignored tallies for one batch. Ignored edits are policy, not
/// errors; the tallies exist for observability only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EditOutcome {
    pub applied: usize,
    pub ignored: usize,
}

/// Apply a batch of edits, returning the updated dataset.
///
/// Edits whose column is unknown or whose row is out of bounds are
/// silently skipped. The caller is expected to re-run the pipeline on the
/// result; derived cells touched here are overwritten by that recompute.
pub fn apply_edits(dataset: &Dataset, edits: &EditSet) -> (Dataset, EditOutcome) {
    let mut updated = dataset.clone();
    let mut outcome = EditOutcome::default();

    for edit in edits.iter() {
        let applied = updated.set_cell(
            edit.row,
            &edit.column,
            CellValue::Text(edit.value.clone()),
        );
        if applied {
            outcome.applied += 1;
        } else {
            outcome.ignored += 1;
        }
    }

    log::debug!(
        "applied {} edits, ignored {}",
        outcome.applied,
        outcome.ignored
    );
    (updated, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_splits_on_final_underscore() {
        let edit = CellEdit::parse_key("stress_level_0", "9").unwrap();
        assert_eq!(edit.column, "stress_level");
        assert_eq!(edit.row, 0);
        assert_eq!(edit.value, "9");

        let edit = CellEdit::parse_key("feedback_12", "better now").unwrap();
        assert_eq!(edit.column, "feedback");
        assert_eq!(edit.row, 12);
    }

    #[test]
    fn parse_key_rejects_keys_without_index() {
        assert_eq!(CellEdit::parse_key("feedback", "x"), None);
        assert_eq!(CellEdit::parse_key("stress_level_x", "x"), None);
        assert_eq!(CellEdit::parse_key("_3", "x"), None);
    }

    #[test]
    fn from_form_fields_skips_non_edit_keys() {
        let edits = EditSet::from_form_fields([
            ("stress_level_1", "8"),
            ("submit", "Save"),
            ("feedback_0", "tired"),
        ]);
        assert_eq!(edits.len(), 2);
    }
}
