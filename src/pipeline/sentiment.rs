//! Feedback sentiment scoring via the VADER compound polarity lexicon.

use crate::core::dataset::{columns, CellValue, Dataset};

/// Fixed stringification for cells with no value, mirroring how absent
/// feedback reached the model in the original survey tool.
pub const MISSING_FEEDBACK_PLACEHOLDER: &str = "None";

/// The uniform cell-to-text rule applied before scoring.
pub fn feedback_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(s) => s.clone(),
        CellValue::Number(n) => n.to_string(),
        CellValue::Missing => MISSING_FEEDBACK_PLACEHOLDER.to_string(),
    }
}

/// Write the `sentiment_score` column for every record.
///
/// When the dataset has no `feedback` column at all, every record scores
/// the constant 0 and the lexicon is never loaded.
pub fn score_sentiment(dataset: &mut Dataset) {
    let rows = dataset.row_count();

    if !dataset.has_column(columns::FEEDBACK) {
        log::debug!("no feedback column; sentiment scores set to 0");
        dataset.insert_column(columns::SENTIMENT_SCORE, vec![CellValue::Number(0.0); rows]);
        return;
    }

    let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
    let scores: Vec<CellValue> = dataset
        .column(columns::FEEDBACK)
        .map(|cells| {
            cells
                .iter()
                .map(|cell| {
                    let text = feedback_text(cell);
                    let compound = analyzer
                        .polarity_scores(&text)
                        .get("compound")
                        .copied()
                        .unwrap_or(0.0);
                    CellValue::Number(compound)
                })
                .collect()
        })
        .unwrap_or_default();

    dataset.insert_column(columns::SENTIMENT_SCORE, scores);
}
