//! The data transformation pipeline: normalize, score, classify, sentiment.
//!
//! A run is total and deterministic over the whole dataset. Edits never
//! patch derived fields incrementally; they re-enter here (the
//! "recompute" in the rest of the crate).

pub mod classify;
pub mod normalize;
pub mod score;
pub mod sentiment;

use serde::{Deserialize, Serialize};

use crate::core::dataset::Dataset;
use classify::RiskThresholds;

/// Per-run tallies of silent recoveries.
///
/// The pipeline never propagates input-malformation or arithmetic
/// errors; these counters make each substitution observable so data
/// degradation is detectable instead of invisible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Records processed in this run.
    pub records: usize,
    /// Cells the normalizer defaulted to 0.
    pub coerced_cells: usize,
    /// Records the scorer zeroed via the division-by-zero guard.
    pub zero_sleep_guards: usize,
}

/// Run the full pipeline over the dataset, in stage order.
pub fn run(dataset: &mut Dataset, thresholds: &RiskThresholds) -> PipelineReport {
    let coerced_cells = normalize::normalize_numeric_columns(dataset);
    let zero_sleep_guards = score::score_dataset(dataset);
    classify::classify_dataset(dataset, thresholds);
    sentiment::score_sentiment(dataset);

    let report = PipelineReport {
        records: dataset.row_count(),
        coerced_cells,
        zero_sleep_guards,
    };
    log::debug!(
        "pipeline processed {} records ({} cells defaulted, {} zero-sleep guards)",
        report.records,
        report.coerced_cells,
        report.zero_sleep_guards
    );
    report
}
