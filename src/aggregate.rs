//! Read-only summary projections over a fully-scored dataset.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::dataset::{columns, CellValue, Dataset};
use crate::pipeline::classify::RiskLevel;

/// The five named values handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Mean burnout score rounded to one decimal; `None` for an empty
    /// dataset.
    pub average_burnout: Option<f64>,
    pub total_records: usize,
    pub high_risk_count: usize,
    /// Ordered score series for histogram rendering.
    pub burnout_scores: Vector<f64>,
    /// Tier member counts, ordered `[Low, Medium, High]`.
    pub risk_counts: [usize; 3],
}

/// Summarize the dataset. Never mutates; safe to call on every read.
pub fn summarize(dataset: &Dataset) -> DashboardSummary {
    let burnout_scores: Vector<f64> = dataset
        .column(columns::BURNOUT_SCORE)
        .map(|cells| cells.iter().filter_map(CellValue::as_number).collect())
        .unwrap_or_default();

    let average_burnout = if burnout_scores.is_empty() {
        None
    } else {
        let mean = burnout_scores.iter().sum::<f64>() / burnout_scores.len() as f64;
        Some(round_one_decimal(mean))
    };

    let mut risk_counts = [0usize; 3];
    if let Some(cells) = dataset.column(columns::RISK) {
        for cell in cells {
            if let Some(level) = cell.as_text().and_then(RiskLevel::parse) {
                risk_counts[level as usize] += 1;
            }
        }
    }

    DashboardSummary {
        average_burnout,
        total_records: dataset.row_count(),
        high_risk_count: risk_counts[RiskLevel::High as usize],
        burnout_scores,
        risk_counts,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_one_decimal(67.083), 67.1);
        assert_eq!(round_one_decimal(33.333), 33.3);
        assert_eq!(round_one_decimal(50.0), 50.0);
    }
}
