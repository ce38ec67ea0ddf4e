//! Risk tier classification over the burnout score.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::dataset::{columns, CellValue, Dataset};

/// Ordered risk tiers. `Ord` follows severity: `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All tiers in severity order; indexes match the report count triple.
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<RiskLevel> {
        match s {
            "Low" => Some(RiskLevel::Low),
            "Medium" => Some(RiskLevel::Medium),
            "High" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bin edges for the tier mapping, upper-bound inclusive.
///
/// The effective intervals are `(-inf, low_max]`, `(low_max, medium_max]`,
/// `(medium_max, +inf)`. Over the clamped 0-100 domain that reads as
/// `(-1, 33], (33, 66], (66, 101]`, so the boundary values 0, 33, 66 and
/// 100 each land in exactly one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub low_max: f64,
    pub medium_max: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_max: 33.0,
            medium_max: 66.0,
        }
    }
}

impl RiskThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if !self.low_max.is_finite() || !self.medium_max.is_finite() {
            return Err("thresholds must be finite".to_string());
        }
        if self.low_max >= self.medium_max {
            return Err(format!(
                "low_max ({}) must be below medium_max ({})",
                self.low_max, self.medium_max
            ));
        }
        Ok(())
    }
}

/// Map one score to its tier. Total over all finite scores.
pub fn classify(score: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if score <= thresholds.low_max {
        RiskLevel::Low
    } else if score <= thresholds.medium_max {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Write the `risk` column for every record from its `burnout_score`.
pub fn classify_dataset(dataset: &mut Dataset, thresholds: &RiskThresholds) {
    let risks: Vec<CellValue> = (0..dataset.row_count())
        .map(|row| {
            let score = dataset.number_at(columns::BURNOUT_SCORE, row).unwrap_or(0.0);
            CellValue::Text(classify(score, thresholds).as_str().to_string())
        })
        .collect();

    dataset.insert_column(columns::RISK, risks);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_are_valid() {
        assert!(RiskThresholds::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_and_non_finite_edges() {
        let inverted = RiskThresholds {
            low_max: 66.0,
            medium_max: 33.0,
        };
        assert!(inverted.validate().is_err());

        let nan = RiskThresholds {
            low_max: f64::NAN,
            medium_max: 66.0,
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn tiers_order_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn parse_round_trips_labels() {
        for level in RiskLevel::ALL {
            assert_eq!(RiskLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(RiskLevel::parse("severe"), None);
    }

    #[test]
    fn classify_writes_labels_per_record() {
        let mut dataset = Dataset::from_columns([(
            columns::BURNOUT_SCORE,
            vec![10.0.into(), 50.0.into(), 90.0.into()],
        )])
        .unwrap();

        classify_dataset(&mut dataset, &RiskThresholds::default());

        let labels: Vec<&str> = dataset
            .column(columns::RISK)
            .unwrap()
            .iter()
            .filter_map(CellValue::as_text)
            .collect();
        assert_eq!(labels, vec!["Low", "Medium", "High"]);
    }
}
