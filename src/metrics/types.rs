use serde::{Deserialize, Serialize};
use std::fmt;

/// Driver identity and week-level figures, collected before daily tracking.
#[derive(Debug, Clone)]
pub struct DriverProfile {
    pub name: String,
    pub weekly_budget: f64,
    /// Total distance covered this week, in km. Validated against the
    /// configured bounds (default 1.0..=5000.0) at the prompt layer.
    pub total_distance_km: f64,
}

/// One day's fuel cost and distance pair. Five per driver, Day 1..Day 5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRecord {
    pub fuel_cost: f64,
    pub distance_km: f64,
}

/// A daily record with its derived efficiency and label.
#[derive(Debug, Clone)]
pub struct DayMetrics {
    /// 1-based day number as shown in the report.
    pub day: usize,
    pub fuel_cost: f64,
    pub distance_km: f64,
    /// km per currency unit; 0.0 is the "no data" sentinel for a zero-cost day.
    pub efficiency: f64,
    pub label: DailyLabel,
}

/// Derived weekly figures for one driver. Built once by
/// [`submit_driver`](crate::metrics::submit_driver), never revised afterwards.
#[derive(Debug, Clone)]
pub struct WeeklySummary {
    pub driver: DriverProfile,
    pub days: Vec<DayMetrics>,
    pub total_fuel_spent: f64,
    pub average_daily_expense: f64,
    /// Overall km per currency unit; 0.0 when nothing was spent all week.
    pub efficiency_ratio: f64,
    pub rating: EfficiencyRating,
    pub under_budget: bool,
}

/// Weekly/overall performance classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyRating {
    High,
    Standard,
    Low,
}

impl EfficiencyRating {
    /// Short form used in the multi-driver comparison table.
    pub fn short(&self) -> &'static str {
        match self {
            EfficiencyRating::High => "High",
            EfficiencyRating::Standard => "Standard",
            EfficiencyRating::Low => "Low",
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EfficiencyRating::High => write!(f, "High Efficiency"),
            EfficiencyRating::Standard => write!(f, "Standard Efficiency"),
            EfficiencyRating::Low => write!(f, "Low Efficiency / Maintenance Required"),
        }
    }
}

/// Per-day classification. Unlike [`EfficiencyRating`], a zero ratio is
/// reported as "N/A" (no data for the day) rather than Low. The two scales
/// are intentionally kept separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyLabel {
    High,
    Good,
    Low,
    NoData,
}

impl fmt::Display for DailyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DailyLabel::High => write!(f, "High"),
            DailyLabel::Good => write!(f, "Good"),
            DailyLabel::Low => write!(f, "Low"),
            DailyLabel::NoData => write!(f, "N/A"),
        }
    }
}

/// Rating boundaries, in km per currency unit.
///
/// A ratio strictly above `high` rates High; at or above `standard` rates
/// Standard; anything below rates Low.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RatingThresholds {
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_standard")]
    pub standard: f64,
}

fn default_high() -> f64 {
    15.0
}

fn default_standard() -> f64 {
    10.0
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            high: default_high(),
            standard: default_standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_display_strings() {
        assert_eq!(EfficiencyRating::High.to_string(), "High Efficiency");
        assert_eq!(
            EfficiencyRating::Standard.to_string(),
            "Standard Efficiency"
        );
        assert_eq!(
            EfficiencyRating::Low.to_string(),
            "Low Efficiency / Maintenance Required"
        );
    }

    #[test]
    fn test_daily_label_display_strings() {
        assert_eq!(DailyLabel::High.to_string(), "High");
        assert_eq!(DailyLabel::Good.to_string(), "Good");
        assert_eq!(DailyLabel::Low.to_string(), "Low");
        assert_eq!(DailyLabel::NoData.to_string(), "N/A");
    }

    #[test]
    fn test_default_thresholds() {
        let t = RatingThresholds::default();
        assert_eq!(t.high, 15.0);
        assert_eq!(t.standard, 10.0);
    }

    #[test]
    fn test_thresholds_partial_parse() {
        let t: RatingThresholds = serde_saphyr::from_str("high: 20.0").unwrap();
        assert_eq!(t.high, 20.0);
        assert_eq!(t.standard, 10.0);
    }
}
