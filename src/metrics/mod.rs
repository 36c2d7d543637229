pub mod engine;
pub mod types;

use std::fmt;

/// Length of a tracked work week. Reports always cover exactly this many days.
pub const DAYS_PER_WEEK: usize = 5;

pub use engine::{
    classify_rating, daily_efficiency, daily_label, overall_efficiency, submit_driver,
    total_fuel_spent, under_budget,
};
pub use types::{
    DailyLabel, DailyRecord, DayMetrics, DriverProfile, EfficiencyRating, RatingThresholds,
    WeeklySummary,
};

#[derive(Debug)]
pub enum MetricsError {
    /// Precondition violation at the engine boundary (wrong record count,
    /// negative figures). The prompt layer is supposed to make this
    /// unreachable; hitting it is a programming error, not bad user input.
    InvalidInput(String),
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for MetricsError {}
