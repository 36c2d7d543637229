use serde::{Deserialize, Serialize};

use crate::metrics::RatingThresholds;

/// Main audit configuration.
///
/// Every field has a default matching the stock tracker, so the tool runs
/// with no config file at all. A file only needs the fields it overrides.
///
/// Example YAML:
/// ```yaml
/// currency: EUR
/// max_drivers: 6
/// distance:
///   min_km: 1.0
///   max_km: 2500.0
/// thresholds:
///   high: 15.0
///   standard: 10.0
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Currency label shown in reports (default: "PHP")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Maximum drivers per run (default: 10)
    #[serde(default = "default_max_drivers")]
    pub max_drivers: usize,

    /// Bounds for the weekly total distance prompt
    #[serde(default)]
    pub distance: DistanceLimits,

    /// Efficiency rating boundaries
    #[serde(default)]
    pub thresholds: RatingThresholds,
}

fn default_currency() -> String {
    "PHP".to_string()
}

fn default_max_drivers() -> usize {
    10
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            max_drivers: default_max_drivers(),
            distance: DistanceLimits::default(),
            thresholds: RatingThresholds::default(),
        }
    }
}

/// Accepted range for the weekly total distance, in km. Daily distances are
/// only bounded below by zero and are not configurable.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DistanceLimits {
    #[serde(default = "default_min_km")]
    pub min_km: f64,

    #[serde(default = "default_max_km")]
    pub max_km: f64,
}

fn default_min_km() -> f64 {
    1.0
}

fn default_max_km() -> f64 {
    5000.0
}

impl Default for DistanceLimits {
    fn default() -> Self {
        Self {
            min_km: default_min_km(),
            max_km: default_max_km(),
        }
    }
}
