use super::types::{
    DailyLabel, DailyRecord, DayMetrics, DriverProfile, EfficiencyRating, RatingThresholds,
    WeeklySummary,
};
use super::{MetricsError, DAYS_PER_WEEK};

/// Efficiency for a single day: distance per currency unit spent.
///
/// A zero fuel cost yields the 0.0 sentinel instead of dividing. The original
/// tracker overloads zero as both "free fuel" and "no data"; daily labeling
/// turns it into "N/A" downstream.
pub fn daily_efficiency(distance_km: f64, fuel_cost: f64) -> f64 {
    if fuel_cost > 0.0 {
        distance_km / fuel_cost
    } else {
        0.0
    }
}

/// Sum of the week's fuel costs. Order-independent.
pub fn total_fuel_spent(costs: &[f64]) -> f64 {
    costs.iter().sum()
}

/// Overall efficiency for the week, with the same zero-guard as
/// [`daily_efficiency`].
pub fn overall_efficiency(total_distance_km: f64, total_fuel: f64) -> f64 {
    if total_fuel > 0.0 {
        total_distance_km / total_fuel
    } else {
        0.0
    }
}

/// Weekly rating: exclusive on the high boundary, inclusive on the standard
/// one. Exactly 15.0 is Standard, 15.01 is High, below 10.0 is Low.
///
/// A zero ratio rates Low here. That differs from [`daily_label`] on purpose.
pub fn classify_rating(ratio: f64, thresholds: &RatingThresholds) -> EfficiencyRating {
    if ratio > thresholds.high {
        EfficiencyRating::High
    } else if ratio >= thresholds.standard {
        EfficiencyRating::Standard
    } else {
        EfficiencyRating::Low
    }
}

/// Per-day label: zero means no data for the day ("N/A"), otherwise the same
/// boundaries as [`classify_rating`].
pub fn daily_label(ratio: f64, thresholds: &RatingThresholds) -> DailyLabel {
    if ratio == 0.0 {
        DailyLabel::NoData
    } else if ratio > thresholds.high {
        DailyLabel::High
    } else if ratio >= thresholds.standard {
        DailyLabel::Good
    } else {
        DailyLabel::Low
    }
}

/// Budget compliance. Spending exactly the budget still counts as under.
pub fn under_budget(total_fuel: f64, budget: f64) -> bool {
    total_fuel <= budget
}

/// Build the weekly summary for one fully collected driver.
///
/// This is the single entry point the orchestrator calls after the prompt
/// layer has validated every figure. The checks here guard against caller
/// bugs, not bad user input: a wrong record count or a negative figure means
/// the prompt layer was bypassed.
pub fn submit_driver(
    profile: DriverProfile,
    records: &[DailyRecord],
    thresholds: &RatingThresholds,
) -> Result<WeeklySummary, MetricsError> {
    if records.len() != DAYS_PER_WEEK {
        return Err(MetricsError::InvalidInput(format!(
            "expected {} daily records, got {}",
            DAYS_PER_WEEK,
            records.len()
        )));
    }
    if !profile.weekly_budget.is_finite() || profile.weekly_budget < 0.0 {
        return Err(MetricsError::InvalidInput(format!(
            "weekly budget must be non-negative, got {}",
            profile.weekly_budget
        )));
    }
    if !profile.total_distance_km.is_finite() || profile.total_distance_km <= 0.0 {
        return Err(MetricsError::InvalidInput(format!(
            "total distance must be positive, got {}",
            profile.total_distance_km
        )));
    }
    for (i, record) in records.iter().enumerate() {
        if !record.fuel_cost.is_finite() || record.fuel_cost < 0.0 {
            return Err(MetricsError::InvalidInput(format!(
                "day {} fuel cost must be non-negative, got {}",
                i + 1,
                record.fuel_cost
            )));
        }
        if !record.distance_km.is_finite() || record.distance_km < 0.0 {
            return Err(MetricsError::InvalidInput(format!(
                "day {} distance must be non-negative, got {}",
                i + 1,
                record.distance_km
            )));
        }
    }

    let days: Vec<DayMetrics> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let efficiency = daily_efficiency(record.distance_km, record.fuel_cost);
            DayMetrics {
                day: i + 1,
                fuel_cost: record.fuel_cost,
                distance_km: record.distance_km,
                efficiency,
                label: daily_label(efficiency, thresholds),
            }
        })
        .collect();

    let costs: Vec<f64> = records.iter().map(|r| r.fuel_cost).collect();
    let total = total_fuel_spent(&costs);
    let ratio = overall_efficiency(profile.total_distance_km, total);
    let is_under = under_budget(total, profile.weekly_budget);

    Ok(WeeklySummary {
        average_daily_expense: total / DAYS_PER_WEEK as f64,
        efficiency_ratio: ratio,
        rating: classify_rating(ratio, thresholds),
        under_budget: is_under,
        total_fuel_spent: total,
        driver: profile,
        days,
    })
}
