//! Budget usage and month-end projection

use super::aggregator::Aggregation;
use super::types::AnalyticsResult;

/// Days used to extrapolate the average daily spend to a month
pub const PROJECTION_DAYS: f64 = 30.0;

/// Round to two decimal places
///
/// Exact ties go to the even neighbour, so `0.125` becomes `0.12`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Combine aggregated totals with the budget and the current day of month
pub fn calculate(aggregation: Aggregation, budget: f64, day_of_month: u32) -> AnalyticsResult {
    let total_spent = aggregation.total_spent;
    let remaining = budget - total_spent;

    let percent_used = if budget > 0.0 {
        total_spent / budget * 100.0
    } else {
        0.0
    };

    let avg_daily = if day_of_month > 0 {
        total_spent / f64::from(day_of_month)
    } else {
        0.0
    };

    AnalyticsResult {
        total_spent,
        remaining,
        percent_used: round2(percent_used),
        category_breakdown: aggregation.category_breakdown,
        top_categories: aggregation.top_categories,
        projected_monthly_spending: round2(avg_daily * PROJECTION_DAYS),
    }
}
