//! Analytics & Recommendation Engine
//!
//! Turns a user's budget, savings goal and the current month's expenses into
//! a spend summary and an ordered list of recommendations. Every stage is a
//! pure function; callers supply the day of month so nothing here reads the
//! clock.
//!
//! ## Stages
//!
//! - **Aggregator** - totals per category and the top five categories
//! - **Calculator** - remaining budget, percent used, month-end projection
//! - **Recommendations** - ordered threshold rules plus an `all_good` fallback
//!
//! ## Usage
//!
//! ```rust,ignore
//! use expensex_core::analytics::{compute_recommendations, ExpenseRecord};
//!
//! let expenses = vec![ExpenseRecord::new(500.0, "food")];
//! let (analytics, recommendations) = compute_recommendations(1000.0, 0.0, 10, &expenses)?;
//! ```

pub mod aggregator;
pub mod calculator;
pub mod recommendations;
pub mod types;

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

pub use aggregator::{aggregate, Aggregation, TOP_CATEGORY_LIMIT};
pub use calculator::{calculate, round2};
pub use recommendations::{RecommendationEngine, Rule};
pub use types::{
    AnalyticsResult, BudgetProfile, CategoryTotal, ExpenseRecord, Recommendation,
    RecommendationKind, Severity, DEFAULT_CATEGORY,
};

/// Build the analytics summary for one month of expenses
pub fn analyze(
    profile: &BudgetProfile,
    day_of_month: u32,
    expenses: &[ExpenseRecord],
) -> Result<AnalyticsResult> {
    validate_inputs(profile, day_of_month, expenses)?;
    Ok(calculate(aggregate(expenses), profile.budget, day_of_month))
}

/// Analytics summary plus ordered recommendations
pub fn compute_recommendations(
    budget: f64,
    savings_goal: f64,
    day_of_month: u32,
    expenses: &[ExpenseRecord],
) -> Result<(AnalyticsResult, Vec<Recommendation>)> {
    let profile = BudgetProfile {
        budget,
        savings_goal,
    };
    let analytics = analyze(&profile, day_of_month, expenses)?;
    let recommendations = RecommendationEngine::new().recommend(&analytics, &profile);

    tracing::debug!(
        expenses = expenses.len(),
        total_spent = analytics.total_spent,
        percent_used = analytics.percent_used,
        recommendations = recommendations.len(),
        "Computed recommendations"
    );

    Ok((analytics, recommendations))
}

/// First day of `today`'s month through `today`, inclusive
pub fn current_month_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today.with_day(1).unwrap_or(today), today)
}

fn validate_inputs(
    profile: &BudgetProfile,
    day_of_month: u32,
    expenses: &[ExpenseRecord],
) -> Result<()> {
    if !(1..=31).contains(&day_of_month) {
        return Err(Error::InvalidArgument(format!(
            "Day of month must be between 1 and 31, got {}",
            day_of_month
        )));
    }
    if !profile.budget.is_finite() || profile.budget < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "Budget must be non-negative, got {}",
            profile.budget
        )));
    }
    if !profile.savings_goal.is_finite() || profile.savings_goal < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "Savings goal must be non-negative, got {}",
            profile.savings_goal
        )));
    }
    if let Some(bad) = expenses
        .iter()
        .find(|e| !e.amount.is_finite() || e.amount < 0.0)
    {
        return Err(Error::InvalidArgument(format!(
            "Expense amount must be non-negative, got {} in {}",
            bad.amount,
            bad.category_label()
        )));
    }
    Ok(())
}
