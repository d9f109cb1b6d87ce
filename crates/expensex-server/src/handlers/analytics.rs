//! Analytics and recommendation handlers
//!
//! Both endpoints analyze the current month: the 1st of the month
//! through today, with today's day as the elapsed-day count.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Datelike, NaiveDate};

use crate::{today, AppError, AppState, API_ACTOR};
use expensex_core::{
    analytics::{compute_recommendations, AnalyticsResult, ExpenseRecord, Recommendation},
    db::Database,
};

/// Load a user's month and run the engine
fn analyze_month(
    db: &Database,
    user_id: i64,
    today: NaiveDate,
) -> Result<(AnalyticsResult, Vec<Recommendation>), AppError> {
    let user = db
        .get_user(user_id)?
        .ok_or_else(|| AppError::not_found(&format!("User {} not found", user_id)))?;

    let records: Vec<ExpenseRecord> = db
        .list_expenses_for_month(user_id, today)?
        .iter()
        .map(ExpenseRecord::from)
        .collect();

    Ok(compute_recommendations(
        user.budget,
        user.savings_goal,
        today.day(),
        &records,
    )?)
}

/// GET /api/user/:id/analytics - Current month summary
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<AnalyticsResult>, AppError> {
    let (analytics, _) = analyze_month(&state.db, user_id, today())?;

    state.db.log_audit(
        API_ACTOR,
        "analytics",
        Some("user"),
        Some(user_id),
        Some(&format!("percent_used={:.2}", analytics.percent_used)),
    )?;

    Ok(Json(analytics))
}

/// GET /api/user/:id/recommendations - Ordered recommendations for the current month
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let (_, recommendations) = analyze_month(&state.db, user_id, today())?;

    state.db.log_audit(
        API_ACTOR,
        "recommendations",
        Some("user"),
        Some(user_id),
        Some(&format!("count={}", recommendations.len())),
    )?;

    Ok(Json(recommendations))
}
