//! Expense handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::parse_json;
use crate::{today, AppError, AppState, MessageResponse, API_ACTOR};
use expensex_core::db::ExpenseFilter;
use expensex_core::models::{Expense, NewExpense};

/// Query parameters for listing expenses
#[derive(Debug, Deserialize)]
pub struct ExpenseQuery {
    /// Filter by category (case-insensitive)
    pub category: Option<String>,
    /// Case-insensitive search over name and notes
    pub search: Option<String>,
}

/// GET /api/user/:id/expenses - List a user's expenses, newest first
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Query(params): Query<ExpenseQuery>,
) -> Result<Json<Vec<Expense>>, AppError> {
    if state.db.get_user(user_id)?.is_none() {
        return Err(AppError::not_found(&format!("User {} not found", user_id)));
    }

    let filter = ExpenseFilter::new()
        .category(params.category.as_deref())
        .search(params.search.as_deref());
    let expenses = state.db.list_expenses(user_id, &filter)?;

    state.db.log_audit(
        API_ACTOR,
        "list",
        Some("expense"),
        None,
        Some(&format!("user_id={}, count={}", user_id, expenses.len())),
    )?;

    Ok(Json(expenses))
}

/// POST /api/user/:id/expenses - Record an expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    body: Bytes,
) -> Result<(StatusCode, Json<Expense>), AppError> {
    let req: NewExpense = parse_json(&body)?;
    let expense = state.db.create_expense(user_id, &req, today())?;

    state.db.log_audit(
        API_ACTOR,
        "create",
        Some("expense"),
        Some(expense.id),
        Some(&format!(
            "user_id={}, amount={:.2}, category={}",
            user_id, expense.amount, expense.category
        )),
    )?;

    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /api/expenses/:id - Get a single expense
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Expense>, AppError> {
    let expense = state
        .db
        .get_expense(id)?
        .ok_or_else(|| AppError::not_found(&format!("Expense {} not found", id)))?;

    state
        .db
        .log_audit(API_ACTOR, "get", Some("expense"), Some(id), None)?;

    Ok(Json(expense))
}

/// DELETE /api/expenses/:id - Delete an expense
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.db.delete_expense(id)? {
        return Err(AppError::not_found(&format!("Expense {} not found", id)));
    }

    state
        .db
        .log_audit(API_ACTOR, "delete", Some("expense"), Some(id), None)?;

    Ok(Json(MessageResponse {
        message: "Expense deleted successfully".to_string(),
    }))
}
