//! User management handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_json;
use crate::{AppError, AppState, MessageResponse, API_ACTOR};
use expensex_core::models::{BudgetUpdate, NewUser, User};

/// POST /api/user - Create a user
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), AppError> {
    let req: NewUser = parse_json(&body)?;
    let user = state.db.create_user(&req)?;

    state.db.log_audit(
        API_ACTOR,
        "create",
        Some("user"),
        Some(user.id),
        Some(&format!("email={}", user.email)),
    )?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/user/:id - Get a single user
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = state
        .db
        .get_user(id)?
        .ok_or_else(|| AppError::not_found(&format!("User {} not found", id)))?;

    state
        .db
        .log_audit(API_ACTOR, "get", Some("user"), Some(id), None)?;

    Ok(Json(user))
}

/// PUT /api/user/:id/budget - Set budget and savings goal
pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<User>, AppError> {
    let req: BudgetUpdate = parse_json(&body)?;
    let user = state.db.update_budget(id, &req)?;

    state.db.log_audit(
        API_ACTOR,
        "update_budget",
        Some("user"),
        Some(id),
        Some(&format!(
            "budget={:.2}, savings_goal={:.2}",
            user.budget, user.savings_goal
        )),
    )?;

    Ok(Json(user))
}

/// DELETE /api/user/:id - Delete a user and their expenses
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.db.delete_user(id)? {
        return Err(AppError::not_found(&format!("User {} not found", id)));
    }

    state
        .db
        .log_audit(API_ACTOR, "delete", Some("user"), Some(id), None)?;

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
