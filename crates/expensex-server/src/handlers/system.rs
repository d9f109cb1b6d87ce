//! Service information handlers

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Service name reported by the info endpoints
pub const SERVICE_NAME: &str = "expensex";

/// Response for GET /
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// Response for GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

/// GET / - Welcome message and endpoint list
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the Expense X API".to_string(),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            "GET /health",
            "POST /api/user",
            "GET /api/user/:id",
            "DELETE /api/user/:id",
            "PUT /api/user/:id/budget",
            "GET /api/user/:id/expenses",
            "POST /api/user/:id/expenses",
            "GET /api/expenses/:id",
            "DELETE /api/expenses/:id",
            "GET /api/user/:id/analytics",
            "GET /api/user/:id/recommendations",
            "GET /api/audit",
        ],
    })
}

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: Utc::now().to_rfc3339(),
    })
}
