//! Expense X Web Server
//!
//! Axum-based REST API for users, expenses, monthly analytics and
//! smart recommendations.
//!
//! - CORS open to any origin unless `allowed_origins` is configured
//! - Audit logging for all API access (reads and writes)
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

use expensex_core::db::Database;

mod handlers;

/// Environment variable for comma-separated CORS origins
pub const ALLOWED_ORIGINS_ENV: &str = "EXPENSEX_ALLOWED_ORIGINS";

/// Maximum audit log page size
pub const MAX_AUDIT_LIMIT: i64 = 1000;

/// Actor recorded in the audit log for API requests
pub const API_ACTOR: &str = "api";

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = any origin)
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Read configuration from the environment
    pub fn from_env() -> Self {
        Self {
            allowed_origins: parse_origins(&std::env::var(ALLOWED_ORIGINS_ENV).unwrap_or_default()),
        }
    }
}

/// Parse a comma-separated origin list, skipping blanks
pub fn parse_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Shared application state
pub struct AppState {
    pub db: Database,
}

/// Today's date in local time; the analytics window ends here
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Message response
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create the application router
pub fn create_router(db: Database, config: ServerConfig) -> Router {
    let state = Arc::new(AppState { db });

    let api_routes = Router::new()
        // Users
        .route("/user", post(handlers::create_user))
        .route(
            "/user/:id",
            get(handlers::get_user).delete(handlers::delete_user),
        )
        .route("/user/:id/budget", put(handlers::update_budget))
        // Expenses
        .route(
            "/user/:id/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            "/expenses/:id",
            get(handlers::get_expense).delete(handlers::delete_expense),
        )
        // Analytics
        .route("/user/:id/analytics", get(handlers::get_analytics))
        .route(
            "/user/:id/recommendations",
            get(handlers::get_recommendations),
        )
        // Audit
        .route("/audit", get(handlers::list_audit_log));

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                )),
        )
}

/// Start the server
pub async fn serve(db: Database, host: &str, port: u16) -> anyhow::Result<()> {
    serve_with_config(db, host, port, ServerConfig::from_env()).await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    db: Database,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if config.allowed_origins.is_empty() {
        info!("CORS: any origin allowed (set {} to restrict)", ALLOWED_ORIGINS_ENV);
    } else {
        info!(origins = ?config.allowed_origins, "CORS: restricted origins");
    }

    let app = create_router(db, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn conflict(msg: &str) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<expensex_core::Error> for AppError {
    fn from(err: expensex_core::Error) -> Self {
        use expensex_core::Error;

        match err {
            Error::InvalidArgument(msg) | Error::InvalidData(msg) => Self::bad_request(&msg),
            Error::NotFound(msg) => Self::not_found(&msg),
            Error::Conflict(msg) => Self::conflict(&msg),
            other => Self::internal(other),
        }
    }
}

#[cfg(test)]
mod tests;
