//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod analytics;
pub mod audit;
pub mod expenses;
pub mod system;
pub mod users;

// Re-export all handlers for use in router
pub use analytics::*;
pub use audit::*;
pub use expenses::*;
pub use system::*;
pub use users::*;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::AppError;

/// Parse a JSON request body, mapping failures to 400
pub(crate) fn parse_json<T: DeserializeOwned>(bytes: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(bytes).map_err(|e| AppError::bad_request(&format!("Invalid JSON: {}", e)))
}
