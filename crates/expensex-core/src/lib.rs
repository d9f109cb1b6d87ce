//! Expense X Core Library
//!
//! Shared functionality for the Expense X budget tracker:
//! - Database access and migrations (users, expenses, audit log)
//! - Spend analytics over the current month
//! - Rule-based budget recommendations

pub mod analytics;
pub mod db;
pub mod error;
pub mod models;

pub use analytics::{
    compute_recommendations, AnalyticsResult, BudgetProfile, CategoryTotal, ExpenseRecord,
    Recommendation, RecommendationKind, Severity,
};
pub use db::{AuditEntry, Database};
pub use error::{Error, Result};
