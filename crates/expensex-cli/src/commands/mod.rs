//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init) and shared utilities (open_db, today)
//! - `analytics` - Monthly analytics and recommendations
//! - `expenses` - Expense commands (list, add, delete)
//! - `serve` - Web server command
//! - `status` - Database status
//! - `users` - User commands (list, add, show, budget, delete)

pub mod analytics;
pub mod core;
pub mod expenses;
pub mod serve;
pub mod status;
pub mod users;

// Re-export command functions for main.rs
pub use analytics::*;
pub use core::*;
pub use expenses::*;
pub use serve::*;
pub use status::*;
pub use users::*;

/// Actor recorded in the audit log for CLI changes
pub const CLI_ACTOR: &str = "cli";

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
