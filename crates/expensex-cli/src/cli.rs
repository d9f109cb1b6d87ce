//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Expense X - Track spending against a monthly budget
#[derive(Parser)]
#[command(name = "expensex")]
#[command(about = "Budget tracker with spend analytics and smart recommendations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "expensex.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set EXPENSEX_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init {
        /// Seed a demo user with sample expenses
        #[arg(long)]
        demo: bool,
    },

    /// Show database status
    Status,

    /// Manage users
    Users {
        #[command(subcommand)]
        action: Option<UsersAction>,
    },

    /// Manage expenses
    Expenses {
        #[command(subcommand)]
        action: ExpensesAction,
    },

    /// Show this month's spend analytics for a user
    Analytics {
        /// User ID
        #[arg(short, long)]
        user: i64,

        /// Day of month to project from (defaults to today)
        #[arg(long)]
        day: Option<u32>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show smart recommendations for a user
    Recommend {
        /// User ID
        #[arg(short, long)]
        user: i64,

        /// Day of month to project from (defaults to today)
        #[arg(long)]
        day: Option<u32>,

        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[derive(Subcommand)]
pub enum UsersAction {
    /// List all users (default)
    List,

    /// Add a user
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address (must be unique)
        #[arg(short, long)]
        email: String,

        /// Monthly budget
        #[arg(short, long, default_value = "0")]
        budget: f64,

        /// Monthly savings goal
        #[arg(short, long, default_value = "0")]
        savings_goal: f64,
    },

    /// Show a user
    Show {
        /// User ID
        id: i64,
    },

    /// Set a user's budget and savings goal
    Budget {
        /// User ID
        id: i64,

        /// Monthly budget (must be positive)
        #[arg(short, long)]
        budget: f64,

        /// Monthly savings goal
        #[arg(short, long, default_value = "0")]
        savings_goal: f64,
    },

    /// Delete a user and their expenses
    Delete {
        /// User ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ExpensesAction {
    /// List a user's expenses, newest first
    List {
        /// User ID
        #[arg(short, long)]
        user: i64,

        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive search over name and notes
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Record an expense
    Add {
        /// User ID
        #[arg(short, long)]
        user: i64,

        /// What was bought
        #[arg(short, long)]
        name: String,

        /// Amount spent
        #[arg(short, long)]
        amount: f64,

        /// Category (defaults to "other")
        #[arg(short, long, default_value = "other")]
        category: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: i64,
    },
}
