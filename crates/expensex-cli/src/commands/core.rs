//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `today` - Local date used for the current-month window
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use expensex_core::db::Database;
use tracing::debug;

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    debug!(path = path_str, encrypted = !no_encrypt, "Opening database");
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn cmd_init(db_path: &Path, demo: bool, no_encrypt: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path, no_encrypt)?;

    if demo {
        let user = db
            .seed_demo_data(today())
            .context("Failed to seed demo data")?;
        println!(
            "   Seeded demo user '{}' (id {}, {})",
            user.name, user.id, user.email
        );
    }

    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else {
        println!("   🔒 Encryption: ENABLED");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add a user: expensex users add --name NAME --email EMAIL --budget 10000");
    println!("  2. Record spending: expensex expenses add --user 1 --name Lunch --amount 120");
    println!("  3. Get advice: expensex recommend --user 1");

    Ok(())
}
