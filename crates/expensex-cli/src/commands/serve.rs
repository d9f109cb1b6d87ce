//! Server command implementation

use std::path::Path;

use anyhow::Result;
use expensex_server::{parse_origins, ServerConfig, ALLOWED_ORIGINS_ENV};

use super::open_db;

pub async fn cmd_serve(db_path: &Path, host: &str, port: u16, no_encrypt: bool) -> Result<()> {
    println!("🚀 Starting Expense X web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);

    let allowed_origins = parse_origins(&std::env::var(ALLOWED_ORIGINS_ENV).unwrap_or_default());
    if allowed_origins.is_empty() {
        println!("   🌐 CORS: any origin ({} to restrict)", ALLOWED_ORIGINS_ENV);
    } else {
        println!("   🌐 CORS: {}", allowed_origins.join(", "));
    }
    if no_encrypt {
        println!("   ⚠️  Encryption DISABLED (--no-encrypt)");
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path, no_encrypt)?;

    let config = ServerConfig { allowed_origins };
    expensex_server::serve_with_config(db, host, port, config).await?;

    Ok(())
}
