//! Expense X CLI - Budget tracker with smart recommendations
//!
//! Usage:
//!   expensex init --demo                 Initialize database with a demo user
//!   expensex users add --name N --email E
//!   expensex expenses add --user 1 --name Lunch --amount 120
//!   expensex recommend --user 1          Show smart recommendations
//!   expensex serve --port 3000           Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init { demo } => commands::cmd_init(&cli.db, demo, cli.no_encrypt),
        Commands::Status => commands::cmd_status(&cli.db, cli.no_encrypt),
        Commands::Users { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None | Some(UsersAction::List) => commands::cmd_users_list(&db),
                Some(UsersAction::Add {
                    name,
                    email,
                    budget,
                    savings_goal,
                }) => commands::cmd_users_add(&db, &name, &email, budget, savings_goal),
                Some(UsersAction::Show { id }) => commands::cmd_users_show(&db, id),
                Some(UsersAction::Budget {
                    id,
                    budget,
                    savings_goal,
                }) => commands::cmd_users_budget(&db, id, budget, savings_goal),
                Some(UsersAction::Delete { id }) => commands::cmd_users_delete(&db, id),
            }
        }
        Commands::Expenses { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                ExpensesAction::List {
                    user,
                    category,
                    search,
                } => {
                    commands::cmd_expenses_list(&db, user, category.as_deref(), search.as_deref())
                }
                ExpensesAction::Add {
                    user,
                    name,
                    amount,
                    category,
                    date,
                    notes,
                } => commands::cmd_expenses_add(
                    &db,
                    user,
                    &name,
                    amount,
                    &category,
                    date.as_deref(),
                    notes,
                ),
                ExpensesAction::Delete { id } => commands::cmd_expenses_delete(&db, id),
            }
        }
        Commands::Analytics { user, day, json } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_analytics(&db, user, commands::today(), day, json)
        }
        Commands::Recommend { user, day, json } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            commands::cmd_recommend(&db, user, commands::today(), day, json)
        }
        Commands::Serve { port, host } => {
            commands::cmd_serve(&cli.db, &host, port, cli.no_encrypt).await
        }
    }
}
