//! User command implementations

use anyhow::{Context, Result};
use expensex_core::db::Database;
use expensex_core::models::{BudgetUpdate, NewUser};

use super::{truncate, CLI_ACTOR};

pub fn cmd_users_list(db: &Database) -> Result<()> {
    let users = db.list_users()?;

    if users.is_empty() {
        println!("No users found. Add one with:");
        println!("  expensex users add --name NAME --email EMAIL --budget 10000");
        return Ok(());
    }

    println!();
    println!("👤 Users");
    println!("   ─────────────────────────────────────────────────────────────");

    for user in users {
        println!(
            "   [{}] {:<20} │ {:<28} │ budget ₹{:.2}",
            user.id,
            truncate(&user.name, 20),
            truncate(&user.email, 28),
            user.budget
        );
    }

    Ok(())
}

pub fn cmd_users_add(
    db: &Database,
    name: &str,
    email: &str,
    budget: f64,
    savings_goal: f64,
) -> Result<()> {
    let user = db
        .create_user(&NewUser {
            name: name.to_string(),
            email: email.to_string(),
            budget,
            savings_goal,
        })
        .context("Failed to create user")?;

    db.log_audit(
        CLI_ACTOR,
        "create",
        Some("user"),
        Some(user.id),
        Some(&format!("email={}", user.email)),
    )?;

    println!("✅ Created user '{}' (id {})", user.name, user.id);
    Ok(())
}

pub fn cmd_users_show(db: &Database, id: i64) -> Result<()> {
    let user = db
        .get_user(id)?
        .ok_or_else(|| anyhow::anyhow!("User {} not found", id))?;

    println!();
    println!("👤 {} <{}>", user.name, user.email);
    println!("   Budget:       ₹{:.2}", user.budget);
    println!("   Savings goal: ₹{:.2}", user.savings_goal);
    println!("   Joined:       {}", user.created_at.format("%Y-%m-%d"));

    Ok(())
}

pub fn cmd_users_budget(db: &Database, id: i64, budget: f64, savings_goal: f64) -> Result<()> {
    let user = db
        .update_budget(
            id,
            &BudgetUpdate {
                budget,
                savings_goal,
            },
        )
        .context("Failed to update budget")?;

    db.log_audit(
        CLI_ACTOR,
        "update_budget",
        Some("user"),
        Some(id),
        Some(&format!(
            "budget={:.2}, savings_goal={:.2}",
            user.budget, user.savings_goal
        )),
    )?;

    println!(
        "✅ Budget for '{}' set to ₹{:.2} (savings goal ₹{:.2})",
        user.name, user.budget, user.savings_goal
    );
    Ok(())
}

pub fn cmd_users_delete(db: &Database, id: i64) -> Result<()> {
    if !db.delete_user(id)? {
        anyhow::bail!("User {} not found", id);
    }

    db.log_audit(CLI_ACTOR, "delete", Some("user"), Some(id), None)?;

    println!("🗑️  Deleted user {} and their expenses", id);
    Ok(())
}
