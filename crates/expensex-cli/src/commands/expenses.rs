//! Expense command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;
use expensex_core::db::{Database, ExpenseFilter};
use expensex_core::models::NewExpense;

use super::{today, truncate, CLI_ACTOR};

pub fn cmd_expenses_list(
    db: &Database,
    user_id: i64,
    category: Option<&str>,
    search: Option<&str>,
) -> Result<()> {
    let filter = ExpenseFilter::new().category(category).search(search);
    let expenses = db.list_expenses(user_id, &filter)?;

    if expenses.is_empty() {
        println!("No expenses found. Record one with:");
        println!(
            "  expensex expenses add --user {} --name Lunch --amount 120",
            user_id
        );
        return Ok(());
    }

    println!();
    println!("🧾 Expenses");
    println!("   ─────────────────────────────────────────────────────────────");

    for expense in expenses {
        println!(
            "   [{}] {} │ {:>10} │ {:<14} │ {}",
            expense.id,
            expense.date,
            format!("₹{:.2}", expense.amount),
            truncate(&expense.category, 14),
            truncate(&expense.name, 30)
        );
    }

    Ok(())
}

pub fn cmd_expenses_add(
    db: &Database,
    user_id: i64,
    name: &str,
    amount: f64,
    category: &str,
    date: Option<&str>,
    notes: Option<String>,
) -> Result<()> {
    let date = date
        .map(|d| {
            NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", d))
        })
        .transpose()?;

    let expense = db
        .create_expense(
            user_id,
            &NewExpense {
                name: name.to_string(),
                amount,
                category: category.to_string(),
                date,
                notes,
            },
            today(),
        )
        .context("Failed to record expense")?;

    db.log_audit(
        CLI_ACTOR,
        "create",
        Some("expense"),
        Some(expense.id),
        Some(&format!(
            "user_id={}, amount={:.2}, category={}",
            user_id, expense.amount, expense.category
        )),
    )?;

    println!(
        "✅ Recorded ₹{:.2} for '{}' in {} on {} (id {})",
        expense.amount, expense.name, expense.category, expense.date, expense.id
    );
    Ok(())
}

pub fn cmd_expenses_delete(db: &Database, id: i64) -> Result<()> {
    if !db.delete_expense(id)? {
        anyhow::bail!("Expense {} not found", id);
    }

    db.log_audit(CLI_ACTOR, "delete", Some("expense"), Some(id), None)?;

    println!("🗑️  Deleted expense {}", id);
    Ok(())
}
