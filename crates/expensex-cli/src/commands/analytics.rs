//! Analytics and recommendation commands

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use expensex_core::analytics::{
    compute_recommendations, AnalyticsResult, ExpenseRecord, Recommendation, Severity,
};
use expensex_core::db::Database;

/// Run the engine over a user's current month
///
/// `day` overrides the elapsed-day count used for the projection.
pub fn analyze_user(
    db: &Database,
    user_id: i64,
    today: NaiveDate,
    day: Option<u32>,
) -> Result<(AnalyticsResult, Vec<Recommendation>)> {
    let user = db
        .get_user(user_id)?
        .ok_or_else(|| anyhow::anyhow!("User {} not found", user_id))?;

    let records: Vec<ExpenseRecord> = db
        .list_expenses_for_month(user_id, today)?
        .iter()
        .map(ExpenseRecord::from)
        .collect();

    let day_of_month = day.unwrap_or_else(|| today.day());
    Ok(compute_recommendations(
        user.budget,
        user.savings_goal,
        day_of_month,
        &records,
    )?)
}

pub fn cmd_analytics(
    db: &Database,
    user_id: i64,
    today: NaiveDate,
    day: Option<u32>,
    json: bool,
) -> Result<()> {
    let (analytics, _) = analyze_user(db, user_id, today, day)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analytics)?);
        return Ok(());
    }

    println!();
    println!("📈 Analytics for {}", today.format("%B %Y"));
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Spent:      ₹{:.2}", analytics.total_spent);
    println!("   Remaining:  ₹{:.2}", analytics.remaining);
    println!("   Budget used: {:.2}%", analytics.percent_used);
    println!("   Projected:  ₹{:.2}", analytics.projected_monthly_spending);

    if !analytics.top_categories.is_empty() {
        println!();
        println!("   Top categories:");
        for entry in &analytics.top_categories {
            println!("     {:<16} ₹{:.2}", entry.category, entry.amount);
        }
    }

    Ok(())
}

pub fn cmd_recommend(
    db: &Database,
    user_id: i64,
    today: NaiveDate,
    day: Option<u32>,
    json: bool,
) -> Result<()> {
    let (_, recommendations) = analyze_user(db, user_id, today, day)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    println!();
    println!("💡 Recommendations");
    println!("   ─────────────────────────────────────────────────────────────");

    for rec in &recommendations {
        let icon = match rec.severity {
            Severity::Critical => "🚨",
            Severity::Warning => "⚠️ ",
            Severity::Info => "ℹ️ ",
            Severity::Success => "✅",
        };
        println!("   {} {}", icon, rec.message);
    }

    Ok(())
}
