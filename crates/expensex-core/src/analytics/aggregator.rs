//! Expense aggregation
//!
//! Reduces a month of expense records into a total, per-category totals in
//! first-seen order, and a ranked list of the largest categories.

use std::cmp::Ordering;

use super::types::{CategoryTotal, ExpenseRecord};

/// Maximum number of entries in `top_categories`
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Output of [`aggregate`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub total_spent: f64,
    pub category_breakdown: Vec<CategoryTotal>,
    pub top_categories: Vec<CategoryTotal>,
}

/// Aggregate expense records by category
pub fn aggregate(expenses: &[ExpenseRecord]) -> Aggregation {
    let mut total_spent = 0.0;
    let mut breakdown: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        total_spent += expense.amount;

        let label = expense.category_label();
        match breakdown.iter_mut().find(|c| c.category == label) {
            Some(entry) => entry.amount += expense.amount,
            None => breakdown.push(CategoryTotal {
                category: label.to_string(),
                amount: expense.amount,
            }),
        }
    }

    Aggregation {
        total_spent,
        top_categories: rank_categories(&breakdown, TOP_CATEGORY_LIMIT),
        category_breakdown: breakdown,
    }
}

/// Sort by amount descending and keep the first `limit`.
///
/// `sort_by` is stable, so equal amounts stay in breakdown order.
pub fn rank_categories(breakdown: &[CategoryTotal], limit: usize) -> Vec<CategoryTotal> {
    let mut ranked = breakdown.to_vec();
    ranked.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);
    ranked
}
