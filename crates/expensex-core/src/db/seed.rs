//! Demo data

use chrono::{Datelike, NaiveDate};
use tracing::info;

use super::Database;
use crate::error::Result;
use crate::models::{NewExpense, NewUser, User};

pub const DEMO_EMAIL: &str = "student@example.com";

/// (name, amount, category, day of month, notes)
const DEMO_EXPENSES: &[(&str, f64, &str, u32, &str)] = &[
    ("Lunch at Canteen", 150.0, "food", 28, "Special thali"),
    ("Bus Pass", 500.0, "transport", 25, "Monthly pass"),
    ("Programming Books", 800.0, "education", 20, "Python and JavaScript books"),
    ("Movie Ticket", 250.0, "entertainment", 15, "Weekend movie"),
    ("Wireless Headphones", 1200.0, "shopping", 10, "Bluetooth earbuds"),
];

impl Database {
    /// Insert the demo user and sample expenses for `today`'s month
    ///
    /// Idempotent: if the demo user exists it is returned unchanged.
    /// Expense days past `today` are clamped to `today`.
    pub fn seed_demo_data(&self, today: NaiveDate) -> Result<User> {
        if let Some(user) = self.get_user_by_email(DEMO_EMAIL)? {
            return Ok(user);
        }

        let user = self.create_user(&NewUser {
            name: "Demo Student".to_string(),
            email: DEMO_EMAIL.to_string(),
            budget: 10_000.0,
            savings_goal: 2_000.0,
        })?;

        for (name, amount, category, day, notes) in DEMO_EXPENSES {
            let day = (*day).min(today.day());
            let date = NaiveDate::from_ymd_opt(today.year(), today.month(), day).unwrap_or(today);
            self.create_expense(
                user.id,
                &NewExpense {
                    name: name.to_string(),
                    amount: *amount,
                    category: category.to_string(),
                    date: Some(date),
                    notes: Some(notes.to_string()),
                },
                today,
            )?;
        }

        info!(user_id = user.id, expenses = DEMO_EXPENSES.len(), "Seeded demo data");
        Ok(user)
    }
}
