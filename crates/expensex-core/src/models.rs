//! Domain models for Expense X

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{BudgetProfile, ExpenseRecord, DEFAULT_CATEGORY};
use crate::error::{Error, Result};

/// A user with a monthly budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Monthly spending ceiling (0 = no budget set)
    pub budget: f64,
    pub savings_goal: f64,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The budget fields the analytics engine reads
    pub fn budget_profile(&self) -> BudgetProfile {
        BudgetProfile {
            budget: self.budget,
            savings_goal: self.savings_goal,
        }
    }
}

/// Request body for creating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub savings_goal: f64,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidArgument("Name must not be empty".to_string()));
        }
        if !self.email.contains('@') {
            return Err(Error::InvalidArgument(format!(
                "Invalid email address: {}",
                self.email
            )));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(Error::InvalidArgument(
                "Budget must be non-negative".to_string(),
            ));
        }
        if !self.savings_goal.is_finite() || self.savings_goal < 0.0 {
            return Err(Error::InvalidArgument(
                "Savings goal must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Request body for updating a user's budget and savings goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    /// Monthly budget; must be positive
    pub budget: f64,
    #[serde(default)]
    pub savings_goal: f64,
}

impl BudgetUpdate {
    pub fn validate(&self) -> Result<()> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(Error::InvalidArgument(
                "Monthly budget must be positive".to_string(),
            ));
        }
        if !self.savings_goal.is_finite() || self.savings_goal < 0.0 {
            return Err(Error::InvalidArgument(
                "Savings goal must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Expense> for ExpenseRecord {
    fn from(expense: &Expense) -> Self {
        ExpenseRecord {
            amount: expense.amount,
            category: expense.category.clone(),
            occurred_at: Some(expense.date),
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Request body for creating an expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default = "default_category")]
    pub category: String,
    /// Defaults to today when omitted
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "Expense name must not be empty".to_string(),
            ));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::InvalidArgument(
                "Expense amount must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Category label with blanks normalized to "other"
    pub fn normalized_category(&self) -> String {
        let category = self.category.trim();
        if category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category.to_lowercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense_defaults() {
        let expense: NewExpense = serde_json::from_str(r#"{"name": "Lunch"}"#).unwrap();
        assert_eq!(expense.amount, 0.0);
        assert_eq!(expense.category, "other");
        assert!(expense.date.is_none());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_new_expense_rejects_negative_amount() {
        let expense = NewExpense {
            name: "Refund".to_string(),
            amount: -5.0,
            category: "food".to_string(),
            date: None,
            notes: None,
        };
        assert!(matches!(expense.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_normalized_category() {
        let mut expense: NewExpense =
            serde_json::from_str(r#"{"name": "Bus", "category": "  "}"#).unwrap();
        assert_eq!(expense.normalized_category(), "other");

        expense.category = "Transport".to_string();
        assert_eq!(expense.normalized_category(), "transport");
    }

    #[test]
    fn test_budget_update_validation() {
        let ok = BudgetUpdate {
            budget: 1000.0,
            savings_goal: 0.0,
        };
        assert!(ok.validate().is_ok());

        let zero_budget = BudgetUpdate {
            budget: 0.0,
            savings_goal: 0.0,
        };
        assert!(zero_budget.validate().is_err());

        let negative_goal = BudgetUpdate {
            budget: 100.0,
            savings_goal: -1.0,
        };
        assert!(negative_goal.validate().is_err());
    }

    #[test]
    fn test_budget_update_camel_case() {
        let update: BudgetUpdate =
            serde_json::from_str(r#"{"budget": 500, "savingsGoal": 50}"#).unwrap();
        assert_eq!(update.budget, 500.0);
        assert_eq!(update.savings_goal, 50.0);
    }

    #[test]
    fn test_new_user_validation() {
        let user = NewUser {
            name: "Demo".to_string(),
            email: "not-an-email".to_string(),
            budget: 0.0,
            savings_goal: 0.0,
        };
        assert!(user.validate().is_err());
    }
}
