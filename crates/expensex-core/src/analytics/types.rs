//! Core types for the analytics engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category label used when an expense has none
pub const DEFAULT_CATEGORY: &str = "other";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A read-only snapshot of one expense, already filtered to the current month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(default)]
    pub amount: f64,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub occurred_at: Option<NaiveDate>,
}

impl ExpenseRecord {
    pub fn new(amount: f64, category: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            occurred_at: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.occurred_at = Some(date);
        self
    }

    /// Category key used for aggregation ("other" when blank)
    pub fn category_label(&self) -> &str {
        if self.category.trim().is_empty() {
            DEFAULT_CATEGORY
        } else {
            &self.category
        }
    }
}

/// Budget fields of a user record
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProfile {
    /// Monthly ceiling; 0 means no budget is set
    pub budget: f64,
    pub savings_goal: f64,
}

/// Total spend for a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Spend summary for the current month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResult {
    pub total_spent: f64,
    /// budget - total_spent; negative when over budget
    pub remaining: f64,
    /// Rounded to 2 decimals; 0 when no budget is set
    pub percent_used: f64,
    /// Per-category totals in first-seen order
    pub category_breakdown: Vec<CategoryTotal>,
    /// Up to five categories by amount, descending
    pub top_categories: Vec<CategoryTotal>,
    /// Linear month-end projection, rounded to 2 decimals
    pub projected_monthly_spending: f64,
}

/// Kinds of recommendation the engine can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    BudgetExceeded,
    BudgetWarning,
    BudgetAlert,
    CategoryAlert,
    SavingsAchieved,
    ProjectionWarning,
    AllGood,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKind::BudgetExceeded => "budget_exceeded",
            RecommendationKind::BudgetWarning => "budget_warning",
            RecommendationKind::BudgetAlert => "budget_alert",
            RecommendationKind::CategoryAlert => "category_alert",
            RecommendationKind::SavingsAchieved => "savings_achieved",
            RecommendationKind::ProjectionWarning => "projection_warning",
            RecommendationKind::AllGood => "all_good",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget_exceeded" => Ok(RecommendationKind::BudgetExceeded),
            "budget_warning" => Ok(RecommendationKind::BudgetWarning),
            "budget_alert" => Ok(RecommendationKind::BudgetAlert),
            "category_alert" => Ok(RecommendationKind::CategoryAlert),
            "savings_achieved" => Ok(RecommendationKind::SavingsAchieved),
            "projection_warning" => Ok(RecommendationKind::ProjectionWarning),
            "all_good" => Ok(RecommendationKind::AllGood),
            _ => Err(format!("Unknown recommendation type: {}", s)),
        }
    }
}

/// Urgency attached to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Worth attention soon
    Warning,
    /// Budget already broken
    Critical,
    /// Positive feedback
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
            Severity::Success => "success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "critical" => Ok(Severity::Critical),
            "success" => Ok(Severity::Success),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// An advisory message produced by the recommendation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub message: String,
    pub severity: Severity,
    /// Set only for category alerts
    pub category: Option<String>,
}

impl Recommendation {
    pub fn new(kind: RecommendationKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            severity,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
