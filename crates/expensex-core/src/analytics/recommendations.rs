//! Recommendation engine - threshold rules over the analytics summary
//!
//! Rules run in registration order and append what they find. The built-in
//! order is budget threshold, category concentration, savings goal, then
//! projection. When nothing fires, a single `all_good` item is emitted.

use super::types::{
    AnalyticsResult, BudgetProfile, Recommendation, RecommendationKind, Severity,
};

/// percentUsed at or above which the budget is exceeded
pub const BUDGET_EXCEEDED_PERCENT: f64 = 100.0;
pub const BUDGET_WARNING_PERCENT: f64 = 90.0;
pub const BUDGET_ALERT_PERCENT: f64 = 75.0;

/// Share of total spend above which a category is flagged
pub const CATEGORY_ALERT_PERCENT: f64 = 40.0;

/// How many of the top categories are checked for concentration
pub const CATEGORY_ALERT_SCAN: usize = 3;

/// A single rule group
pub trait Rule: Send + Sync {
    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule; may return zero or more items
    fn evaluate(&self, analytics: &AnalyticsResult, profile: &BudgetProfile)
        -> Vec<Recommendation>;
}

/// Emits at most one item, first matching threshold from high to low
pub struct BudgetThresholdRule;

impl Rule for BudgetThresholdRule {
    fn name(&self) -> &'static str {
        "Budget Threshold"
    }

    fn evaluate(&self, analytics: &AnalyticsResult, _: &BudgetProfile) -> Vec<Recommendation> {
        let percent = analytics.percent_used;

        let rec = if percent >= BUDGET_EXCEEDED_PERCENT {
            Recommendation::new(
                RecommendationKind::BudgetExceeded,
                Severity::Critical,
                format!(
                    "You've exceeded your budget by ₹{:.2}. Consider reducing expenses.",
                    analytics.remaining.abs()
                ),
            )
        } else if percent >= BUDGET_WARNING_PERCENT {
            Recommendation::new(
                RecommendationKind::BudgetWarning,
                Severity::Warning,
                format!(
                    "You've used {:.1}% of your budget. Be cautious with spending!",
                    percent
                ),
            )
        } else if percent >= BUDGET_ALERT_PERCENT {
            Recommendation::new(
                RecommendationKind::BudgetAlert,
                Severity::Info,
                format!(
                    "You've used {:.1}% of your budget. Consider limiting non-essential expenses.",
                    percent
                ),
            )
        } else {
            return vec![];
        };

        vec![rec]
    }
}

/// Flags any of the top three categories holding more than 40% of spend
pub struct CategoryConcentrationRule;

impl Rule for CategoryConcentrationRule {
    fn name(&self) -> &'static str {
        "Category Concentration"
    }

    fn evaluate(&self, analytics: &AnalyticsResult, _: &BudgetProfile) -> Vec<Recommendation> {
        analytics
            .top_categories
            .iter()
            .take(CATEGORY_ALERT_SCAN)
            .filter_map(|cat| {
                let category_percent = if analytics.total_spent > 0.0 {
                    cat.amount / analytics.total_spent * 100.0
                } else {
                    0.0
                };

                if category_percent > CATEGORY_ALERT_PERCENT {
                    Some(
                        Recommendation::new(
                            RecommendationKind::CategoryAlert,
                            Severity::Warning,
                            format!(
                                "{} accounts for {:.1}% of spending. Try to reduce this category.",
                                title_case(&cat.category),
                                category_percent
                            ),
                        )
                        .with_category(cat.category.clone()),
                    )
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Positive feedback when what is left covers the savings goal
pub struct SavingsGoalRule;

impl Rule for SavingsGoalRule {
    fn name(&self) -> &'static str {
        "Savings Goal"
    }

    fn evaluate(&self, analytics: &AnalyticsResult, profile: &BudgetProfile) -> Vec<Recommendation> {
        if analytics.remaining > 0.0 && analytics.remaining >= profile.savings_goal {
            vec![Recommendation::new(
                RecommendationKind::SavingsAchieved,
                Severity::Success,
                format!(
                    "Great job! You've reached your savings goal of ₹{:.2}!",
                    profile.savings_goal
                ),
            )]
        } else {
            vec![]
        }
    }
}

/// Warns when the month-end projection is above the budget
pub struct ProjectionRule;

impl Rule for ProjectionRule {
    fn name(&self) -> &'static str {
        "Projection"
    }

    fn evaluate(&self, analytics: &AnalyticsResult, profile: &BudgetProfile) -> Vec<Recommendation> {
        if analytics.projected_monthly_spending > profile.budget {
            let overspend = analytics.projected_monthly_spending - profile.budget;
            vec![Recommendation::new(
                RecommendationKind::ProjectionWarning,
                Severity::Warning,
                format!(
                    "At current rate, you'll exceed budget by ₹{:.2} this month.",
                    overspend
                ),
            )]
        } else {
            vec![]
        }
    }
}

/// Runs rule groups in order and applies the fallback
pub struct RecommendationEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the built-in rules in their fixed order
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(BudgetThresholdRule));
        engine.register(Box::new(CategoryConcentrationRule));
        engine.register(Box::new(SavingsGoalRule));
        engine.register(Box::new(ProjectionRule));

        engine
    }

    /// Append a rule after the existing ones
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluate every rule; never returns an empty list
    pub fn recommend(
        &self,
        analytics: &AnalyticsResult,
        profile: &BudgetProfile,
    ) -> Vec<Recommendation> {
        let mut recommendations = vec![];

        for rule in &self.rules {
            let items = rule.evaluate(analytics, profile);
            tracing::debug!(rule = rule.name(), count = items.len(), "Rule evaluated");
            recommendations.extend(items);
        }

        if recommendations.is_empty() {
            recommendations.push(Recommendation::new(
                RecommendationKind::AllGood,
                Severity::Success,
                "Excellent! You're managing your expenses well. Keep it up!",
            ));
        }

        recommendations
    }
}

/// Uppercase the first letter of each word and lowercase the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}
