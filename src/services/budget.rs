//! Budget service
//!
//! Aggregates the in-memory expense ledger into the figures shown on the
//! budget page: total spend, remaining budget, usage against the monthly
//! ceiling and a per-category breakdown.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{HomekeeperError, HomekeeperResult};
use crate::models::{Expense, ExpenseCategory, ExpenseDraft, Money};

/// Spend within a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category: ExpenseCategory,
    pub total: Money,
    pub expense_count: usize,
    /// Share of total spending, 0-100
    pub share_percent: f64,
}

/// Budget overview for the current list of expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub monthly_budget: Money,
    pub total_spent: Money,
    /// May be negative once the ceiling is exceeded
    pub remaining: Money,
    /// Categories with non-zero spend, in category display order
    pub by_category: Vec<CategorySpending>,
}

impl BudgetSummary {
    /// Aggregate `expenses` against a monthly ceiling
    pub fn compute(expenses: &[Expense], monthly_budget: Money) -> Self {
        let total_spent: Money = expenses.iter().map(|e| e.amount).sum();

        let by_category = ExpenseCategory::all()
            .iter()
            .filter_map(|&category| {
                let (total, expense_count) = expenses
                    .iter()
                    .filter(|e| e.category == category)
                    .fold((Money::zero(), 0), |(sum, n), e| (sum + e.amount, n + 1));

                if total.is_zero() {
                    return None;
                }

                let share_percent = if total_spent.is_zero() {
                    0.0
                } else {
                    total.won() as f64 / total_spent.won() as f64 * 100.0
                };

                Some(CategorySpending {
                    category,
                    total,
                    expense_count,
                    share_percent,
                })
            })
            .collect();

        Self {
            monthly_budget,
            total_spent,
            remaining: monthly_budget - total_spent,
            by_category,
        }
    }

    /// Usage as a percentage of the ceiling, unbounded above 100
    ///
    /// Returns `None` when the ceiling is zero.
    pub fn usage_percent(&self) -> Option<f64> {
        if self.monthly_budget.is_zero() {
            None
        } else {
            Some(self.total_spent.won() as f64 / self.monthly_budget.won() as f64 * 100.0)
        }
    }

    /// Like [`usage_percent`](Self::usage_percent) but reports a zero ceiling as an error
    pub fn try_usage_percent(&self) -> HomekeeperResult<f64> {
        self.usage_percent().ok_or_else(|| {
            HomekeeperError::Budget("monthly budget is zero; usage is undefined".into())
        })
    }

    /// Usage rounded to one decimal place, e.g. "58.0%"
    pub fn usage_label(&self) -> String {
        match self.usage_percent() {
            Some(pct) => format!("{:.1}%", pct),
            None => "-".to_string(),
        }
    }

    /// Width of the progress bar fill, clamped to 100
    pub fn progress_fill(&self) -> f64 {
        match self.usage_percent() {
            Some(pct) => pct.clamp(0.0, 100.0),
            None if self.total_spent.is_positive() => 100.0,
            None => 0.0,
        }
    }

    /// True once usage passes `threshold_percent`
    ///
    /// Any spending against a zero ceiling counts as at risk.
    pub fn is_at_risk(&self, threshold_percent: f64) -> bool {
        match self.usage_percent() {
            Some(pct) => pct > threshold_percent,
            None => self.total_spent.is_positive(),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Append-only list of expenses owned by the budget page
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Validate a form submission and append it
    pub fn add(&mut self, draft: &ExpenseDraft, today: NaiveDate) -> HomekeeperResult<&Expense> {
        let expense = draft.validate(today)?;
        self.expenses
            .iter()
            .try_fold(expense.amount, |total, e| total.checked_add(e.amount))
            .ok_or_else(|| HomekeeperError::Budget("total spending is too large to record".into()))?;

        info!(
            id = %expense.id,
            amount = expense.amount.won(),
            category = expense.category.code(),
            "expense recorded"
        );
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Expenses within an inclusive date range
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect()
    }

    pub fn summary(&self, monthly_budget: Money) -> BudgetSummary {
        let summary = BudgetSummary::compute(&self.expenses, monthly_budget);
        debug!(
            total = summary.total_spent.won(),
            remaining = summary.remaining.won(),
            "budget summary computed"
        );
        summary
    }
}
