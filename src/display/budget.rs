//! Budget page views

use serde::Serialize;
use tabled::Tabled;

use super::report::{format_bar, format_header, format_percentage, labeled};
use crate::models::Expense;
use crate::services::{BudgetSummary, CategorySpending};

const LABEL_WIDTH: usize = 14;
const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CategoryRow {
    #[tabled(rename = "카테고리")]
    pub category: String,
    #[tabled(rename = "지출")]
    pub total: String,
    #[tabled(rename = "건수")]
    pub count: usize,
    #[tabled(rename = "비율")]
    pub share: String,
}

impl From<&CategorySpending> for CategoryRow {
    fn from(spending: &CategorySpending) -> Self {
        Self {
            category: spending.category.label().to_string(),
            total: spending.total.format_suffix(),
            count: spending.expense_count,
            share: format_percentage(spending.share_percent),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ExpenseRow {
    #[tabled(rename = "날짜")]
    pub date: String,
    #[tabled(rename = "카테고리")]
    pub category: String,
    #[tabled(rename = "내용")]
    pub description: String,
    #[tabled(rename = "금액")]
    pub amount: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date.to_string(),
            category: expense.category.label().to_string(),
            description: expense.description.clone(),
            amount: expense.amount.format_suffix(),
        }
    }
}

/// Headline figures plus the risk banner when usage passes `alert_percent`
pub fn format_budget_overview(summary: &BudgetSummary, alert_percent: f64) -> String {
    let mut lines = vec![
        format_header("예산 현황"),
        labeled("이번 달 예산", summary.monthly_budget.format_suffix(), LABEL_WIDTH),
        labeled("사용 금액", summary.total_spent.format_suffix(), LABEL_WIDTH),
        labeled("남은 예산", summary.remaining.format_suffix(), LABEL_WIDTH),
        labeled(
            "예산 사용률",
            format!(
                "{} {}",
                summary.usage_label(),
                format_bar(summary.progress_fill(), BAR_WIDTH)
            ),
            LABEL_WIDTH,
        ),
    ];

    if summary.is_at_risk(alert_percent) {
        lines.push(String::new());
        lines.push("예산 초과 위험! 이번 주는 지출을 줄여보세요.".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use chrono::NaiveDate;

    fn expenses(amounts: &[i64]) -> Vec<Expense> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        amounts
            .iter()
            .map(|&a| Expense::new(Money::from_won(a), ExpenseCategory::Rent, "월세", date))
            .collect()
    }

    #[test]
    fn test_overview_shows_usage() {
        let summary = BudgetSummary::compute(&expenses(&[500_000, 80_000]), Money::from_won(1_000_000));
        let text = format_budget_overview(&summary, 80.0);
        assert!(text.contains("58.0%"));
        assert!(text.contains("420,000원"));
        assert!(!text.contains("예산 초과 위험"));
    }

    #[test]
    fn test_overview_warns_above_threshold() {
        let summary = BudgetSummary::compute(&expenses(&[900_000]), Money::from_won(1_000_000));
        assert!(format_budget_overview(&summary, 80.0).contains("예산 초과 위험"));
    }

    #[test]
    fn test_category_row() {
        let summary = BudgetSummary::compute(&expenses(&[500_000]), Money::from_won(1_000_000));
        let row = CategoryRow::from(&summary.by_category[0]);
        assert_eq!(row.category, "월세");
        assert_eq!(row.total, "500,000원");
        assert_eq!(row.share, "100.0%");
    }
}
