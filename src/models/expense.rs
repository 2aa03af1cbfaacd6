//! Expense model
//!
//! An expense is a single recorded outflow. Expenses are only ever appended to
//! an in-memory ledger; they are not edited or removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::ValidationError;

/// Largest single expense the entry form accepts (1조 원)
pub const MAX_EXPENSE: Money = Money::from_won(1_000_000_000_000);

/// Fixed expense categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Rent,
    Utilities,
    Food,
    Transport,
    Communication,
    Shopping,
    Entertainment,
    Etc,
}

impl ExpenseCategory {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Rent,
            Self::Utilities,
            Self::Food,
            Self::Transport,
            Self::Communication,
            Self::Shopping,
            Self::Entertainment,
            Self::Etc,
        ]
    }

    /// Stable identifier used on the command line and in exports
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rent => "rent",
            Self::Utilities => "utilities",
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Communication => "communication",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Etc => "etc",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rent => "월세",
            Self::Utilities => "공과금",
            Self::Food => "식비",
            Self::Transport => "교통비",
            Self::Communication => "통신비",
            Self::Shopping => "쇼핑",
            Self::Entertainment => "여가",
            Self::Etc => "기타",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(s) || c.label() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// A single recorded outflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Positive amount in won
    pub amount: Money,

    pub category: ExpenseCategory,

    pub description: String,

    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        amount: Money,
        category: ExpenseCategory,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category,
            description: description.into(),
            date,
        }
    }
}

/// Raw input from the "add expense" form
///
/// Fields are kept as the user typed them; `validate` turns them into an
/// [`Expense`].
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: String,
    pub description: String,
    /// Left empty, the draft is dated today
    pub date: Option<NaiveDate>,
}

impl ExpenseDraft {
    /// Validate the draft into an expense dated `today` unless a date was given
    pub fn validate(&self, today: NaiveDate) -> Result<Expense, ValidationError> {
        if self.amount.trim().is_empty()
            || self.category.trim().is_empty()
            || self.description.trim().is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        let amount = Money::parse(&self.amount)
            .ok()
            .filter(|amount| amount.is_positive() && *amount <= MAX_EXPENSE)
            .ok_or_else(|| ValidationError::InvalidAmount(self.amount.trim().to_string()))?;

        let category: ExpenseCategory = self.category.parse()?;

        Ok(Expense::new(
            amount,
            category,
            self.description.trim(),
            self.date.unwrap_or(today),
        ))
    }
}
