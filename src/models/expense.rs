//! Expense model
//!
//! An expense is a single recorded outflow. Expenses are created once and
//! never edited or deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Assigned by the store on insert
    pub id: ExpenseId,

    /// Always positive
    pub amount: Money,

    /// Free-text label, matched case-sensitively
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The day the expense occurred
    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

/// An expense that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: Money,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            description: None,
            date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    /// Check the data model invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        Ok(())
    }

    /// Attach the store-assigned ID
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
            created_at: Utc::now(),
        }
    }
}

impl Expense {
    /// Description or an empty string
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Money),

    #[error("Amount {0} exceeds the maximum of {max}", max = Money::MAX_AMOUNT)]
    AmountTooLarge(Money),

    #[error("Category must not be empty")]
    EmptyCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense_into_expense() {
        let new = NewExpense::new(Money::from_cents(1250), "Food", date(2024, 1, 15))
            .with_description("lunch");
        assert!(new.validate().is_ok());

        let expense = new.into_expense(ExpenseId::new(1));
        assert_eq!(expense.id, ExpenseId::new(1));
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.description_or_empty(), "lunch");
    }

    #[test]
    fn test_empty_description_is_none() {
        let new = NewExpense::new(Money::from_cents(100), "Food", date(2024, 1, 1))
            .with_description("");
        assert_eq!(new.description, None);
    }

    #[test]
    fn test_validation() {
        let zero = NewExpense::new(Money::zero(), "Food", date(2024, 1, 1));
        assert!(matches!(
            zero.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        let blank = NewExpense::new(Money::from_cents(100), "   ", date(2024, 1, 1));
        assert_eq!(blank.validate(), Err(ExpenseValidationError::EmptyCategory));

        let huge = NewExpense::new(Money::from_cents(i64::MAX), "Food", date(2024, 1, 1));
        assert!(matches!(
            huge.validate(),
            Err(ExpenseValidationError::AmountTooLarge(_))
        ));
        let max = NewExpense::new(Money::MAX_AMOUNT, "Food", date(2024, 1, 1));
        assert!(max.validate().is_ok());
    }

    #[test]
    fn test_display() {
        let expense = NewExpense::new(Money::from_cents(500), "Transport", date(2024, 2, 1))
            .into_expense(ExpenseId::new(3));
        assert_eq!(expense.to_string(), "2024-02-01 Transport $5.00");
    }

    #[test]
    fn test_serialization_skips_missing_description() {
        let expense = NewExpense::new(Money::from_cents(500), "Transport", date(2024, 2, 1))
            .into_expense(ExpenseId::new(3));
        let json = serde_json::to_string(&expense).unwrap();
        assert!(!json.contains("description"));

        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expense);
    }
}
