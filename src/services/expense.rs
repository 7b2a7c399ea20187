//! Expense service
//!
//! Turns raw user input (form fields, command-line arguments) into a
//! validated expense and records it.

use chrono::{Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, ExpenseId, Money, NewExpense};
use crate::storage::{ExpenseStore, Storage};

/// Unparsed values for a new expense
#[derive(Debug, Clone, Default)]
pub struct CreateExpenseInput {
    pub amount: String,
    pub category: String,
    pub description: Option<String>,
    /// `YYYY-MM-DD`; today when absent or blank
    pub date: Option<String>,
}

impl CreateExpenseInput {
    pub fn new(amount: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Coerce the raw values into a `NewExpense`
    pub fn parse(&self, today: NaiveDate) -> ExpenseResult<NewExpense> {
        let amount = Money::parse(&self.amount)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(value) => parse_date(value)?,
        };

        let description = self.description.as_deref().map(str::trim).unwrap_or("");

        Ok(NewExpense::new(amount, self.category.trim(), date).with_description(description))
    }
}

/// Service for recording expenses
pub struct ExpenseService<'a, S: ExpenseStore + ?Sized = Storage> {
    store: &'a S,
}

impl<'a, S: ExpenseStore + ?Sized> ExpenseService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Parse, validate and record an expense dated today unless given
    pub fn create(&self, input: &CreateExpenseInput) -> ExpenseResult<ExpenseId> {
        let expense = input.parse(Local::now().date_naive())?;
        self.record(expense)
    }

    /// Validate and record an already-typed expense
    pub fn record(&self, expense: NewExpense) -> ExpenseResult<ExpenseId> {
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let amount = expense.amount;
        let date = expense.date;
        let id = self.store.insert(expense)?;

        tracing::info!(
            target: "expense_tracker",
            id = %id,
            amount = %amount,
            date = %date,
            "expense_inserted"
        );

        Ok(id)
    }
}
