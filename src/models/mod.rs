//! Core data models
//!
//! Expenses, the unused budget table, money and the calendar month key.

pub mod budget;
pub mod expense;
pub mod filter;
pub mod ids;
pub mod money;
pub mod month;

pub use budget::Budget;
pub use expense::{Expense, ExpenseValidationError, NewExpense};
pub use filter::{parse_date, ExpenseFilter, ALL_CATEGORIES, DATE_FORMAT};
pub use ids::{BudgetId, ExpenseId};
pub use money::{Money, MoneyParseError};
pub use month::YearMonth;
