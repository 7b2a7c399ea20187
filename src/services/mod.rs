//! Service layer
//!
//! Business logic on top of the storage layer: input coercion and
//! validation before anything is persisted.

pub mod expense;

pub use expense::{CreateExpenseInput, ExpenseService};
