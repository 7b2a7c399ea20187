//! Display formatting for terminal output
//!
//! Plain-text tables for the expense list and the dashboard aggregates.

pub mod expense;
pub mod report;

pub use expense::{format_expense_list, format_expense_row};
pub use report::format_dashboard;
