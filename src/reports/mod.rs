//! Reports
//!
//! Aggregation of expenses and the two view-models built on top of it:
//! the dashboard and the expense list.

pub mod aggregate;
pub mod dashboard;
pub mod expense_list;

pub use aggregate::{
    aggregate_by_category, aggregate_by_month, percentage_shares, CategoryAggregate,
    MonthlyAggregate,
};
pub use dashboard::{build_dashboard, DashboardView};
pub use expense_list::{build_expense_list_view, sort_newest_first, ExpenseListView};
