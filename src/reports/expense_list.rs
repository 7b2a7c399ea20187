//! Expense list report
//!
//! The filtered expenses newest first, the category selector contents and
//! the filtered total.

use std::cmp::Reverse;

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseFilter, Money};
use crate::storage::ExpenseStore;

#[derive(Debug, Clone)]
pub struct ExpenseListView {
    /// Newest first; same-day expenses ordered by most recently recorded
    pub expenses: Vec<Expense>,
    /// Every category in the store, not only the filtered ones
    pub categories: Vec<String>,
    pub total: Money,
    pub selected_category: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ExpenseListView {
    pub fn build<S: ExpenseStore + ?Sized>(
        store: &S,
        filter: &ExpenseFilter,
    ) -> ExpenseResult<Self> {
        let mut expenses = store.query_filtered(filter)?;
        sort_newest_first(&mut expenses);

        let categories = store.distinct_categories()?.into_iter().collect();
        let total = expenses.iter().map(|e| e.amount).sum();

        Ok(Self {
            expenses,
            categories,
            total,
            selected_category: filter.selected_category().to_string(),
            start_date: filter.start_date,
            end_date: filter.end_date,
        })
    }
}

/// Sort by date descending, then by insertion time descending
pub fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by_key(|e| Reverse((e.date, e.created_at, e.id)));
}

/// Build the expense list view-model
pub fn build_expense_list_view<S: ExpenseStore + ?Sized>(
    store: &S,
    filter: &ExpenseFilter,
) -> ExpenseResult<ExpenseListView> {
    ExpenseListView::build(store, filter)
}
