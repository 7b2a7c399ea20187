//! Dashboard report
//!
//! Pulls the filtered expenses, aggregates them by month and by category,
//! and renders both charts. Re-run in full on every request.

use crate::charts::{render_category_share, render_monthly_trend, ChartResult};
use crate::config::ChartSettings;
use crate::error::ExpenseResult;
use crate::models::{ExpenseFilter, Money};
use crate::storage::ExpenseStore;

use super::aggregate::{
    aggregate_by_category, aggregate_by_month, percentage_shares, CategoryAggregate,
    MonthlyAggregate,
};

/// Everything the dashboard page shows
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub filter: ExpenseFilter,
    pub monthly_chart: ChartResult,
    pub category_chart: ChartResult,
    pub monthly_data: Vec<MonthlyAggregate>,
    pub category_data: Vec<CategoryAggregate>,
    pub total: Money,
    pub expense_count: usize,
}

impl DashboardView {
    /// Build the dashboard for the given filter
    pub fn build<S: ExpenseStore + ?Sized>(
        store: &S,
        filter: &ExpenseFilter,
        charts: &ChartSettings,
    ) -> ExpenseResult<Self> {
        let expenses = store.query_filtered(filter)?;

        let monthly_data = aggregate_by_month(&expenses);
        let category_data = aggregate_by_category(&expenses);

        Ok(Self {
            filter: filter.clone(),
            monthly_chart: render_monthly_trend(&monthly_data, charts),
            category_chart: render_category_share(&category_data, charts),
            total: expenses.iter().map(|e| e.amount).sum(),
            expense_count: expenses.len(),
            monthly_data,
            category_data,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// Category rows paired with their percentage share
    pub fn category_shares(&self) -> Vec<(&CategoryAggregate, f64)> {
        self.category_data
            .iter()
            .zip(percentage_shares(&self.category_data))
            .collect()
    }
}

/// Build the dashboard view-model
pub fn build_dashboard<S: ExpenseStore + ?Sized>(
    store: &S,
    filter: &ExpenseFilter,
    charts: &ChartSettings,
) -> ExpenseResult<DashboardView> {
    DashboardView::build(store, filter, charts)
}
