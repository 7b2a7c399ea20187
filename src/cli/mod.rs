//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service and report layers.

pub mod expense;
pub mod export;
pub mod report;

pub use expense::{handle_add_command, handle_list_command, AddArgs};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_dashboard_command, DashboardArgs};

use clap::Args;

use crate::error::ExpenseResult;
use crate::models::ExpenseFilter;

/// Category and date range filter shared by list, dashboard and export
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only include this category ("All" for every category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> ExpenseResult<ExpenseFilter> {
        ExpenseFilter::from_params(
            self.category.as_deref(),
            self.start.as_deref(),
            self.end.as_deref(),
        )
    }
}
