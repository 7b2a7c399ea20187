//! CLI commands for recording and listing expenses

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::build_expense_list_view;
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

use super::FilterArgs;

/// Arguments for `expense add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount, e.g. 12.50
    pub amount: String,

    /// Category label
    pub category: String,

    /// Optional description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

impl From<AddArgs> for CreateExpenseInput {
    fn from(args: AddArgs) -> Self {
        Self {
            amount: args.amount,
            category: args.category,
            description: args.description,
            date: args.date,
        }
    }
}

/// Handle `expense add`
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let input = CreateExpenseInput::from(args);
    let service = ExpenseService::new(storage);
    let id = service.create(&input)?;

    let expense = storage
        .expenses
        .get(id)?
        .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

    println!(
        "Added expense {}: {} {} on {}",
        expense.id,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.category,
        expense.date
    );

    Ok(())
}

/// Handle `expense list`
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    filter: FilterArgs,
) -> ExpenseResult<()> {
    let view = build_expense_list_view(storage, &filter.to_filter()?)?;
    print!("{}", format_expense_list(&view, settings));
    Ok(())
}
