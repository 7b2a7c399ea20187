//! Expense display formatting
//!
//! Register-style listing of expenses for terminal output.

use crate::config::settings::Settings;
use crate::models::Expense;
use crate::reports::ExpenseListView;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:<8} {:10} {:20} {:>12}  {}",
        expense.id.to_string(),
        expense.date.format(&settings.date_format).to_string(),
        truncate(&expense.category, 20),
        expense.amount.format_with_symbol(&settings.currency_symbol),
        truncate(expense.description_or_empty(), 40)
    )
}

/// Format the expense list view, newest first, with its filter and total
pub fn format_expense_list(view: &ExpenseListView, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}", view.selected_category));
    if let Some(start) = view.start_date {
        output.push_str(&format!("  From: {}", start));
    }
    if let Some(end) = view.end_date {
        output.push_str(&format!("  To: {}", end));
    }
    output.push('\n');

    if view.expenses.is_empty() {
        output.push_str("No expenses found.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<8} {:10} {:20} {:>12}  {}\n",
        "ID", "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for expense in &view.expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output.push_str(&"-".repeat(80));
    output.push('\n');
    output.push_str(&format!(
        "{:<40} {:>12}\n",
        format!("Total ({} expenses)", view.expenses.len()),
        view.total.format_with_symbol(&settings.currency_symbol)
    ));

    output
}

/// Truncate a string to a maximum display width
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
