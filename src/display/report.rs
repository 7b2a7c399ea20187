//! Dashboard display formatting

use crate::config::settings::Settings;
use crate::reports::DashboardView;

/// Format the dashboard aggregates as two terminal tables
pub fn format_dashboard(view: &DashboardView, settings: &Settings) -> String {
    let currency_symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str("Spending Dashboard\n");
    output.push_str(&"=".repeat(50));
    output.push('\n');
    output.push_str(&format!("Category: {}\n", view.filter.selected_category()));
    if let Some(start) = view.filter.start_date {
        output.push_str(&format!("From: {}\n", start));
    }
    if let Some(end) = view.filter.end_date {
        output.push_str(&format!("To: {}\n", end));
    }

    if view.is_empty() {
        output.push_str("\nNo data available for the selected filters.\n");
        return output;
    }

    output.push_str(&format!(
        "Total: {} across {} expenses\n",
        view.total.format_with_symbol(currency_symbol),
        view.expense_count
    ));

    output.push_str(&format!("\n{:<10} {:>14}\n", "Month", "Amount"));
    output.push_str(&"-".repeat(25));
    output.push('\n');
    for row in &view.monthly_data {
        output.push_str(&format!(
            "{:<10} {:>14}\n",
            row.month.to_string(),
            row.total.format_with_symbol(currency_symbol)
        ));
    }

    output.push_str(&format!("\n{:<24} {:>14} {:>8}\n", "Category", "Amount", "%"));
    output.push_str(&"-".repeat(48));
    output.push('\n');
    for (row, share) in view.category_shares() {
        output.push_str(&format!(
            "{:<24} {:>14} {:>7.1}%\n",
            row.category,
            row.total.format_with_symbol(currency_symbol),
            share
        ));
    }

    output
}
