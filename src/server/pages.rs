//! HTML pages
//!
//! Plain server-rendered HTML built with format strings. Every user-supplied
//! value goes through `escape_html`.

use axum::http::StatusCode;
use chrono::NaiveDate;

use crate::charts::svg::escape_xml as escape_html;
use crate::charts::ChartResult;
use crate::models::{ExpenseFilter, ALL_CATEGORIES, DATE_FORMAT};
use crate::reports::{DashboardView, ExpenseListView};

const STYLE: &str = "body{font-family:sans-serif;margin:0 auto;max-width:960px;padding:1rem}\
nav a{margin-right:1rem}table{border-collapse:collapse;width:100%}\
th,td{border-bottom:1px solid #ddd;padding:.4rem;text-align:left}\
td.amount,th.amount{text-align:right}.charts img{max-width:100%}\
.notice{color:#666;font-style:italic}form.filter{margin:1rem 0}";

/// Wrap page content with the shared header and navigation
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Expense Tracker</title>
<style>{style}</style>
</head>
<body>
<nav>
<a href="/">Home</a><a href="/add">Add Expense</a><a href="/expenses">Expenses</a>
<a href="/dashboard">Dashboard</a><a href="/export">Export CSV</a>
</nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        style = STYLE,
        body = body
    )
}

pub fn home_page() -> String {
    layout(
        "Expense Tracker",
        r#"<p>Record your expenses and see where the money goes.</p>
<ul>
<li><a href="/add">Add an expense</a></li>
<li><a href="/expenses">Browse and filter expenses</a></li>
<li><a href="/dashboard">Spending dashboard</a></li>
<li><a href="/export">Download all expenses as CSV</a></li>
</ul>"#,
    )
}

pub fn add_expense_page(today: NaiveDate) -> String {
    let body = format!(
        r#"<form method="post" action="/add">
<p><label>Amount <input type="number" name="amount" step="0.01" min="0.01" required></label></p>
<p><label>Category <input type="text" name="category" required></label></p>
<p><label>Description <input type="text" name="description"></label></p>
<p><label>Date <input type="date" name="date" value="{today}" required></label></p>
<p><button type="submit">Add Expense</button></p>
</form>"#,
        today = today.format(DATE_FORMAT)
    );
    layout("Add Expense", &body)
}

pub fn expense_list_page(view: &ExpenseListView, currency_symbol: &str) -> String {
    let mut body = filter_form(
        "/expenses",
        &view.categories,
        &view.selected_category,
        view.start_date,
        view.end_date,
    );

    if view.expenses.is_empty() {
        body.push_str(r#"<p class="notice">No expenses found.</p>"#);
    } else {
        body.push_str(
            r#"<table>
<thead><tr>
<th>Date</th><th>Category</th><th>Description</th><th class="amount">Amount</th>
</tr></thead>
<tbody>
"#,
        );
        for expense in &view.expenses {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"amount\">{}</td></tr>\n",
                expense.date.format(DATE_FORMAT),
                escape_html(&expense.category),
                escape_html(expense.description_or_empty()),
                escape_html(&expense.amount.format_with_symbol(currency_symbol))
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str(&format!(
        "<p><strong>Total: {}</strong></p>",
        escape_html(&view.total.format_with_symbol(currency_symbol))
    ));

    layout("Expenses", &body)
}

pub fn dashboard_page(
    view: &DashboardView,
    categories: &[String],
    currency_symbol: &str,
) -> String {
    let filter: &ExpenseFilter = &view.filter;
    let mut body = filter_form(
        "/dashboard",
        categories,
        filter.selected_category(),
        filter.start_date,
        filter.end_date,
    );

    if view.is_empty() {
        body.push_str(r#"<p class="notice">No data available for the selected filters.</p>"#);
        return layout("Dashboard", &body);
    }

    body.push_str(&format!(
        "<p>Total: <strong>{}</strong> across {} expenses</p>\n",
        escape_html(&view.total.format_with_symbol(currency_symbol)),
        view.expense_count
    ));

    body.push_str("<div class=\"charts\">\n");
    body.push_str(&chart_block("Monthly Spending", &view.monthly_chart));
    body.push_str(&chart_block("Spending by Category", &view.category_chart));
    body.push_str("</div>\n");

    body.push_str(
        "<h2>By Month</h2>\n<table>\n\
         <thead><tr><th>Month</th><th class=\"amount\">Amount</th></tr></thead>\n<tbody>\n",
    );
    for row in &view.monthly_data {
        body.push_str(&format!(
            "<tr><td>{}</td><td class=\"amount\">{}</td></tr>\n",
            row.month,
            escape_html(&row.total.format_with_symbol(currency_symbol))
        ));
    }
    body.push_str("</tbody>\n</table>\n");

    body.push_str(
        "<h2>By Category</h2>\n<table>\n<thead><tr><th>Category</th>\
         <th class=\"amount\">Amount</th><th class=\"amount\">Share</th></tr></thead>\n<tbody>\n",
    );
    for (row, share) in view.category_shares() {
        body.push_str(&format!(
            "<tr><td>{}</td><td class=\"amount\">{}</td><td class=\"amount\">{:.1}%</td></tr>\n",
            escape_html(&row.category),
            escape_html(&row.total.format_with_symbol(currency_symbol)),
            share
        ));
    }
    body.push_str("</tbody>\n</table>\n");

    layout("Dashboard", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<p class=\"notice\">{}</p>\n<p><a href=\"javascript:history.back()\">Go back</a></p>",
        escape_html(message)
    );
    layout(
        status.canonical_reason().unwrap_or("Error"),
        &body,
    )
}

fn chart_block(title: &str, chart: &ChartResult) -> String {
    match chart.data_uri() {
        Some(uri) => format!(
            "<figure><img src=\"{}\" alt=\"{}\"></figure>\n",
            uri,
            escape_html(title)
        ),
        None => format!(
            "<p class=\"notice\">{} chart unavailable.</p>\n",
            escape_html(title)
        ),
    }
}

fn filter_form(
    action: &str,
    categories: &[String],
    selected: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> String {
    let mut options = option_tag(ALL_CATEGORIES, selected);
    for category in categories {
        options.push_str(&option_tag(category, selected));
    }

    let date_value = |date: Option<NaiveDate>| {
        date.map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    };

    format!(
        r#"<form class="filter" method="get" action="{action}">
<label>Category <select name="category">{options}</select></label>
<label>From <input type="date" name="start_date" value="{start}"></label>
<label>To <input type="date" name="end_date" value="{end}"></label>
<button type="submit">Filter</button>
</form>
"#,
        action = action,
        options = options,
        start = date_value(start_date),
        end = date_value(end_date)
    )
}

fn option_tag(value: &str, selected: &str) -> String {
    let marker = if value == selected { " selected" } else { "" };
    format!(
        "<option value=\"{v}\"{marker}>{v}</option>",
        v = escape_html(value),
        marker = marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, ExpenseId, Money, NewExpense};

    #[test]
    fn test_layout_escapes_title() {
        let page = layout("<b>", "");
        assert!(page.contains("<h1>&lt;b&gt;</h1>"));
    }

    #[test]
    fn test_list_page_escapes_user_text() {
        let expense = NewExpense::new(
            Money::from_cents(1250),
            "<script>",
            parse_date("2024-01-15").unwrap(),
        )
        .with_description("fish & chips")
        .into_expense(ExpenseId::new(1));

        let view = ExpenseListView {
            expenses: vec![expense],
            categories: vec!["<script>".into()],
            total: Money::from_cents(1250),
            selected_category: "All".into(),
            start_date: None,
            end_date: None,
        };
        let page = expense_list_page(&view, "$");

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("fish &amp; chips"));
        assert!(page.contains("Total: $12.50"));
    }

    #[test]
    fn test_selected_category_is_marked() {
        let form = filter_form(
            "/expenses",
            &["Food".to_string(), "Rent".to_string()],
            "Rent",
            None,
            parse_date("2024-03-31").ok(),
        );
        assert!(form.contains(r#"<option value="Rent" selected>Rent</option>"#));
        assert!(form.contains(r#"<option value="All">All</option>"#));
        assert!(form.contains(r#"name="end_date" value="2024-03-31""#));
    }

    #[test]
    fn test_chart_block_falls_back_to_notice() {
        let block = chart_block("Monthly Spending", &ChartResult::Unavailable);
        assert!(block.contains("Monthly Spending chart unavailable."));
    }
}
