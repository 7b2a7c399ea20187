//! CSV export
//!
//! One row per expense in the order given: date, category, amount and
//! description.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseFilter, DATE_FORMAT};
use crate::storage::ExpenseStore;

/// Header row of every export
pub const CSV_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Description"];

/// Write expenses as CSV to any writer
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.date.format(DATE_FORMAT).to_string().as_str(),
            expense.category.as_str(),
            expense.amount.to_decimal_string().as_str(),
            expense.description_or_empty(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Serialize expenses to an in-memory CSV document
pub fn to_csv(expenses: &[Expense]) -> ExpenseResult<Vec<u8>> {
    let mut buffer = Vec::new();
    export_expenses_csv(expenses, &mut buffer)?;
    Ok(buffer)
}

/// Export every expense matching the filter, oldest recorded first
///
/// Returns the number of rows written.
pub fn export_filtered_csv<S, W>(
    store: &S,
    filter: &ExpenseFilter,
    writer: &mut W,
) -> ExpenseResult<usize>
where
    S: ExpenseStore + ?Sized,
    W: Write,
{
    let mut expenses = store.query_filtered(filter)?;
    expenses.sort_by_key(|e| e.id);
    export_expenses_csv(&expenses, writer)?;
    Ok(expenses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::{parse_date, ExpenseId, Money, NewExpense};
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn expense(id: u64, date: &str, category: &str, cents: i64, description: &str) -> Expense {
        NewExpense::new(Money::from_cents(cents), category, parse_date(date).unwrap())
            .with_description(description)
            .into_expense(ExpenseId::new(id))
    }

    #[test]
    fn test_single_row() {
        let output = to_csv(&[expense(1, "2024-01-15", "Food", 1250, "lunch")]).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Date,Category,Amount,Description\n2024-01-15,Food,12.5,lunch\n"
        );
    }

    #[test]
    fn test_empty_input_is_header_only() {
        let output = to_csv(&[]).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Date,Category,Amount,Description\n"
        );
    }

    #[test]
    fn test_missing_description_is_empty_field() {
        let output = to_csv(&[expense(1, "2024-03-01", "Rent", 100000, "")]).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with("2024-03-01,Rent,1000.0,\n"));
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        let output = to_csv(&[expense(
            1,
            "2024-03-02",
            "Food, Drink",
            325,
            "said \"hi\"",
        )])
        .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("2024-03-02,\"Food, Drink\",3.25,\"said \"\"hi\"\"\"\n"));
    }

    #[test]
    fn test_rows_keep_input_order() {
        let output = to_csv(&[
            expense(1, "2024-02-01", "B", 100, ""),
            expense(2, "2024-01-01", "A", 200, ""),
        ])
        .unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "2024-02-01,B,1.0,");
        assert_eq!(lines[2], "2024-01-01,A,2.0,");
    }

    #[test]
    fn test_export_filtered_from_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        for (date, category, cents) in [
            ("2024-02-01", "Transport", 2000),
            ("2024-01-10", "Food", 1000),
            ("2024-01-20", "Food", 500),
        ] {
            storage
                .insert(NewExpense::new(
                    Money::from_cents(cents),
                    category,
                    parse_date(date).unwrap(),
                ))
                .unwrap();
        }

        let mut output = Vec::new();
        let rows = export_filtered_csv(
            &storage,
            &ExpenseFilter::new().category("Food"),
            &mut output,
        )
        .unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Date,Category,Amount,Description\n2024-01-10,Food,10.0,\n2024-01-20,Food,5.0,\n"
        );
    }
}
