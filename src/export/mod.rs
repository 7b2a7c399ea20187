//! Export module
//!
//! Spreadsheet-compatible CSV export of expense records.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_filtered_csv, to_csv, CSV_HEADER};
