//! Expense Tracker - personal expense recording and spending dashboards
//!
//! This library records expenses, filters them by category and date range,
//! aggregates them by month and by category, and renders the aggregates as
//! SVG charts. The same core serves the command line and a small web UI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, filters, budgets)
//! - `storage`: JSON file storage layer and the `ExpenseStore` seam
//! - `services`: Input coercion and validation
//! - `reports`: Aggregation and the dashboard / list view-models
//! - `charts`: SVG chart rendering
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `server`: HTTP routes and pages
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
//! use expense_tracker::models::ExpenseFilter;
//! use expense_tracker::reports::build_dashboard;
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths)?;
//! let view = build_dashboard(&storage, &ExpenseFilter::new(), &settings.charts)?;
//! ```

pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod server;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
