//! Configuration module
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::{ChartSettings, Settings};
