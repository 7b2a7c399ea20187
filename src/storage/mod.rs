//! Storage layer
//!
//! JSON file storage with atomic writes. `Storage` is constructed once at
//! startup and handed to every consumer; reports only see it through the
//! `ExpenseStore` trait.

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use std::collections::BTreeSet;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseFilter, ExpenseId, NewExpense};

/// The operations the reporting core needs from a store
pub trait ExpenseStore {
    /// Persist a new expense and return its assigned ID
    fn insert(&self, expense: NewExpense) -> Result<ExpenseId, ExpenseError>;

    /// Expenses matching the filter, inclusive date bounds, in no particular order
    fn query_filtered(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ExpenseError>;

    /// Every category ever recorded, regardless of any filter
    fn distinct_categories(&self) -> Result<BTreeSet<String>, ExpenseError>;
}

/// Storage coordinator that owns all repositories
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a Storage instance, creating directories as needed
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Create and load a Storage instance in one step
    pub fn open(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        let mut storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Check if storage has been initialized (settings written)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

impl ExpenseStore for Storage {
    fn insert(&self, expense: NewExpense) -> Result<ExpenseId, ExpenseError> {
        Ok(self.expenses.insert(expense)?.id)
    }

    fn query_filtered(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ExpenseError> {
        self.expenses.query(filter)
    }

    fn distinct_categories(&self) -> Result<BTreeSet<String>, ExpenseError> {
        self.expenses.categories()
    }
}

/// Initialize storage for a fresh installation
///
/// Creates the directories and empty data files. Existing files are kept.
pub fn initialize_storage(paths: &ExpensePaths) -> Result<(), ExpenseError> {
    let storage = Storage::open(paths.clone())?;
    if !paths.expenses_file().exists() {
        storage.expenses.save()?;
    }
    if !paths.budgets_file().exists() {
        storage.budgets.save()?;
    }
    Ok(())
}
