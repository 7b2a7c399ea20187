//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseFilter, ExpenseId, NewExpense};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of expenses.json
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExpenseData {
    #[serde(default = "first_id")]
    next_id: ExpenseId,
    #[serde(default)]
    expenses: Vec<Expense>,
}

impl Default for ExpenseData {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            expenses: Vec::new(),
        }
    }
}

fn first_id() -> ExpenseId {
    ExpenseId::new(1)
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<ExpenseId, Expense>,
    /// Index: category -> expense ids
    by_category: HashMap<String, Vec<ExpenseId>>,
    next_id: ExpenseId,
}

impl Table {
    fn push(&mut self, expense: Expense) {
        if expense.id >= self.next_id {
            self.next_id = expense.id.next();
        }
        self.by_category
            .entry(expense.category.clone())
            .or_default()
            .push(expense.id);
        self.rows.insert(expense.id, expense);
    }

    fn snapshot(&self) -> ExpenseData {
        ExpenseData {
            next_id: self.next_id,
            expenses: self.rows.values().cloned().collect(),
        }
    }
}

/// Repository for expense persistence with a category index
pub struct ExpenseRepository {
    path: PathBuf,
    table: RwLock<Table>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            table: RwLock::new(Table {
                next_id: first_id(),
                ..Table::default()
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, ExpenseError> {
        self.table
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, ExpenseError> {
        self.table
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load expenses from disk and rebuild the index
    ///
    /// A file listing the same ID twice is rejected.
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut loaded = Table {
            next_id: file_data.next_id,
            ..Table::default()
        };
        for expense in file_data.expenses {
            if loaded.rows.contains_key(&expense.id) {
                return Err(ExpenseError::Storage(format!(
                    "Duplicate expense id {} in {}",
                    expense.id,
                    self.path.display()
                )));
            }
            loaded.push(expense);
        }

        tracing::debug!(
            target: "expense_tracker",
            count = loaded.rows.len(),
            path = %self.path.display(),
            "expenses_loaded"
        );

        *self.write()? = loaded;
        Ok(())
    }

    /// Save expenses to disk, oldest first
    pub fn save(&self) -> Result<(), ExpenseError> {
        let table = self.read()?;
        write_json_atomic(&self.path, &table.snapshot())
    }

    /// Assign the next ID, write the file, then make the expense visible
    ///
    /// The file is written while the table lock is held, so inserts are
    /// serialized and a failed write leaves the table untouched.
    pub fn insert(&self, new: NewExpense) -> Result<Expense, ExpenseError> {
        let mut table = self.write()?;
        let expense = new.into_expense(table.next_id);

        let mut file_data = table.snapshot();
        file_data.next_id = expense.id.next();
        file_data.expenses.push(expense.clone());
        write_json_atomic(&self.path, &file_data)?;

        table.push(expense.clone());
        Ok(expense)
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    /// All expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    /// Expenses matching the filter, in insertion order
    pub fn query(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, ExpenseError> {
        let table = self.read()?;

        let expenses = match filter.active_category() {
            Some(category) => table
                .by_category
                .get(category)
                .map(|ids| ids.as_slice())
                .unwrap_or(&[])
                .iter()
                .filter_map(|id| table.rows.get(id))
                .filter(|e| filter.matches(e))
                .cloned()
                .collect(),
            None => table
                .rows
                .values()
                .filter(|e| filter.matches(e))
                .cloned()
                .collect(),
        };
        Ok(expenses)
    }

    /// Every category that has at least one expense
    pub fn categories(&self) -> Result<BTreeSet<String>, ExpenseError> {
        Ok(self.read()?.by_category.keys().cloned().collect())
    }

    pub fn count(&self) -> Result<usize, ExpenseError> {
        Ok(self.read()?.rows.len())
    }
}
