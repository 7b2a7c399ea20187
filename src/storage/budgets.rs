//! Budget repository for JSON storage
//!
//! Budgets live in budgets.json. Category names are unique.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::{Budget, BudgetId, Money};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

/// Repository for budget persistence, keyed by category
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<BTreeMap<String, Budget>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load budgets from disk
    ///
    /// A file with two budgets for one category is rejected.
    pub fn load(&self) -> Result<(), ExpenseError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut loaded = BTreeMap::new();
        for budget in file_data.budgets {
            if loaded.contains_key(&budget.category) {
                return Err(ExpenseError::duplicate_budget(budget.category));
            }
            loaded.insert(budget.category.clone(), budget);
        }

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *budgets = loaded;
        Ok(())
    }

    pub fn save(&self) -> Result<(), ExpenseError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BudgetData {
            budgets: budgets.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Add a budget for a category that has none yet
    pub fn create(
        &self,
        category: impl Into<String>,
        amount: Option<Money>,
    ) -> Result<Budget, ExpenseError> {
        let category = category.into();
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if budgets.contains_key(&category) {
            return Err(ExpenseError::duplicate_budget(category));
        }

        let next_id = budgets
            .values()
            .map(|b| b.id)
            .max()
            .map(|id| id.next())
            .unwrap_or_else(|| BudgetId::new(1));

        let budget = Budget::new(next_id, category.clone(), amount);
        budgets.insert(category, budget.clone());
        Ok(budget)
    }

    pub fn get(&self, category: &str) -> Result<Option<Budget>, ExpenseError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.get(category).cloned())
    }

    pub fn count(&self) -> Result<usize, ExpenseError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.len())
    }
}
