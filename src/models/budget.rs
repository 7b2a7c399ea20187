//! Budget model
//!
//! A per-category spending target. Budgets are persisted alongside expenses
//! but no report compares them against actual spending.

use serde::{Deserialize, Serialize};

use super::ids::BudgetId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    /// Unique across all budgets
    pub category: String,

    #[serde(default)]
    pub amount: Option<Money>,
}

impl Budget {
    pub fn new(id: BudgetId, category: impl Into<String>, amount: Option<Money>) -> Self {
        Self {
            id,
            category: category.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_serialization() {
        let budget = Budget::new(BudgetId::new(1), "Food", Some(Money::from_cents(40000)));
        let json = serde_json::to_string(&budget).unwrap();
        let back: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget, back);
    }

    #[test]
    fn test_missing_amount_defaults_to_none() {
        let back: Budget = serde_json::from_str(r#"{"id": 2, "category": "Rent"}"#).unwrap();
        assert_eq!(back.amount, None);
    }
}
