//! Expense filter shared by the store, reports and both user surfaces

use chrono::NaiveDate;
use serde::Serialize;

use super::expense::Expense;
use crate::error::{ExpenseError, ExpenseResult};

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Date format accepted for filter bounds and new expenses
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which expenses a report covers
///
/// Date bounds are inclusive. The category must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category; `"All"` or an empty string clears the filter
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.is_empty() || category == ALL_CATEGORIES {
            None
        } else {
            Some(category)
        };
        self
    }

    pub fn start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn end_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date(start).end_date(end)
    }

    /// Build a filter from raw request or command-line values
    ///
    /// Empty strings count as absent. A malformed date is a validation error.
    pub fn from_params(
        category: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ExpenseResult<Self> {
        let mut filter = Self::new();
        if let Some(category) = category {
            filter = filter.category(category);
        }
        filter.start_date = parse_optional_date(start_date)?;
        filter.end_date = parse_optional_date(end_date)?;
        Ok(filter)
    }

    /// The effective category, or `None` when every category is included
    pub fn active_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    /// Label for a category selector
    pub fn selected_category(&self) -> &str {
        self.active_category().unwrap_or(ALL_CATEGORIES)
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.active_category() {
            if expense.category != category {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        true
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid date '{}': {}. Use YYYY-MM-DD",
            value, e
        ))
    })
}

fn parse_optional_date(value: Option<&str>) -> ExpenseResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_date(v).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money, NewExpense};

    fn expense(date: &str, category: &str) -> Expense {
        NewExpense::new(Money::from_cents(100), category, parse_date(date).unwrap())
            .into_expense(ExpenseId::new(1))
    }

    #[test]
    fn test_all_sentinel_disables_category() {
        let filter = ExpenseFilter::new().category("All");
        assert_eq!(filter, ExpenseFilter::new());
        assert!(filter.matches(&expense("2024-01-01", "Food")));
        assert_eq!(filter.selected_category(), "All");
    }

    #[test]
    fn test_category_is_exact_match() {
        let filter = ExpenseFilter::new().category("Food");
        assert!(filter.matches(&expense("2024-01-01", "Food")));
        assert!(!filter.matches(&expense("2024-01-01", "food")));
        assert!(!filter.matches(&expense("2024-01-01", "Food ")));
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let filter = ExpenseFilter::new().date_range(
            parse_date("2024-01-10").unwrap(),
            parse_date("2024-01-20").unwrap(),
        );
        assert!(filter.matches(&expense("2024-01-10", "Food")));
        assert!(filter.matches(&expense("2024-01-20", "Food")));
        assert!(!filter.matches(&expense("2024-01-09", "Food")));
        assert!(!filter.matches(&expense("2024-01-21", "Food")));
    }

    #[test]
    fn test_from_params() {
        let filter =
            ExpenseFilter::from_params(Some("Food"), Some("2024-01-01"), Some("")).unwrap();
        assert_eq!(filter.category.as_deref(), Some("Food"));
        assert_eq!(filter.start_date, Some(parse_date("2024-01-01").unwrap()));
        assert_eq!(filter.end_date, None);

        let all = ExpenseFilter::from_params(Some("All"), None, None).unwrap();
        assert_eq!(all, ExpenseFilter::new());
    }

    #[test]
    fn test_malformed_date_is_validation_error() {
        let err = ExpenseFilter::from_params(None, Some("15/01/2024"), None).unwrap_err();
        assert!(err.is_validation());
    }
}
