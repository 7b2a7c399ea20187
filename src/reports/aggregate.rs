//! Expense aggregation
//!
//! Buckets expenses by calendar month or by category and sums each bucket.
//! Totals are integer cents, so bucket totals always add up to the input sum.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::{Expense, Money, YearMonth};

/// Total spending in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyAggregate {
    pub month: YearMonth,
    pub total: Money,
}

/// Total spending in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAggregate {
    pub category: String,
    pub total: Money,
}

/// Sum expenses per calendar month, oldest month first
pub fn aggregate_by_month(expenses: &[Expense]) -> Vec<MonthlyAggregate> {
    let mut buckets: BTreeMap<YearMonth, Money> = BTreeMap::new();
    for expense in expenses {
        *buckets.entry(YearMonth::from_date(expense.date)).or_default() += expense.amount;
    }

    buckets
        .into_iter()
        .map(|(month, total)| MonthlyAggregate { month, total })
        .collect()
}

/// Sum expenses per category, in order of each category's first appearance
///
/// Category names are compared exactly, without trimming or case folding.
pub fn aggregate_by_category(expenses: &[Expense]) -> Vec<CategoryAggregate> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<CategoryAggregate> = Vec::new();

    for expense in expenses {
        match positions.get(expense.category.as_str()).copied() {
            Some(index) => buckets[index].total += expense.amount,
            None => {
                positions.insert(&expense.category, buckets.len());
                buckets.push(CategoryAggregate {
                    category: expense.category.clone(),
                    total: expense.amount,
                });
            }
        }
    }

    buckets
}

/// Each bucket's share of the grand total, in percent
///
/// All zeros when the grand total is zero.
pub fn percentage_shares(buckets: &[CategoryAggregate]) -> Vec<f64> {
    let grand_total: Money = buckets.iter().map(|b| b.total).sum();
    if grand_total.is_zero() {
        return vec![0.0; buckets.len()];
    }
    buckets
        .iter()
        .map(|b| b.total.cents() as f64 / grand_total.cents() as f64 * 100.0)
        .collect()
}
