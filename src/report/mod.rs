use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::Transaction;

/// Figures the dashboard derives from the full transaction list.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Summary {
    pub(crate) total_revenue: Decimal,
    /// Absolute value.
    pub(crate) total_expenses: Decimal,
    pub(crate) revenue_count: usize,
    pub(crate) expense_count: usize,
    pub(crate) transaction_count: usize,
    /// Net amount per "YYYY-MM", oldest month first.
    pub(crate) monthly_net: Vec<(String, Decimal)>,
    /// Largest first.
    pub(crate) revenue_by_category: Vec<(String, Decimal)>,
    /// Absolute values, largest first.
    pub(crate) expenses_by_category: Vec<(String, Decimal)>,
}

impl Summary {
    pub(crate) fn from_transactions(txns: &[Transaction]) -> Self {
        let mut summary = Self {
            transaction_count: txns.len(),
            ..Default::default()
        };
        let mut monthly: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut revenue: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut expenses: BTreeMap<String, Decimal> = BTreeMap::new();

        for txn in txns {
            *monthly.entry(txn.month().to_string()).or_default() += txn.amount;

            if txn.is_revenue() {
                summary.total_revenue += txn.amount;
                summary.revenue_count += 1;
                *revenue.entry(txn.category.clone()).or_default() += txn.amount;
            } else if txn.is_expense() {
                summary.total_expenses += txn.abs_amount();
                summary.expense_count += 1;
                *expenses.entry(txn.category.clone()).or_default() += txn.abs_amount();
            }
        }

        summary.monthly_net = monthly.into_iter().collect();
        summary.revenue_by_category = largest_first(revenue);
        summary.expenses_by_category = largest_first(expenses);
        summary
    }
}

/// Ties keep alphabetical order.
fn largest_first(totals: BTreeMap<String, Decimal>) -> Vec<(String, Decimal)> {
    let mut out: Vec<(String, Decimal)> = totals.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

#[cfg(test)]
mod tests;
