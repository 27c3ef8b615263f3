#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn make_txn(amount: Decimal, category: &str, date: &str) -> Transaction {
    Transaction::new("Test".into(), amount, category.into(), date.into())
}

fn sample() -> Vec<Transaction> {
    vec![
        make_txn(dec!(3000), "Salary", "2024-02-01"),
        make_txn(dec!(-85.50), "Food", "2024-01-16"),
        make_txn(dec!(-14.50), "Food", "2024-01-20"),
        make_txn(dec!(250), "Freelance", "2024-01-10"),
        make_txn(dec!(-1200), "Home", "2024-01-01"),
        make_txn(Decimal::ZERO, "Adjustment", "2024-01-05"),
    ]
}

#[test]
fn test_empty() {
    let summary = Summary::from_transactions(&[]);
    assert_eq!(summary, Summary::default());
}

#[test]
fn test_totals() {
    let summary = Summary::from_transactions(&sample());
    assert_eq!(summary.total_revenue, dec!(3250));
    assert_eq!(summary.total_expenses, dec!(1300));
}

#[test]
fn test_counts_exclude_zero_from_both_sides() {
    let summary = Summary::from_transactions(&sample());
    assert_eq!(summary.transaction_count, 6);
    assert_eq!(summary.revenue_count, 2);
    assert_eq!(summary.expense_count, 3);
}

#[test]
fn test_monthly_net_oldest_first() {
    let summary = Summary::from_transactions(&sample());
    assert_eq!(
        summary.monthly_net,
        vec![
            ("2024-01".to_string(), dec!(-1050)),
            ("2024-02".to_string(), dec!(3000)),
        ]
    );
}

#[test]
fn test_revenue_by_category() {
    let summary = Summary::from_transactions(&sample());
    assert_eq!(
        summary.revenue_by_category,
        vec![
            ("Salary".to_string(), dec!(3000)),
            ("Freelance".to_string(), dec!(250)),
        ]
    );
}

#[test]
fn test_expenses_by_category_absolute() {
    let summary = Summary::from_transactions(&sample());
    assert_eq!(
        summary.expenses_by_category,
        vec![
            ("Home".to_string(), dec!(1200)),
            ("Food".to_string(), dec!(100)),
        ]
    );
}

#[test]
fn test_zero_category_in_neither_breakdown() {
    let summary = Summary::from_transactions(&sample());
    assert!(!summary
        .revenue_by_category
        .iter()
        .any(|(name, _)| name == "Adjustment"));
    assert!(!summary
        .expenses_by_category
        .iter()
        .any(|(name, _)| name == "Adjustment"));
}

#[test]
fn test_ties_are_alphabetical() {
    let txns = vec![
        make_txn(dec!(-10), "Zoo", "2024-01-01"),
        make_txn(dec!(-10), "Art", "2024-01-01"),
    ];
    let summary = Summary::from_transactions(&txns);
    let names: Vec<&str> = summary
        .expenses_by_category
        .iter()
        .map(|(n, _)| n.as_str())
        .collect();
    assert_eq!(names, vec!["Art", "Zoo"]);
}
