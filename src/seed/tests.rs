#![allow(clippy::unwrap_used)]

use super::*;
use crate::db::{migrate, Store};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn find_profile<'a>(profiles: &'a [CategoryProfile], name: &str) -> Option<&'a CategoryProfile> {
    profiles.iter().find(|p| p.name == name)
}

#[test]
fn test_generate_count() {
    assert_eq!(generate(200, DEFAULT_SEED, today()).len(), 200);
    assert!(generate(0, DEFAULT_SEED, today()).is_empty());
}

#[test]
fn test_generate_is_deterministic() {
    let a = generate(50, DEFAULT_SEED, today());
    let b = generate(50, DEFAULT_SEED, today());
    assert_eq!(a, b);

    let c = generate(50, 7, today());
    assert_ne!(a, c);
}

#[test]
fn test_generate_dates_within_last_year_and_sorted() {
    let txns = generate(200, DEFAULT_SEED, today());
    for txn in &txns {
        assert!(crate::validate::validate_date(&txn.date).is_ok());
        assert!(txn.date.as_str() >= "2023-07-01", "{} too early", txn.date);
        assert!(txn.date.as_str() <= "2024-06-30", "{} too late", txn.date);
    }
    for window in txns.windows(2) {
        assert!(window[0].date <= window[1].date);
    }
}

#[test]
fn test_generate_sign_matches_category() {
    for txn in generate(200, DEFAULT_SEED, today()) {
        if let Some(profile) = find_profile(REVENUE, &txn.category) {
            assert!(txn.is_revenue(), "{} should be revenue", txn.category);
            assert!(profile.titles.contains(&txn.title.as_str()));
        } else {
            let profile = find_profile(EXPENSE, &txn.category).unwrap();
            assert!(txn.is_expense(), "{} should be an expense", txn.category);
            assert!(profile.titles.contains(&txn.title.as_str()));
        }
    }
}

#[test]
fn test_generate_amounts_in_range() {
    for txn in generate(200, DEFAULT_SEED, today()) {
        let profile = find_profile(REVENUE, &txn.category)
            .or_else(|| find_profile(EXPENSE, &txn.category))
            .unwrap();
        let min = Decimal::from_f64(profile.min).unwrap();
        let max = Decimal::from_f64(profile.max).unwrap();
        assert!(txn.abs_amount() >= min && txn.abs_amount() <= max);
        assert!(txn.amount.scale() <= 2);
    }
}

#[test]
fn test_generate_mix() {
    let txns = generate(200, DEFAULT_SEED, today());
    let revenue = txns.iter().filter(|t| t.is_revenue()).count();
    let described = txns.iter().filter(|t| t.description.is_some()).count();
    // Loose bounds around the 40% / 30% targets
    assert!((40..=120).contains(&revenue), "revenue count {revenue}");
    assert!((20..=100).contains(&described), "described count {described}");
}

#[test]
fn test_descriptions_vary() {
    let txns = generate(200, DEFAULT_SEED, today());
    let notes: std::collections::BTreeSet<&str> =
        txns.iter().filter_map(|t| t.description.as_deref()).collect();
    assert!(notes.len() >= 20, "only {} distinct descriptions", notes.len());
    for note in notes {
        assert!(OPENERS.iter().any(|o| note.starts_with(o)), "{note}");
        assert!(DETAILS.iter().any(|d| note.ends_with(d)), "{note}");
    }
}

#[test]
fn test_seed_database_replaces_rows() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("seed.db"));
    migrate(&store).unwrap();
    let ledger = Ledger::new(store);

    ledger
        .create(&Transaction::new(
            "Old".into(),
            Decimal::ONE,
            "Misc".into(),
            "2020-01-01".into(),
        ))
        .unwrap();

    let inserted = seed_database(&ledger, 25, DEFAULT_SEED, today()).unwrap();
    assert_eq!(inserted, 25);
    assert_eq!(ledger.count().unwrap(), 25);
    assert!(ledger.get_all().unwrap().iter().all(|t| t.title != "Old"));

    let expected: Decimal = generate(25, DEFAULT_SEED, today())
        .iter()
        .map(|t| t.amount)
        .sum();
    let total = ledger.get_total_balance().unwrap();
    assert!((total - expected).abs() < Decimal::new(1, 6));
}
