#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn open_ledger() -> (tempfile::TempDir, Ledger) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("cli.db"));
    db::migrate(&store).unwrap();
    (dir, Ledger::new(store))
}

fn entry(title: &str, amount: &str, category: &str) -> EntryArgs {
    EntryArgs {
        title: title.into(),
        amount: amount.into(),
        category: category.into(),
        description: String::new(),
        date: "2024-01-15".into(),
    }
}

fn update_args(id: i64) -> UpdateArgs {
    UpdateArgs {
        id,
        ..Default::default()
    }
}

fn list_args(from: Option<&str>, to: Option<&str>) -> ListArgs {
    ListArgs {
        from: from.map(String::from),
        to: to.map(String::from),
        limit: 20,
    }
}

// ── Confirmation ─────────────────────────────────────────────

#[test]
fn test_is_yes() {
    assert!(is_yes("y\n"));
    assert!(is_yes("YES"));
    assert!(is_yes("  Yes  "));
    assert!(!is_yes("\n"));
    assert!(!is_yes("n"));
    assert!(!is_yes("yep"));
}

#[test]
fn test_confirm_reads_one_line() {
    let mut input = io::Cursor::new("y\nn\n");
    assert!(confirm("Delete?", &mut input).unwrap());
    assert!(!confirm("Delete?", &mut input).unwrap());
}

#[test]
fn test_confirm_eof_declines() {
    let mut input = io::Cursor::new("");
    assert!(!confirm("Delete?", &mut input).unwrap());
}

// ── Update patch ─────────────────────────────────────────────

#[test]
fn test_build_update_empty() {
    let update = build_update(&update_args(1)).unwrap();
    assert!(!update.has_updates());
}

#[test]
fn test_build_update_ignores_empty_flags() {
    let args = UpdateArgs {
        title: Some(String::new()),
        category: Some(String::new()),
        ..update_args(1)
    };
    assert!(!build_update(&args).unwrap().has_updates());
}

#[test]
fn test_build_update_fields() {
    let args = UpdateArgs {
        title: Some("Rent".into()),
        amount: Some("1200".into()),
        date: Some("2024-03-01".into()),
        ..update_args(4)
    };
    let update = build_update(&args).unwrap();
    assert_eq!(update.title.as_deref(), Some("Rent"));
    assert_eq!(update.amount, Some(dec!(1200)));
    assert_eq!(update.date.as_deref(), Some("2024-03-01"));
    assert!(update.category.is_none());
    assert!(update.description.is_none());
}

#[test]
fn test_build_update_rejects_bad_amount() {
    let args = UpdateArgs {
        amount: Some("12.50".into()),
        ..update_args(1)
    };
    assert_eq!(
        build_update(&args).unwrap_err(),
        ValidationError::InvalidAmount
    );
}

#[test]
fn test_build_update_rejects_bad_date() {
    let args = UpdateArgs {
        date: Some("03/01/2024".into()),
        ..update_args(1)
    };
    assert_eq!(build_update(&args).unwrap_err(), ValidationError::InvalidDate);
}

#[test]
fn test_signed() {
    assert_eq!(signed(Kind::Revenue, dec!(50)), dec!(50));
    assert_eq!(signed(Kind::Expense, dec!(50)), dec!(-50));
}

#[test]
fn test_kind_follows_existing_sign() {
    let expense = Transaction::new("Gas".into(), dec!(-40), "Car".into(), "2024-01-01".into());
    let revenue = Transaction::new("Pay".into(), dec!(40), "Job".into(), "2024-01-01".into());
    assert_eq!(Kind::of(&expense), Kind::Expense);
    assert_eq!(Kind::of(&revenue), Kind::Revenue);
}

// ── List ─────────────────────────────────────────────────────

#[test]
fn test_date_bounds_none() {
    assert_eq!(date_bounds(&list_args(None, None)).unwrap(), None);
}

#[test]
fn test_date_bounds_open_ends() {
    assert_eq!(
        date_bounds(&list_args(Some("2024-01-01"), None)).unwrap(),
        Some(("2024-01-01".to_string(), LATEST_DATE.to_string()))
    );
    assert_eq!(
        date_bounds(&list_args(None, Some("2024-01-31"))).unwrap(),
        Some((EARLIEST_DATE.to_string(), "2024-01-31".to_string()))
    );
}

#[test]
fn test_date_bounds_invalid() {
    assert_eq!(
        date_bounds(&list_args(Some("2024-13-01"), None)).unwrap_err(),
        ValidationError::InvalidDate
    );
}

#[test]
fn test_list_row() {
    let mut txn = Transaction::new(
        "A very long grocery store receipt".into(),
        dec!(-85.5),
        "Food".into(),
        "2024-01-16".into(),
    );
    txn.id = Some(12);
    let row = list_row(&txn);
    assert!(row.starts_with("12    2024-01-16   A very long grocery…"));
    assert!(row.contains("Food"));
    assert!(row.ends_with("-$85.50"));
}

// ── Handlers ─────────────────────────────────────────────────

#[test]
fn test_add_and_sub_store_signed_amounts() {
    let (_dir, ledger) = open_ledger();
    cli_add(&entry("Paycheck", "3000", "Salary"), &ledger, Kind::Revenue).unwrap();
    cli_add(&entry("Gas", "40", "Car"), &ledger, Kind::Expense).unwrap();

    let paycheck = ledger.get_by_id(1).unwrap().unwrap();
    let gas = ledger.get_by_id(2).unwrap().unwrap();
    assert_eq!(paycheck.amount, dec!(3000));
    assert_eq!(gas.amount, dec!(-40));
    assert_eq!(gas.date, "2024-01-15");
    assert!(gas.description.is_none());
    assert_eq!(ledger.get_total_balance().unwrap(), dec!(2960));
}

#[test]
fn test_add_rejects_invalid_input_without_writing() {
    let (_dir, ledger) = open_ledger();
    let err = cli_add(&entry("Refund", "-5", "Misc"), &ledger, Kind::Expense).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::InvalidAmount)
    );
    let err = cli_add(&entry("", "5", "Misc"), &ledger, Kind::Revenue).unwrap_err();
    assert_eq!(err.to_string(), "Title cannot be empty");
    assert_eq!(ledger.count().unwrap(), 0);
}

#[test]
fn test_update_amount_keeps_expense_sign() {
    let (_dir, ledger) = open_ledger();
    cli_add(&entry("Gas", "40", "Car"), &ledger, Kind::Expense).unwrap();

    let args = UpdateArgs {
        amount: Some("55".into()),
        ..update_args(1)
    };
    cli_update(&args, &ledger).unwrap();
    assert_eq!(ledger.get_by_id(1).unwrap().unwrap().amount, dec!(-55));
}

#[test]
fn test_update_amount_keeps_revenue_sign() {
    let (_dir, ledger) = open_ledger();
    cli_add(&entry("Paycheck", "3000", "Salary"), &ledger, Kind::Revenue).unwrap();

    let args = UpdateArgs {
        amount: Some("3100".into()),
        title: Some("Raise".into()),
        ..update_args(1)
    };
    cli_update(&args, &ledger).unwrap();
    let txn = ledger.get_by_id(1).unwrap().unwrap();
    assert_eq!(txn.amount, dec!(3100));
    assert_eq!(txn.title, "Raise");
}

#[test]
fn test_update_empty_patch_aborts() {
    let (_dir, ledger) = open_ledger();
    cli_add(&entry("Gas", "40", "Car"), &ledger, Kind::Expense).unwrap();

    let err = cli_update(&update_args(1), &ledger).unwrap_err();
    assert_eq!(err.to_string(), "No fields to update");
    assert_eq!(ledger.get_by_id(1).unwrap().unwrap().amount, dec!(-40));
}

#[test]
fn test_update_unknown_id_aborts() {
    let (_dir, ledger) = open_ledger();
    let args = UpdateArgs {
        title: Some("Ghost".into()),
        ..update_args(9)
    };
    let err = cli_update(&args, &ledger).unwrap_err();
    assert_eq!(err.to_string(), "Transaction #9 not found");

    // Unknown id wins over an empty patch
    let err = cli_update(&update_args(9), &ledger).unwrap_err();
    assert_eq!(err.to_string(), "Transaction #9 not found");
}

#[test]
fn test_forced_delete() {
    let (_dir, ledger) = open_ledger();
    cli_add(&entry("Gas", "40", "Car"), &ledger, Kind::Expense).unwrap();

    cli_delete(1, true, &ledger).unwrap();
    assert!(ledger.get_by_id(1).unwrap().is_none());

    let err = cli_delete(1, true, &ledger).unwrap_err();
    assert_eq!(err.to_string(), "Transaction #1 not found");
    let err = cli_delete(9, true, &ledger).unwrap_err();
    assert_eq!(err.to_string(), "Transaction #9 not found");
}
