use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

use super::Kind;
use crate::config::{EntryArgs, ListArgs, UpdateArgs};
use crate::db::{self, Ledger, Store};
use crate::models::{Transaction, TransactionUpdate};
use crate::ui::util::{format_signed_amount, truncate};
use crate::validate::{
    resolve_date, validate_amount, validate_category, validate_date, validate_title,
    ValidationError,
};

const EARLIEST_DATE: &str = "0000-01-01";
const LATEST_DATE: &str = "9999-12-31";

pub(super) fn cli_add(args: &EntryArgs, ledger: &Ledger, kind: Kind) -> Result<()> {
    validate_title(&args.title)?;
    let amount = validate_amount(&args.amount)?;
    validate_date(&args.date)?;
    validate_category(&args.category)?;

    let date = resolve_date(&args.date);
    let txn = Transaction::new(
        args.title.clone(),
        signed(kind, amount),
        args.category.clone(),
        date.clone(),
    )
    .with_description(Some(args.description.clone()));

    let id = ledger.create(&txn).context("Failed to save transaction")?;
    tracing::debug!(id, amount = %txn.amount, "transaction created");

    match kind {
        Kind::Revenue => println!(
            "✓ Added revenue #{id}: {} (+${}) [{date}]",
            args.title, args.amount
        ),
        Kind::Expense => println!(
            "✓ Added expense #{id}: {} (-${}) [{date}]",
            args.title, args.amount
        ),
    }
    Ok(())
}

pub(super) fn cli_delete(id: i64, force: bool, ledger: &Ledger) -> Result<()> {
    if !force {
        let stdin = io::stdin();
        if !confirm(
            "Are you sure you want to delete this entry?",
            &mut stdin.lock(),
        )? {
            anyhow::bail!("Operation cancelled.");
        }
    }

    let txn = ledger
        .get_by_id(id)?
        .ok_or_else(|| anyhow::anyhow!("Transaction #{id} not found"))?;

    if !ledger.delete(id)? {
        anyhow::bail!("Failed to delete transaction #{id}");
    }
    println!("✓ Deleted transaction #{id}: {}", txn.title);
    Ok(())
}

pub(super) fn cli_update(args: &UpdateArgs, ledger: &Ledger) -> Result<()> {
    let mut update = build_update(args)?;

    let existing = ledger
        .get_by_id(args.id)?
        .ok_or_else(|| anyhow::anyhow!("Transaction #{} not found", args.id))?;

    if !update.has_updates() {
        anyhow::bail!("No fields to update");
    }
    update.amount = update.amount.map(|a| signed(Kind::of(&existing), a));

    if !ledger.update(args.id, &update)? {
        anyhow::bail!("Failed to update transaction #{}", args.id);
    }
    tracing::debug!(id = args.id, "transaction updated");
    println!("✓ Updated transaction #{}", args.id);
    Ok(())
}

pub(super) fn cli_init(store: &Store) -> Result<()> {
    let (from, to) = db::migrate(store).with_context(|| {
        format!("Error initializing database {}", store.path().display())
    })?;
    tracing::info!(from, to, "schema ready");
    println!("✓ Database initialized and migrations applied successfully");
    println!("  {}", store.path().display());
    Ok(())
}

pub(super) fn cli_summary(ledger: &Ledger) -> Result<()> {
    let total = ledger.get_total_balance()?;
    let by_category = ledger.get_balance_by_category()?;

    println!();
    println!("=== Financial Summary ===");
    println!("Total Balance: {}", format_signed_amount(total));
    println!("Transactions:  {}", ledger.count()?);
    println!();

    if by_category.is_empty() {
        println!("No transactions yet");
        return Ok(());
    }

    println!("Balance by Category:");
    for (category, amount) in &by_category {
        println!("  {category}: {}", format_signed_amount(*amount));
    }
    Ok(())
}

pub(super) fn cli_list(args: &ListArgs, ledger: &Ledger) -> Result<()> {
    let txns = match date_bounds(args)? {
        Some((from, to)) => ledger.get_by_date_range(&from, &to)?,
        None => ledger.get_all()?,
    };

    if txns.is_empty() {
        println!("No transactions yet");
        return Ok(());
    }

    println!();
    println!("=== Transactions ===");
    println!(
        "{:<5} {:<12} {:<20} {:<15} {:>12}",
        "ID", "Date", "Title", "Category", "Amount"
    );
    println!("{}", "-".repeat(68));
    for txn in txns.iter().take(args.limit) {
        println!("{}", list_row(txn));
    }
    if txns.len() > args.limit {
        println!("... {} more (use --limit)", txns.len() - args.limit);
    }
    Ok(())
}

pub(super) fn cli_seed(count: usize, seed: u64, ledger: &Ledger) -> Result<()> {
    println!("Seeding database with mock financial data...");
    let today = chrono::Local::now().date_naive();
    let inserted = crate::seed::seed_database(ledger, count, seed, today)?;
    if inserted < count {
        tracing::warn!(skipped = count - inserted, "some mock transactions were not saved");
    }
    println!("✓ Successfully seeded database with {inserted} transactions");
    Ok(())
}

// ── Helpers ──────────────────────────────────────────────────

fn signed(kind: Kind, amount: Decimal) -> Decimal {
    match kind {
        Kind::Revenue => amount,
        Kind::Expense => -amount,
    }
}

fn confirm(prompt: &str, input: &mut impl BufRead) -> Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Validated patch from the update flags. Amounts come back unsigned.
fn build_update(args: &UpdateArgs) -> Result<TransactionUpdate, ValidationError> {
    let amount = provided(&args.amount).map(validate_amount).transpose()?;
    let date = provided(&args.date);
    if let Some(date) = date {
        validate_date(date)?;
    }

    Ok(TransactionUpdate {
        title: provided(&args.title).map(String::from),
        amount,
        category: provided(&args.category).map(String::from),
        description: provided(&args.description).map(String::from),
        date: date.map(String::from),
    })
}

/// Inclusive range for `list`, or `None` when neither bound is given.
fn date_bounds(args: &ListArgs) -> Result<Option<(String, String)>, ValidationError> {
    let (from, to) = (provided(&args.from), provided(&args.to));
    if from.is_none() && to.is_none() {
        return Ok(None);
    }
    for bound in [from, to].into_iter().flatten() {
        validate_date(bound)?;
    }
    Ok(Some((
        from.unwrap_or(EARLIEST_DATE).to_string(),
        to.unwrap_or(LATEST_DATE).to_string(),
    )))
}

fn list_row(txn: &Transaction) -> String {
    format!(
        "{:<5} {:<12} {:<20} {:<15} {:>12}",
        txn.id.unwrap_or_default(),
        txn.date,
        truncate(&txn.title, 20),
        truncate(&txn.category, 15),
        format_signed_amount(txn.amount),
    )
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
