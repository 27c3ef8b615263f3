use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::db::{Ledger, StorageError};
use crate::models::Transaction;

pub(crate) const DEFAULT_SEED: u64 = 42;

struct CategoryProfile {
    name: &'static str,
    min: f64,
    max: f64,
    titles: &'static [&'static str],
}

const REVENUE: &[CategoryProfile] = &[
    CategoryProfile {
        name: "Salary",
        min: 2500.0,
        max: 8000.0,
        titles: &["Monthly Salary", "Bi-weekly Pay", "Salary Deposit"],
    },
    CategoryProfile {
        name: "Freelance",
        min: 200.0,
        max: 2000.0,
        titles: &["Freelance Project", "Consulting Fee", "Side Gig"],
    },
    CategoryProfile {
        name: "Investment",
        min: 50.0,
        max: 1000.0,
        titles: &["Dividend Payment", "Stock Sale", "Crypto Gain"],
    },
    CategoryProfile {
        name: "Business",
        min: 100.0,
        max: 5000.0,
        titles: &["Business Income", "Service Revenue", "Product Sale"],
    },
    CategoryProfile {
        name: "Gift",
        min: 20.0,
        max: 500.0,
        titles: &["Birthday Gift", "Holiday Gift", "Cash Gift"],
    },
    CategoryProfile {
        name: "Refund",
        min: 10.0,
        max: 300.0,
        titles: &["Tax Refund", "Purchase Refund", "Service Refund"],
    },
    CategoryProfile {
        name: "Bonus",
        min: 100.0,
        max: 2000.0,
        titles: &["Performance Bonus", "Year-end Bonus", "Overtime Pay"],
    },
];

const EXPENSE: &[CategoryProfile] = &[
    CategoryProfile {
        name: "Food",
        min: 10.0,
        max: 200.0,
        titles: &["Grocery Shopping", "Restaurant", "Coffee", "Lunch"],
    },
    CategoryProfile {
        name: "Transportation",
        min: 5.0,
        max: 150.0,
        titles: &["Gas", "Uber", "Bus Ticket", "Car Maintenance"],
    },
    CategoryProfile {
        name: "Entertainment",
        min: 15.0,
        max: 300.0,
        titles: &["Movie Tickets", "Concert", "Streaming Service"],
    },
    CategoryProfile {
        name: "Shopping",
        min: 20.0,
        max: 800.0,
        titles: &["Clothes", "Electronics", "Home Goods", "Online Purchase"],
    },
    CategoryProfile {
        name: "Bills",
        min: 50.0,
        max: 400.0,
        titles: &["Electricity", "Water", "Internet", "Phone Bill"],
    },
    CategoryProfile {
        name: "Healthcare",
        min: 30.0,
        max: 500.0,
        titles: &["Doctor Visit", "Pharmacy", "Dental Care"],
    },
    CategoryProfile {
        name: "Education",
        min: 50.0,
        max: 1000.0,
        titles: &["Course Fee", "Books", "Online Learning"],
    },
    CategoryProfile {
        name: "Travel",
        min: 100.0,
        max: 2000.0,
        titles: &["Flight Ticket", "Hotel", "Vacation Expense"],
    },
    CategoryProfile {
        name: "Home",
        min: 100.0,
        max: 800.0,
        titles: &["Rent", "Mortgage", "Home Repair", "Furniture"],
    },
    CategoryProfile {
        name: "Insurance",
        min: 50.0,
        max: 300.0,
        titles: &["Health Insurance", "Car Insurance", "Home Insurance"],
    },
    CategoryProfile {
        name: "Subscription",
        min: 5.0,
        max: 50.0,
        titles: &["Netflix", "Spotify", "Gym Membership", "Magazine"],
    },
    CategoryProfile {
        name: "Personal Care",
        min: 10.0,
        max: 150.0,
        titles: &["Haircut", "Spa", "Cosmetics", "Fitness"],
    },
];

// Description phrases are "<opener> <subject> <detail>".
const OPENERS: &[&str] = &[
    "Paid",
    "Booked",
    "Settled",
    "Ordered",
    "Picked up",
    "Renewed",
    "Covered",
    "Split",
];

const SUBJECTS: &[&str] = &[
    "for the family",
    "with a friend",
    "for the office",
    "for the weekend",
    "for the trip",
    "for the flat",
    "for a colleague",
    "for the month",
];

const DETAILS: &[&str] = &[
    "by card",
    "in cash",
    "online",
    "via bank transfer",
    "on the way home",
    "ahead of time",
    "after a reminder",
    "at the last minute",
];

fn note(rng: &mut StdRng) -> Option<String> {
    let opener = OPENERS.choose(rng)?;
    let subject = SUBJECTS.choose(rng)?;
    let detail = DETAILS.choose(rng)?;
    Some(format!("{opener} {subject} {detail}"))
}

/// Deterministic mock transactions dated within the year before `today`,
/// sorted oldest first. Roughly 40% revenue, 60% expenses.
pub(crate) fn generate(count: usize, seed: u64, today: NaiveDate) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = today.checked_sub_days(Days::new(365)).unwrap_or(today);

    let mut txns: Vec<Transaction> = (0..count)
        .map(|_| {
            let offset = rng.random_range(0..=365u64);
            let date = start.checked_add_days(Days::new(offset)).unwrap_or(today);

            let is_revenue = rng.random_bool(0.4);
            let profiles = if is_revenue { REVENUE } else { EXPENSE };
            // Both tables are non-empty constants
            let profile = profiles.choose(&mut rng).unwrap_or(&REVENUE[0]);

            let raw = rng.random_range(profile.min..profile.max);
            let amount = Decimal::from_f64(raw).unwrap_or_default().round_dp(2);
            let amount = if is_revenue { amount } else { -amount };

            let title = profile.titles.choose(&mut rng).copied().unwrap_or(profile.name);

            let description = if rng.random_bool(0.3) {
                note(&mut rng)
            } else {
                None
            };

            Transaction::new(
                title.to_string(),
                amount,
                profile.name.to_string(),
                date.format("%Y-%m-%d").to_string(),
            )
            .with_description(description)
        })
        .collect();

    txns.sort_by(|a, b| a.date.cmp(&b.date));
    txns
}

/// Replace the ledger's contents with `count` mock transactions.
/// Rows that fail to insert are logged and skipped. Returns how many went in.
pub(crate) fn seed_database(
    ledger: &Ledger,
    count: usize,
    seed: u64,
    today: NaiveDate,
) -> Result<usize, StorageError> {
    let removed = ledger.clear()?;
    tracing::info!(removed, "cleared existing transactions");

    let txns = generate(count, seed, today);
    let mut inserted = 0;
    for txn in &txns {
        match ledger.create(txn) {
            Ok(_) => inserted += 1,
            Err(e) => {
                tracing::warn!(title = %txn.title, date = %txn.date, "skipping mock transaction: {e}")
            }
        }
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests;
