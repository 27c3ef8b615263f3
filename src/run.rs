mod cli;
mod tui;

use anyhow::Result;

use crate::config::Command;
use crate::db::{Ledger, Store};
use crate::models::Transaction;

pub(crate) fn execute(command: Command, store: &Store) -> Result<()> {
    let ledger = Ledger::new(store.clone());
    match command {
        Command::Add(args) => cli::cli_add(&args, &ledger, Kind::Revenue),
        Command::Sub(args) => cli::cli_add(&args, &ledger, Kind::Expense),
        Command::Delete { id, force } => cli::cli_delete(id, force, &ledger),
        Command::Update(args) => cli::cli_update(&args, &ledger),
        Command::Init => cli::cli_init(store),
        Command::Summary => cli::cli_summary(&ledger),
        Command::List(args) => cli::cli_list(&args, &ledger),
        Command::Dashboard => tui::as_tui(&ledger),
        Command::Seed { count, seed } => cli::cli_seed(count, seed, &ledger),
    }
}

/// Which side of the ledger an `add`/`sub` entry lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Revenue,
    Expense,
}

impl Kind {
    pub(crate) fn of(txn: &Transaction) -> Self {
        if txn.is_expense() {
            Self::Expense
        } else {
            Self::Revenue
        }
    }
}
