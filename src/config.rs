use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::seed::DEFAULT_SEED;

#[derive(Parser, Debug)]
#[command(
    name = "clifin",
    version,
    about = "Clifin - a local personal finance ledger"
)]
pub(crate) struct Cli {
    /// Path to the ledger database (default: platform data directory)
    #[arg(long, global = true, env = "CLIFIN_DB")]
    pub(crate) db: Option<PathBuf>,

    /// Debug logging on stderr (CLIFIN_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// (Add) Insert a new revenue.
    Add(EntryArgs),
    /// (Subtract) Insert a new expense.
    Sub(EntryArgs),
    /// Delete an entry from the database.
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Update an entry in the database.
    Update(UpdateArgs),
    /// Initialize the database and run migrations.
    Init,
    /// Show financial summary.
    Summary,
    /// List transactions.
    List(ListArgs),
    /// Open the terminal dashboard.
    Dashboard,
    /// Replace all transactions with generated mock data.
    Seed {
        #[arg(long, default_value_t = 200)]
        count: usize,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

#[derive(Args, Debug)]
pub(crate) struct EntryArgs {
    pub(crate) title: String,
    /// Whole, positive number
    #[arg(allow_hyphen_values = true)]
    pub(crate) amount: String,
    pub(crate) category: String,
    #[arg(long, default_value = "")]
    pub(crate) description: String,
    /// YYYY-MM-DD (default: today)
    #[arg(long, default_value = "")]
    pub(crate) date: String,
}

/// Empty values are treated the same as omitted flags.
#[derive(Args, Debug, Default)]
pub(crate) struct UpdateArgs {
    pub(crate) id: i64,
    #[arg(long)]
    pub(crate) title: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) amount: Option<String>,
    #[arg(long)]
    pub(crate) category: Option<String>,
    #[arg(long)]
    pub(crate) description: Option<String>,
    #[arg(long)]
    pub(crate) date: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) from: Option<String>,
    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) to: Option<String>,
    /// Maximum rows to show
    #[arg(long, default_value_t = 20)]
    pub(crate) limit: usize,
}

impl Cli {
    pub(crate) fn db_path(&self) -> Result<PathBuf> {
        match &self.db {
            Some(path) => Ok(path.clone()),
            None => default_db_path(),
        }
    }

    pub(crate) fn log_filter(&self) -> tracing_subscriber::EnvFilter {
        let fallback = if self.verbose { "clifin=debug" } else { "warn" };
        tracing_subscriber::EnvFilter::try_from_env("CLIFIN_LOG")
            .unwrap_or_else(|_| fallback.into())
    }
}

fn default_db_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "clifin", "Clifin")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("clifin.db"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
