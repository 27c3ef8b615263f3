mod config;
mod db;
mod models;
mod report;
mod run;
mod seed;
mod ui;
mod validate;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(cli.log_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let db_path = cli.db_path()?;
    tracing::debug!(path = %db_path.display(), "using ledger database");
    let store = db::Store::new(&db_path);

    // `init` reports on the migration itself
    if !matches!(cli.command, Command::Init) {
        db::migrate(&store)
            .with_context(|| format!("Failed to prepare database {}", db_path.display()))?;
    }

    run::execute(cli.command, &store)
}
