mod ledger;
mod schema;

use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

pub(crate) use ledger::Ledger;

#[derive(Debug, thiserror::Error)]
pub(crate) enum StorageError {
    #[error("Failed to open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Location of the ledger database. Every operation opens its own connection.
#[derive(Debug, Clone)]
pub(crate) struct Store {
    path: PathBuf,
}

impl Store {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StorageError> {
        Connection::open(&self.path).map_err(|source| StorageError::Open {
            path: self.path.clone(),
            source,
        })
    }

    /// Run `f` on a fresh connection inside a single transaction.
    ///
    /// The transaction commits only if `f` succeeds. On any error it is
    /// dropped uncommitted, which rolls it back, and the connection is closed
    /// before the error reaches the caller.
    pub(crate) fn with_connection<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&rusqlite::Transaction<'_>) -> rusqlite::Result<T>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

/// Bring the schema up to date. Returns the (previous, current) schema version;
/// a fresh database reports 0 as its previous version.
pub(crate) fn migrate(store: &Store) -> Result<(i32, i32), StorageError> {
    let mut conn = store.connect()?;
    // journal_mode cannot change inside a transaction
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    let tx = conn.transaction()?;
    let has_version_table: bool = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    let previous: i32 = if has_version_table {
        tx.query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?
        .unwrap_or(0)
    } else {
        0
    };

    let mut current = previous;
    if current == 0 {
        // Fresh database, or one whose table was created by another tool
        tx.execute_batch(schema::SCHEMA_V1)?;
        tx.execute("INSERT INTO schema_version (version) VALUES (1)", [])?;
        current = 1;
        tracing::debug!(path = %store.path().display(), "applied base schema");
    }

    for &(from_version, sql) in schema::MIGRATIONS {
        if current <= from_version {
            tx.execute_batch(sql)?;
            tracing::debug!(from_version, "applied migration");
        }
    }

    if current < schema::CURRENT_VERSION {
        tx.execute(
            "UPDATE schema_version SET version = ?1",
            params![schema::CURRENT_VERSION],
        )?;
    }
    tx.commit()?;

    Ok((previous, schema::CURRENT_VERSION.max(current)))
}
