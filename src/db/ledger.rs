use rusqlite::types::{ToSql, Type};
use rusqlite::{params, Params, Row};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use super::{StorageError, Store};
use crate::models::{Transaction, TransactionUpdate};

/// Column order shared by every SELECT and by `transaction_from_row`.
const COLUMNS: &str = "id, title, amount, category, description, date, created_at";

const ORDER_RECENT_FIRST: &str = "ORDER BY date DESC, created_at DESC, id DESC";

/// The columns an update is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Column {
    Title,
    Amount,
    Category,
    Description,
    Date,
}

impl Column {
    fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Description => "description",
            Self::Date => "date",
        }
    }
}

/// Repository over the `transactions` table.
#[derive(Debug, Clone)]
pub(crate) struct Ledger {
    store: Store,
}

impl Ledger {
    pub(crate) fn new(store: Store) -> Self {
        Self { store }
    }

    pub(crate) fn create(&self, txn: &Transaction) -> Result<i64, StorageError> {
        self.store.with_connection(|conn| {
            conn.execute(
                "INSERT INTO transactions (title, amount, category, description, date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    txn.title,
                    amount_to_sql(txn.amount)?,
                    txn.category,
                    txn.description,
                    txn.date,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub(crate) fn get_by_id(&self, id: i64) -> Result<Option<Transaction>, StorageError> {
        self.store.with_connection(|conn| {
            let result = conn.query_row(
                &format!("SELECT {COLUMNS} FROM transactions WHERE id = ?1"),
                params![id],
                transaction_from_row,
            );
            match result {
                Ok(t) => Ok(Some(t)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
    }

    /// Most recent activity first.
    pub(crate) fn get_all(&self) -> Result<Vec<Transaction>, StorageError> {
        self.store.with_connection(|conn| {
            query_transactions(
                conn,
                &format!("SELECT {COLUMNS} FROM transactions {ORDER_RECENT_FIRST}"),
                [],
            )
        })
    }

    /// Both bounds inclusive. "YYYY-MM-DD" strings sort in calendar order.
    pub(crate) fn get_by_date_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<Transaction>, StorageError> {
        self.store.with_connection(|conn| {
            query_transactions(
                conn,
                &format!(
                    "SELECT {COLUMNS} FROM transactions
                     WHERE date BETWEEN ?1 AND ?2
                     {ORDER_RECENT_FIRST}"
                ),
                params![start, end],
            )
        })
    }

    /// Returns false for an empty patch or an unknown id.
    pub(crate) fn update(&self, id: i64, update: &TransactionUpdate) -> Result<bool, StorageError> {
        let assignments = assignments(update)?;
        if assignments.is_empty() {
            return Ok(false);
        }

        let columns: Vec<Column> = assignments.iter().map(|(col, _)| *col).collect();
        let sql = update_sql(&columns);

        let mut values: Vec<&dyn ToSql> = assignments.iter().map(|(_, v)| v.as_ref()).collect();
        values.push(&id);

        self.store
            .with_connection(|conn| Ok(conn.execute(&sql, values.as_slice())? == 1))
    }

    pub(crate) fn delete(&self, id: i64) -> Result<bool, StorageError> {
        self.store.with_connection(|conn| {
            let removed = conn.execute("DELETE FROM transactions WHERE id = ?1", params![id])?;
            Ok(removed > 0)
        })
    }

    /// Removes every transaction. Returns how many were deleted.
    pub(crate) fn clear(&self) -> Result<usize, StorageError> {
        self.store
            .with_connection(|conn| conn.execute("DELETE FROM transactions", []))
    }

    pub(crate) fn count(&self) -> Result<i64, StorageError> {
        self.store.with_connection(|conn| {
            conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))
        })
    }

    /// Sum of all amounts; zero for an empty ledger.
    pub(crate) fn get_total_balance(&self) -> Result<Decimal, StorageError> {
        self.store.with_connection(|conn| {
            let total: f64 = conn.query_row(
                "SELECT COALESCE(SUM(amount), 0.0) FROM transactions",
                [],
                |row| row.get(0),
            )?;
            amount_from_sql(0, total)
        })
    }

    /// Per-category sums, largest first. Only categories that have rows appear.
    pub(crate) fn get_balance_by_category(&self) -> Result<Vec<(String, Decimal)>, StorageError> {
        self.store.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT category, SUM(amount) AS total
                 FROM transactions
                 GROUP BY category
                 ORDER BY total DESC, category",
            )?;
            let rows = stmt.query_map([], |row| {
                let category: String = row.get(0)?;
                let total: f64 = row.get(1)?;
                Ok((category, amount_from_sql(1, total)?))
            })?;
            rows.collect()
        })
    }
}

fn query_transactions<P: Params>(
    conn: &rusqlite::Connection,
    sql: &str,
    params: P,
) -> rusqlite::Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, transaction_from_row)?;
    rows.collect()
}

fn transaction_from_row(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let amount: f64 = row.get(2)?;
    Ok(Transaction {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        amount: amount_from_sql(2, amount)?,
        category: row.get(3)?,
        description: row.get(4)?,
        date: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Pairs each present patch field with its column, in a fixed order.
fn assignments(update: &TransactionUpdate) -> rusqlite::Result<Vec<(Column, Box<dyn ToSql>)>> {
    let mut out: Vec<(Column, Box<dyn ToSql>)> = Vec::new();
    if let Some(title) = &update.title {
        out.push((Column::Title, Box::new(title.clone())));
    }
    if let Some(amount) = update.amount {
        out.push((Column::Amount, Box::new(amount_to_sql(amount)?)));
    }
    if let Some(category) = &update.category {
        out.push((Column::Category, Box::new(category.clone())));
    }
    if let Some(description) = &update.description {
        out.push((Column::Description, Box::new(description.clone())));
    }
    if let Some(date) = &update.date {
        out.push((Column::Date, Box::new(date.clone())));
    }
    Ok(out)
}

pub(super) fn update_sql(columns: &[Column]) -> String {
    let set_clause = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ?{}", col.as_str(), i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE transactions SET {set_clause} WHERE id = ?{}",
        columns.len() + 1
    )
}

fn amount_to_sql(amount: Decimal) -> rusqlite::Result<f64> {
    amount.to_f64().ok_or_else(|| {
        rusqlite::Error::ToSqlConversionFailure(
            format!("amount {amount} cannot be stored as REAL").into(),
        )
    })
}

fn amount_from_sql(column: usize, value: f64) -> rusqlite::Result<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            Type::Real,
            format!("amount {value} is out of range").into(),
        )
    })
}
