use rust_decimal::Decimal;

/// One ledger entry. The sign of `amount` is the only revenue/expense marker.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    pub(crate) id: Option<i64>,
    pub(crate) title: String,
    pub(crate) amount: Decimal,
    pub(crate) category: String,
    /// Format: "YYYY-MM-DD"
    pub(crate) date: String,
    pub(crate) description: Option<String>,
    /// Set by the database on insert.
    pub(crate) created_at: Option<String>,
}

impl Transaction {
    pub(crate) fn new(title: String, amount: Decimal, category: String, date: String) -> Self {
        Self {
            id: None,
            title,
            amount,
            category,
            date,
            description: None,
            created_at: None,
        }
    }

    pub(crate) fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.is_empty());
        self
    }

    pub(crate) fn is_revenue(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub(crate) fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub(crate) fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// "YYYY-MM" part of the date.
    pub(crate) fn month(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }
}

/// Fields to change on an existing transaction. `None` leaves the column alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TransactionUpdate {
    pub(crate) title: Option<String>,
    pub(crate) amount: Option<Decimal>,
    pub(crate) category: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) date: Option<String>,
}

impl TransactionUpdate {
    pub(crate) fn has_updates(&self) -> bool {
        self.title.is_some()
            || self.amount.is_some()
            || self.category.is_some()
            || self.description.is_some()
            || self.date.is_some()
    }
}
