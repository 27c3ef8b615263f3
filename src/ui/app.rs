use anyhow::Result;
use rust_decimal::Decimal;

use crate::db::Ledger;
use crate::models::Transaction;
use crate::report::Summary;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) const RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions]
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Transactions,
            Self::Transactions => Self::Dashboard,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
        }
    }
}

/// Read-only view state for the dashboard. Everything is reloaded from the
/// ledger on `refresh`.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) show_help: bool,
    pub(crate) status_message: String,

    pub(crate) total_balance: Decimal,
    pub(crate) balance_by_category: Vec<(String, Decimal)>,
    /// Most recent first.
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) summary: Summary,

    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            show_help: false,
            status_message: String::new(),
            total_balance: Decimal::ZERO,
            balance_by_category: Vec::new(),
            transactions: Vec::new(),
            summary: Summary::default(),
            transaction_index: 0,
            transaction_scroll: 0,
            visible_rows: 20,
        }
    }

    pub(crate) fn refresh(&mut self, ledger: &Ledger) -> Result<()> {
        self.total_balance = ledger.get_total_balance()?;
        self.balance_by_category = ledger.get_balance_by_category()?;
        let transactions = ledger.get_all()?;
        self.load(transactions);
        Ok(())
    }

    /// Replace the transaction list and recompute derived figures,
    /// keeping the cursor in range.
    pub(crate) fn load(&mut self, transactions: Vec<Transaction>) {
        self.summary = Summary::from_transactions(&transactions);
        self.transactions = transactions;
        let last = self.transactions.len().saturating_sub(1);
        self.transaction_index = self.transaction_index.min(last);
        self.transaction_scroll = self.transaction_scroll.min(self.transaction_index);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub(crate) fn recent(&self) -> &[Transaction] {
        let n = self.transactions.len().min(RECENT_LIMIT);
        &self.transactions[..n]
    }

    pub(crate) fn transaction_page(&self) -> usize {
        self.visible_rows.saturating_sub(3).max(1)
    }

    pub(crate) fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.set_status(format!("{screen}"));
    }

    pub(crate) fn move_down(&mut self) {
        if self.screen == Screen::Transactions {
            let page = self.transaction_page();
            scroll_down(
                &mut self.transaction_index,
                &mut self.transaction_scroll,
                self.transactions.len(),
                page,
            );
        }
    }

    pub(crate) fn move_up(&mut self) {
        if self.screen == Screen::Transactions {
            scroll_up(&mut self.transaction_index, &mut self.transaction_scroll);
        }
    }

    pub(crate) fn goto_top(&mut self) {
        if self.screen == Screen::Transactions {
            scroll_to_top(&mut self.transaction_index, &mut self.transaction_scroll);
        }
    }

    pub(crate) fn goto_bottom(&mut self) {
        if self.screen == Screen::Transactions {
            let page = self.transaction_page();
            scroll_to_bottom(
                &mut self.transaction_index,
                &mut self.transaction_scroll,
                self.transactions.len(),
                page,
            );
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
