//! Display seam for the balances list. The GUI toolkit embedding this crate
//! implements `BalancesView`; `BufferedBalancesView` is the plain-text
//! implementation used headless and in tests.

use std::sync::{Mutex, RwLock};

use anyhow::Result;
use async_trait::async_trait;

use crate::presenter::BalanceRow;

#[async_trait]
pub trait BalancesView: Send + Sync {
    /// Replace the displayed list with a fresh set of rows. An empty list
    /// means "nothing to show", which covers both no-address and
    /// not-yet-loaded without an error surface.
    async fn display_balances(&self, rows: Vec<BalanceRow>) -> Result<()>;
}

#[derive(Default)]
pub struct BufferedBalancesView {
    rows: RwLock<Vec<BalanceRow>>,
    rendered: Mutex<String>,
}

impl BufferedBalancesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<BalanceRow> {
        self.rows.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// One line per row, truncated amount first.
    pub fn rendered(&self) -> String {
        self.rendered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The verbatim base-unit value for a displayed symbol, i.e. what lands
    /// on the clipboard when the user copies a row.
    pub fn copy_value(&self, symbol: &str) -> Option<String> {
        self.rows
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|r| r.symbol == symbol)
            .map(|r| r.exact_amount.clone())
    }
}

#[async_trait]
impl BalancesView for BufferedBalancesView {
    async fn display_balances(&self, rows: Vec<BalanceRow>) -> Result<()> {
        let mut text = String::new();
        for row in &rows {
            text.push_str(&format!("{} {}\n", row.display_amount, row.symbol));
        }

        *self.rendered.lock().unwrap_or_else(|e| e.into_inner()) = text;
        *self.rows.write().unwrap_or_else(|e| e.into_inner()) = rows;
        Ok(())
    }
}
