//! Background polling task for balances.
//!
//! Polling is an explicit scheduled task, not a re-render side effect: the
//! task refreshes immediately on start, then on a fixed cadence, and restarts
//! the cadence whenever the selected (address, chain) changes. `stop` tears
//! it down.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::{debug, error, info, warn};
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::provider::TokenBalancesProvider;
use crate::state::SelectionStore;

/// How often the backend is asked to re-index balances unless a refresh is
/// invoked early.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10 * 60);

pub struct BalancePoller {
    provider: Arc<TokenBalancesProvider>,
    selection: Arc<SelectionStore>,
    poll_interval: Duration,
    stop_tx: Option<mpsc::Sender<()>>,
}

impl BalancePoller {
    pub fn new(provider: Arc<TokenBalancesProvider>, selection: Arc<SelectionStore>) -> Self {
        Self::with_interval(provider, selection, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_interval(
        provider: Arc<TokenBalancesProvider>,
        selection: Arc<SelectionStore>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            provider,
            selection,
            poll_interval,
            stop_tx: None,
        }
    }

    pub async fn start(&mut self) -> Result<()> {
        if self.stop_tx.is_some() {
            warn!("balance poller is already running");
            return Ok(());
        }

        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
        self.stop_tx = Some(stop_tx);

        let provider = self.provider.clone();
        let mut selection_rx = self.selection.subscribe();
        let poll_interval = self.poll_interval;

        tokio::spawn(async move {
            // first tick fires immediately, covering the fetch-on-start case
            let mut ticker = interval(poll_interval);

            loop {
                select! {
                    _ = ticker.tick() => {
                        if let Err(e) = provider.refresh().await {
                            error!("scheduled balance refresh failed: {}", e);
                        }
                    }
                    changed = selection_rx.changed() => {
                        if changed.is_err() {
                            debug!("selection store dropped, stopping balance poller");
                            break;
                        }
                        // restart the cadence for the new (address, chain)
                        ticker.reset();
                        if let Err(e) = provider.refresh().await {
                            error!("balance refresh after selection change failed: {}", e);
                        }
                    }
                    _ = stop_rx.recv() => {
                        info!("stopping balance poller");
                        break;
                    }
                }
            }
        });

        info!("balance poller started (interval {:?})", self.poll_interval);
        Ok(())
    }

    pub async fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(()).await;
        }
    }
}
