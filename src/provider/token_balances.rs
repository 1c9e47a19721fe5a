//! Aggregates ERC-20 balances for the current selection and shares them with
//! every consumer through a watch channel.
//!
//! The provider never shows anything but the latest successfully fetched
//! snapshot. Fetches are tagged with a generation number so a slow response
//! for an outdated (address, chain) pair cannot overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use futures::FutureExt;
use log::{debug, warn};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::entity::TokenBalance;
use crate::interactor::BalancesInteractor;
use crate::palette::{Action, CommandPalette};
use crate::state::{SelectionStore, TransactionsSignal};

/// Stable palette identity for the refresh action; re-registration replaces.
pub const REFRESH_ACTION_ID: &str = "token-balances";

pub struct TokenBalancesProvider {
    interactor: Arc<dyn BalancesInteractor>,
    selection: Arc<SelectionStore>,
    balances: watch::Sender<Vec<TokenBalance>>,
    generation: AtomicU64,
}

impl TokenBalancesProvider {
    pub fn new(interactor: Arc<dyn BalancesInteractor>, selection: Arc<SelectionStore>) -> Self {
        let (balances, _) = watch::channel(vec![]);
        Self {
            interactor,
            selection,
            balances,
            generation: AtomicU64::new(0),
        }
    }

    /// Latest snapshot. Empty until the first successful fetch.
    pub fn balances(&self) -> Vec<TokenBalance> {
        self.balances.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<TokenBalance>> {
        self.balances.subscribe()
    }

    /// Re-read the stored snapshot for the current selection. A fetch only
    /// lands if no newer fetch has started and the selection is unchanged.
    pub async fn reload(&self) -> Result<()> {
        let selection = self.selection.current();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let fetched = self.interactor.stored_balances(selection.address).await?;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("dropping stale balance fetch (generation {})", generation);
            return Ok(());
        }
        if self.selection.current() != selection {
            debug!("selection changed mid-fetch, dropping balance snapshot");
            return Ok(());
        }

        self.balances.send_replace(fetched);
        Ok(())
    }

    /// Force an immediate refresh: ask the backend to re-index, then re-read
    /// storage. This is what the palette action and the poller both run.
    pub async fn refresh(&self) -> Result<()> {
        let selection = self.selection.current();
        self.interactor
            .request_index_refresh(selection.chain_id(), selection.address)
            .await?;
        self.reload().await
    }

    /// Register the "Refresh tokens balances" action. The handler holds a
    /// weak reference, so it always runs against the live provider and goes
    /// quiet once the provider is dropped.
    pub fn register_palette_action(self: &Arc<Self>, palette: &CommandPalette) {
        let provider = Arc::downgrade(self);
        palette.register(
            Action::new(REFRESH_ACTION_ID, "Refresh tokens balances").with_perform(Arc::new(
                move || {
                    let provider = provider.clone();
                    async move {
                        let Some(provider) = provider.upgrade() else {
                            return;
                        };
                        if let Err(e) = provider.refresh().await {
                            warn!("palette-triggered balance refresh failed: {}", e);
                        }
                    }
                    .boxed()
                },
            )),
        );
    }

    /// Eagerly re-read the snapshot whenever new transactions are observed.
    pub fn spawn_transactions_listener(
        self: &Arc<Self>,
        signal: &TransactionsSignal,
    ) -> JoinHandle<()> {
        let mut rx = signal.subscribe();
        let provider = Arc::downgrade(self);

        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                        let Some(provider) = provider.upgrade() else {
                            break;
                        };
                        if let Err(e) = provider.reload().await {
                            warn!("balance reload after transactions signal failed: {}", e);
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;
    use ethers::types::{Address, U256};
    use tokio::sync::Notify;

    use crate::entity::Network;

    struct StubInteractor {
        reads: AtomicUsize,
        refreshes: AtomicUsize,
        // when set, only the first read blocks on the gate
        gate: Option<Arc<Notify>>,
    }

    impl StubInteractor {
        fn new() -> Self {
            Self {
                reads: AtomicUsize::new(0),
                refreshes: AtomicUsize::new(0),
                gate: None,
            }
        }

        fn first_read_gated(gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl BalancesInteractor for StubInteractor {
        async fn stored_balances(&self, address: Option<Address>) -> Result<Vec<TokenBalance>> {
            let n = self.reads.fetch_add(1, Ordering::SeqCst);
            if n == 0 {
                if let Some(gate) = &self.gate {
                    gate.notified().await;
                }
            }
            Ok(address
                .map(|a| vec![TokenBalance::new(a, U256::from(n as u64 + 1))])
                .unwrap_or_default())
        }

        async fn request_index_refresh(&self, _chain_id: u32, address: Option<Address>) -> Result<()> {
            if address.is_some() {
                self.refreshes.fetch_add(1, Ordering::SeqCst);
            }
            Ok(())
        }
    }

    fn provider_with(interactor: Arc<StubInteractor>) -> (Arc<TokenBalancesProvider>, Arc<SelectionStore>) {
        let selection = Arc::new(SelectionStore::new(Network::mainnet()));
        let provider = Arc::new(TokenBalancesProvider::new(interactor, selection.clone()));
        (provider, selection)
    }

    #[tokio::test]
    async fn unloaded_balances_read_as_empty() {
        let (provider, _) = provider_with(Arc::new(StubInteractor::new()));
        assert!(provider.balances().is_empty());
    }

    #[tokio::test]
    async fn refresh_triggers_indexer_then_reads_storage() {
        let interactor = Arc::new(StubInteractor::new());
        let (provider, selection) = provider_with(interactor.clone());
        selection.set_current_address(Address::from_low_u64_be(0xaa));

        provider.refresh().await.unwrap();
        assert_eq!(interactor.refreshes.load(Ordering::SeqCst), 1);
        assert_eq!(provider.balances().len(), 1);
    }

    #[tokio::test]
    async fn no_address_means_no_indexer_call_and_empty_list() {
        let interactor = Arc::new(StubInteractor::new());
        let (provider, _) = provider_with(interactor.clone());

        provider.refresh().await.unwrap();
        assert_eq!(interactor.refreshes.load(Ordering::SeqCst), 0);
        assert!(provider.balances().is_empty());
    }

    #[tokio::test]
    async fn stale_fetch_does_not_overwrite_newer_snapshot() {
        let gate = Arc::new(Notify::new());
        let interactor = Arc::new(StubInteractor::first_read_gated(gate.clone()));
        let (provider, selection) = provider_with(interactor.clone());
        selection.set_current_address(Address::from_low_u64_be(0xaa));

        // an old fetch hangs in flight...
        let slow = tokio::spawn({
            let provider = provider.clone();
            async move { provider.reload().await }
        });
        while interactor.reads.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        // ...while a newer one starts and settles first
        provider.reload().await.unwrap();
        let settled = provider.balances();
        assert!(!settled.is_empty());

        // the older fetch finally settles and must be dropped
        gate.notify_one();
        slow.await.unwrap().unwrap();
        assert_eq!(provider.balances(), settled);
    }

    #[tokio::test]
    async fn transactions_signal_triggers_eager_reload() {
        let interactor = Arc::new(StubInteractor::new());
        let (provider, selection) = provider_with(interactor.clone());
        selection.set_current_address(Address::from_low_u64_be(0xaa));

        let signal = TransactionsSignal::new();
        let handle = provider.spawn_transactions_listener(&signal);

        signal.notify();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(interactor.reads.load(Ordering::SeqCst), 1);

        handle.abort();
    }

    #[tokio::test]
    async fn palette_action_is_registered_once_with_stable_id() {
        let interactor = Arc::new(StubInteractor::new());
        let (provider, selection) = provider_with(interactor.clone());
        selection.set_current_address(Address::from_low_u64_be(0xaa));

        let palette = CommandPalette::new();
        provider.register_palette_action(&palette);
        provider.register_palette_action(&palette);
        assert_eq!(palette.actions().len(), 1);

        assert!(palette.perform(REFRESH_ACTION_ID).await);
        assert_eq!(interactor.refreshes.load(Ordering::SeqCst), 1);
    }
}
