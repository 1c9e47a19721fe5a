//! Quick wallet switcher: lists known wallets and commits a pick to the
//! selection store synchronously.

use std::sync::{Arc, RwLock};

use anyhow::Result;

use crate::entity::{AppError, Wallet};
use crate::interactor::WalletsInteractor;
use crate::state::SelectionStore;

/// What the control renders. `Loading` until the wallet list has arrived;
/// never an empty interactive control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletSelectState {
    Loading,
    Ready {
        options: Vec<String>,
        selected: String,
    },
}

pub struct QuickWalletSelect {
    wallets: Arc<dyn WalletsInteractor>,
    selection: Arc<SelectionStore>,
    loaded: RwLock<Option<Vec<Wallet>>>,
}

impl QuickWalletSelect {
    pub fn new(wallets: Arc<dyn WalletsInteractor>, selection: Arc<SelectionStore>) -> Self {
        Self {
            wallets,
            selection,
            loaded: RwLock::new(None),
        }
    }

    /// Fetch the wallet list. Also seeds the current wallet when nothing is
    /// selected yet, so the control never shows Ready without a selection.
    pub async fn load(&self) -> Result<()> {
        let wallets = self.wallets.list_wallets().await?;

        if self.selection.current().wallet.is_none() {
            if let Some(first) = wallets.first() {
                self.selection.set_current_wallet(first.name.clone());
            }
        }

        *self.loaded.write().unwrap_or_else(|e| e.into_inner()) = Some(wallets);
        Ok(())
    }

    pub fn state(&self) -> WalletSelectState {
        let loaded = self.loaded.read().unwrap_or_else(|e| e.into_inner());
        let current = self.selection.current().wallet;

        match (loaded.as_ref(), current) {
            (Some(wallets), Some(selected)) if !wallets.is_empty() => WalletSelectState::Ready {
                options: wallets.iter().map(|w| w.name.clone()).collect(),
                selected,
            },
            _ => WalletSelectState::Loading,
        }
    }

    /// Commit a pick. The name must be one of the offered values; the control
    /// only ever offers known-valid ones.
    pub fn select(&self, name: &str) -> Result<()> {
        let loaded = self.loaded.read().unwrap_or_else(|e| e.into_inner());
        let known = loaded
            .as_ref()
            .is_some_and(|wallets| wallets.iter().any(|w| w.name == name));
        if !known {
            return Err(AppError::WalletNotFound(name.to_string()).into());
        }

        self.selection.set_current_wallet(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ethers::types::Address;

    use crate::entity::Network;

    struct FixedWallets(Vec<Wallet>);

    #[async_trait]
    impl WalletsInteractor for FixedWallets {
        async fn list_wallets(&self) -> Result<Vec<Wallet>> {
            Ok(self.0.clone())
        }

        async fn wallet_addresses(&self, _name: &str) -> Result<Vec<(String, Address)>> {
            Ok(vec![])
        }
    }

    fn select_with(wallets: Vec<Wallet>) -> (QuickWalletSelect, Arc<SelectionStore>) {
        let selection = Arc::new(SelectionStore::new(Network::mainnet()));
        (
            QuickWalletSelect::new(Arc::new(FixedWallets(wallets)), selection.clone()),
            selection,
        )
    }

    #[tokio::test]
    async fn loading_until_list_arrives() {
        let (select, _) = select_with(vec![Wallet::new("hot"), Wallet::new("cold")]);
        assert_eq!(select.state(), WalletSelectState::Loading);

        select.load().await.unwrap();
        assert_eq!(
            select.state(),
            WalletSelectState::Ready {
                options: vec!["hot".into(), "cold".into()],
                selected: "hot".into(),
            }
        );
    }

    #[tokio::test]
    async fn selecting_updates_the_store_synchronously() {
        let (select, selection) = select_with(vec![Wallet::new("hot"), Wallet::new("cold")]);
        select.load().await.unwrap();

        select.select("cold").unwrap();
        assert_eq!(selection.current().wallet.as_deref(), Some("cold"));
    }

    #[tokio::test]
    async fn unknown_wallet_is_rejected() {
        let (select, selection) = select_with(vec![Wallet::new("hot")]);
        select.load().await.unwrap();

        assert!(select.select("nope").is_err());
        assert_eq!(selection.current().wallet.as_deref(), Some("hot"));
    }

    #[tokio::test]
    async fn empty_wallet_list_stays_loading() {
        let (select, _) = select_with(vec![]);
        select.load().await.unwrap();
        assert_eq!(select.state(), WalletSelectState::Loading);
    }
}
