use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use ethers::types::Address;

use crate::bridge::BridgeCommands;
use crate::entity::Wallet;

#[async_trait]
pub trait WalletsInteractor: Send + Sync {
    async fn list_wallets(&self) -> Result<Vec<Wallet>>;

    /// `(path label, address)` pairs for the named wallet, in backend order.
    async fn wallet_addresses(&self, name: &str) -> Result<Vec<(String, Address)>>;
}

pub struct WalletsInteractorImpl {
    bridge: Arc<BridgeCommands>,
}

impl WalletsInteractorImpl {
    pub fn new(bridge: Arc<BridgeCommands>) -> Self {
        Self { bridge }
    }
}

#[async_trait]
impl WalletsInteractor for WalletsInteractorImpl {
    async fn list_wallets(&self) -> Result<Vec<Wallet>> {
        self.bridge.wallets_get_all().await
    }

    async fn wallet_addresses(&self, name: &str) -> Result<Vec<(String, Address)>> {
        self.bridge.wallets_get_wallet_addresses(name).await
    }
}
