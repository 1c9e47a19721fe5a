//! Client side of the backend command interface.
//!
//! The wallet backend runs in a separate process and is reached by invoking
//! named commands with a JSON parameter object. This module keeps the
//! name-based dispatch behind a typed wrapper so the rest of the crate never
//! touches raw command names or payloads.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use ethers::types::Address;
use log::debug;
use serde_json::{json, Value};

use crate::entity::{GeneralSettings, Network, Wallet};

#[cfg(test)]
use mockall::automock;

/// Transport over which backend commands travel. Implementations are owned by
/// whatever embeds this crate (IPC, JSON-RPC over a socket, test doubles).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn invoke(&self, method: &str, params: Value) -> Result<Value>;
}

/// Typed wrappers around the backend command set.
pub struct BridgeCommands {
    client: Arc<dyn BackendClient>,
}

impl BridgeCommands {
    pub fn new(client: Arc<dyn BackendClient>) -> Self {
        Self { client }
    }

    pub async fn settings_get(&self) -> Result<GeneralSettings> {
        let res = self.client.invoke("settings_get", json!({})).await?;
        serde_json::from_value(res).context("settings_get: malformed response")
    }

    /// Last known ERC-20 balances for `address`, straight from backend
    /// storage. Balances arrive as decimal strings and are parsed upstream.
    pub async fn db_get_erc20_balances(&self, address: Address) -> Result<Vec<(Address, String)>> {
        let res = self
            .client
            .invoke("db_get_erc20_balances", json!({ "address": address }))
            .await?;
        serde_json::from_value(res).context("db_get_erc20_balances: malformed response")
    }

    /// Asks the backend to refresh its balance storage from the external
    /// indexing service. The updated values are observed through
    /// `db_get_erc20_balances`, not through this call's response.
    pub async fn alchemy_fetch_balances(&self, chain_id: u32, address: Address) -> Result<()> {
        debug!(
            "requesting balance refresh for {:?} on chain {}",
            address, chain_id
        );
        self.client
            .invoke(
                "alchemy_fetch_balances",
                json!({ "chainId": chain_id, "address": address }),
            )
            .await?;
        Ok(())
    }

    pub async fn wallets_get_all(&self) -> Result<Vec<Wallet>> {
        let res = self.client.invoke("wallets_get_all", json!({})).await?;
        serde_json::from_value(res).context("wallets_get_all: malformed response")
    }

    /// `(path label, address)` pairs for the named wallet.
    pub async fn wallets_get_wallet_addresses(
        &self,
        name: &str,
    ) -> Result<Vec<(String, Address)>> {
        let res = self
            .client
            .invoke("wallets_get_wallet_addresses", json!({ "name": name }))
            .await?;
        serde_json::from_value(res).context("wallets_get_wallet_addresses: malformed response")
    }

    pub async fn networks_get_current(&self) -> Result<Network> {
        let res = self
            .client
            .invoke("networks_get_current", json!({}))
            .await?;
        serde_json::from_value(res).context("networks_get_current: malformed response")
    }
}
