//! Balance source adapter: reads the backend's balance storage and asks it to
//! refresh from the external indexing service.
//!
//! With no address selected, both operations are disabled rather than errors:
//! no request is issued and the stored snapshot reads as empty. Transport
//! failures are not retried here; the poll cadence is the only retry.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use ethers::types::Address;
use log::debug;

use crate::bridge::BridgeCommands;
use crate::entity::TokenBalance;
use crate::utils::parse_base_units;

#[async_trait]
pub trait BalancesInteractor: Send + Sync {
    /// Last known balances for `address` from backend storage, parsed into
    /// base-unit integers. `None` address yields an empty list without
    /// touching the backend.
    async fn stored_balances(&self, address: Option<Address>) -> Result<Vec<TokenBalance>>;

    /// Trigger a backend-side refresh from the indexing service. The result
    /// lands in storage and is observed via `stored_balances`, not here.
    async fn request_index_refresh(&self, chain_id: u32, address: Option<Address>) -> Result<()>;
}

pub struct BalancesInteractorImpl {
    bridge: Arc<BridgeCommands>,
}

impl BalancesInteractorImpl {
    pub fn new(bridge: Arc<BridgeCommands>) -> Self {
        Self { bridge }
    }
}

#[async_trait]
impl BalancesInteractor for BalancesInteractorImpl {
    async fn stored_balances(&self, address: Option<Address>) -> Result<Vec<TokenBalance>> {
        let Some(address) = address else {
            return Ok(vec![]);
        };

        let pairs = self.bridge.db_get_erc20_balances(address).await?;
        let mut balances = Vec::with_capacity(pairs.len());
        for (contract, raw) in pairs {
            balances.push(TokenBalance::new(contract, parse_base_units(&raw)?));
        }
        Ok(balances)
    }

    async fn request_index_refresh(&self, chain_id: u32, address: Option<Address>) -> Result<()> {
        let Some(address) = address else {
            debug!("no address selected, skipping balance refresh");
            return Ok(());
        };

        self.bridge.alchemy_fetch_balances(chain_id, address).await
    }
}
