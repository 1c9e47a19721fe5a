//! Seam for the wallet-connection library: direct chain reads that do not go
//! through the backend bridge. Native balances come from the current
//! network's provider; symbol/decimals are standard ERC-20 reads.

use anyhow::Result;
use async_trait::async_trait;
use ethers::types::{Address, U256};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChainQuery: Send + Sync {
    async fn native_balance(&self, chain_id: u32, address: Address) -> Result<U256>;

    async fn erc20_symbol(&self, chain_id: u32, contract: Address) -> Result<String>;

    async fn erc20_decimals(&self, chain_id: u32, contract: Address) -> Result<u8>;
}
