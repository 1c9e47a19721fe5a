use ethers::types::{Address, U256};
use serde::{Deserialize, Serialize};

/// One ERC-20 balance from the latest fetched snapshot, in base units.
/// At most one entry exists per contract per snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub contract: Address,
    pub balance: U256,
}

impl TokenBalance {
    pub fn new(contract: Address, balance: U256) -> Self {
        Self { contract, balance }
    }

    pub fn is_zero(&self) -> bool {
        self.balance.is_zero()
    }
}
