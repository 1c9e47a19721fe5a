use serde::{Deserialize, Serialize};

/// A chain known to the backend. Exactly one network is current at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    pub chain_id: u32,
    pub currency_symbol: String,
}

impl Network {
    pub fn mainnet() -> Self {
        Self {
            name: "mainnet".into(),
            chain_id: 1,
            currency_symbol: "ETH".into(),
        }
    }
}
