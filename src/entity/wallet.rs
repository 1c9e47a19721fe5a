use serde::{Deserialize, Serialize};

/// A named collection of derivation paths. The addresses themselves are
/// resolved by the backend via `wallets_get_wallet_addresses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub name: String,
    #[serde(default)]
    pub current_path: Option<String>,
}

impl Wallet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current_path: None,
        }
    }
}
