//! The globally selected wallet, address and network.
//!
//! This is an explicit state container owned by the application root, not
//! ambient module state: every update goes through the store and is observed
//! by subscribers through a watch channel, so late subscribers always see the
//! latest value.

use ethers::types::Address;
use tokio::sync::watch;

use crate::entity::Network;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub wallet: Option<String>,
    pub address: Option<Address>,
    pub network: Network,
}

impl Selection {
    pub fn chain_id(&self) -> u32 {
        self.network.chain_id
    }
}

pub struct SelectionStore {
    tx: watch::Sender<Selection>,
}

impl SelectionStore {
    pub fn new(network: Network) -> Self {
        let (tx, _) = watch::channel(Selection {
            wallet: None,
            address: None,
            network,
        });
        Self { tx }
    }

    pub fn current(&self) -> Selection {
        self.tx.borrow().clone()
    }

    pub fn current_address(&self) -> Option<Address> {
        self.tx.borrow().address
    }

    pub fn subscribe(&self) -> watch::Receiver<Selection> {
        self.tx.subscribe()
    }

    /// Switching wallets also drops the current address; it belonged to the
    /// previous wallet and the address selector repopulates from the new one.
    pub fn set_current_wallet(&self, name: impl Into<String>) {
        let name = name.into();
        self.tx.send_modify(|sel| {
            if sel.wallet.as_deref() != Some(name.as_str()) {
                sel.wallet = Some(name);
                sel.address = None;
            }
        });
    }

    pub fn set_current_address(&self, address: Address) {
        self.tx.send_modify(|sel| sel.address = Some(address));
    }

    pub fn set_current_network(&self, network: Network) {
        self.tx.send_modify(|sel| sel.network = network);
    }
}
