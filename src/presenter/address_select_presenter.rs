//! Quick address switcher: lists `(path label, address)` pairs under the
//! current wallet and commits a pick to the selection store.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use ethers::types::Address;
use log::debug;

use crate::entity::AppError;
use crate::interactor::WalletsInteractor;
use crate::state::SelectionStore;
use crate::utils::short_address;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressSelectState {
    Loading,
    Ready {
        options: Vec<(String, Address)>,
        selected: String,
    },
}

pub struct QuickAddressSelect {
    wallets: Arc<dyn WalletsInteractor>,
    selection: Arc<SelectionStore>,
    loaded: RwLock<Option<Vec<(String, Address)>>>,
}

impl QuickAddressSelect {
    pub fn new(wallets: Arc<dyn WalletsInteractor>, selection: Arc<SelectionStore>) -> Self {
        Self {
            wallets,
            selection,
            loaded: RwLock::new(None),
        }
    }

    /// Fetch addresses for the current wallet. With no wallet selected this
    /// is a disabled precondition: the control just stays in Loading.
    pub async fn load(&self) -> Result<()> {
        let Some(wallet) = self.selection.current().wallet else {
            debug!("no wallet selected, address select stays unloaded");
            return Ok(());
        };

        let addresses = self.wallets.wallet_addresses(&wallet).await?;

        // default the selection to the first entry, mirroring what the
        // control displays before the user picks anything
        if self.selection.current_address().is_none() {
            if let Some((_, address)) = addresses.first() {
                self.selection.set_current_address(*address);
            }
        }

        *self.loaded.write().unwrap_or_else(|e| e.into_inner()) = Some(addresses);
        Ok(())
    }

    pub fn state(&self) -> AddressSelectState {
        let loaded = self.loaded.read().unwrap_or_else(|e| e.into_inner());
        let current = self.selection.current_address();

        match loaded.as_ref() {
            Some(options) if !options.is_empty() => {
                let selected = current
                    .and_then(|address| {
                        options
                            .iter()
                            .find(|(_, a)| *a == address)
                            .map(|(label, _)| label.clone())
                    })
                    .unwrap_or_else(|| options[0].0.clone());
                AddressSelectState::Ready {
                    options: options.clone(),
                    selected,
                }
            }
            _ => AddressSelectState::Loading,
        }
    }

    /// Compact rendering of the currently selected address for the closed
    /// control, e.g. `0x0000…00aa`.
    pub fn render_value(&self) -> Option<String> {
        let address = self.selection.current_address()?;
        Some(short_address(&format!("{:#x}", address)))
    }

    /// Commit a pick by path label.
    pub fn select(&self, path_label: &str) -> Result<()> {
        let loaded = self.loaded.read().unwrap_or_else(|e| e.into_inner());
        let address = loaded
            .as_ref()
            .and_then(|options| options.iter().find(|(label, _)| label == path_label))
            .map(|(_, address)| *address)
            .ok_or_else(|| AppError::AddressNotFound(path_label.to_string()))?;

        self.selection.set_current_address(address);
        Ok(())
    }
}
