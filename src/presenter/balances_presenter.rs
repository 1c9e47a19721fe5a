//! Builds the balances list view-model: one row for the native asset, one per
//! ERC-20 token with known metadata.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use ethers::types::{Address, U256};
use log::{debug, warn};

use crate::chain::ChainQuery;
use crate::interactor::SettingsInteractor;
use crate::provider::TokenBalancesProvider;
use crate::state::SelectionStore;
use crate::utils::format_balance;
use crate::view::BalancesView;

pub const NATIVE_DECIMALS: u8 = 18;

/// A single rendered balance line. `display_amount` is truncated to three
/// decimal places; `exact_amount` is the verbatim base-unit integer kept
/// around for copy-to-clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRow {
    pub symbol: String,
    pub display_amount: String,
    pub exact_amount: String,
    /// `None` for the native asset.
    pub contract: Option<Address>,
}

impl BalanceRow {
    fn build(symbol: String, balance: U256, decimals: u8, contract: Option<Address>) -> Result<Self> {
        Ok(Self {
            symbol,
            display_amount: format_balance(balance, decimals)?,
            exact_amount: balance.to_string(),
            contract,
        })
    }
}

#[async_trait]
pub trait BalancesPresenter: Send + Sync {
    async fn show_balances(&self) -> Result<()>;
}

pub struct BalancesPresenterImpl<V> {
    provider: Arc<TokenBalancesProvider>,
    chain: Arc<dyn ChainQuery>,
    settings: Arc<dyn SettingsInteractor>,
    selection: Arc<SelectionStore>,
    view: Arc<V>,
}

impl<V> BalancesPresenterImpl<V>
where
    V: BalancesView,
{
    pub fn new(
        provider: Arc<TokenBalancesProvider>,
        chain: Arc<dyn ChainQuery>,
        settings: Arc<dyn SettingsInteractor>,
        selection: Arc<SelectionStore>,
        view: Arc<V>,
    ) -> Self {
        Self {
            provider,
            chain,
            settings,
            selection,
            view,
        }
    }

    async fn native_row(&self, chain_id: u32, address: Address, symbol: &str) -> Option<BalanceRow> {
        match self.chain.native_balance(chain_id, address).await {
            Ok(balance) => BalanceRow::build(symbol.to_string(), balance, NATIVE_DECIMALS, None).ok(),
            Err(e) => {
                // not-yet-loaded, not an error surface
                debug!("native balance unavailable: {}", e);
                None
            }
        }
    }

    async fn erc20_row(&self, chain_id: u32, contract: Address, balance: U256) -> Option<BalanceRow> {
        let symbol = self.chain.erc20_symbol(chain_id, contract).await;
        let decimals = self.chain.erc20_decimals(chain_id, contract).await;

        // no partial rows: both metadata reads must have settled
        match (symbol, decimals) {
            (Ok(symbol), Ok(decimals)) => {
                BalanceRow::build(symbol, balance, decimals, Some(contract)).ok()
            }
            _ => {
                debug!("metadata for {:?} not available yet, skipping row", contract);
                None
            }
        }
    }
}

#[async_trait]
impl<V> BalancesPresenter for BalancesPresenterImpl<V>
where
    V: BalancesView + Send + Sync,
{
    async fn show_balances(&self) -> Result<()> {
        let selection = self.selection.current();
        let Some(address) = selection.address else {
            self.view.display_balances(vec![]).await?;
            return Ok(());
        };
        let chain_id = selection.chain_id();

        // a failed settings read falls back to showing everything
        let settings = self.settings.general_settings().await.unwrap_or_else(|e| {
            warn!("failed to load settings, using defaults: {}", e);
            Default::default()
        });

        let mut rows = vec![];
        if let Some(row) = self
            .native_row(chain_id, address, &selection.network.currency_symbol)
            .await
        {
            rows.push(row);
        }

        // filter before metadata lookups; zero-balance rows would be dropped
        // anyway and each lookup costs a chain round trip
        let balances = self.provider.balances();
        let visible = balances
            .into_iter()
            .filter(|b| !(settings.hide_empty_tokens && b.is_zero()));

        for token in visible {
            if let Some(row) = self.erc20_row(chain_id, token.contract, token.balance).await {
                rows.push(row);
            }
        }

        self.view.display_balances(rows).await
    }
}
