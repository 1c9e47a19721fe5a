use std::sync::Arc;

use anyhow::Result;
use tokio::task::JoinHandle;

use crate::bridge::{BackendClient, BridgeCommands};
use crate::chain::ChainQuery;
use crate::entity::Network;
use crate::interactor::{
    BalancesInteractor, BalancesInteractorImpl, SettingsInteractor, SettingsInteractorImpl,
    WalletsInteractor, WalletsInteractorImpl,
};
use crate::palette::CommandPalette;
use crate::presenter::{BalancesPresenterImpl, QuickAddressSelect, QuickWalletSelect};
use crate::provider::{BalancePoller, TokenBalancesProvider};
use crate::state::{SelectionStore, TransactionsSignal};
use crate::view::BalancesView;

/// ServiceContainer wires the presentation layer together and hands out
/// shared handles to its parts.
pub struct ServiceContainer {
    bridge: Arc<BridgeCommands>,
    chain: Arc<dyn ChainQuery>,
    selection: Arc<SelectionStore>,
    transactions: Arc<TransactionsSignal>,
    palette: Arc<CommandPalette>,
    balances_interactor: Arc<dyn BalancesInteractor>,
    wallets_interactor: Arc<dyn WalletsInteractor>,
    settings_interactor: Arc<dyn SettingsInteractor>,
    balances_provider: Arc<TokenBalancesProvider>,
}

impl ServiceContainer {
    pub fn new(
        client: Arc<dyn BackendClient>,
        chain: Arc<dyn ChainQuery>,
        network: Network,
    ) -> Self {
        let bridge = Arc::new(BridgeCommands::new(client));
        let selection = Arc::new(SelectionStore::new(network));
        let transactions = Arc::new(TransactionsSignal::new());
        let palette = Arc::new(CommandPalette::new());

        let balances_interactor =
            Arc::new(BalancesInteractorImpl::new(bridge.clone())) as Arc<dyn BalancesInteractor>;
        let wallets_interactor =
            Arc::new(WalletsInteractorImpl::new(bridge.clone())) as Arc<dyn WalletsInteractor>;
        let settings_interactor =
            Arc::new(SettingsInteractorImpl::new(bridge.clone())) as Arc<dyn SettingsInteractor>;

        let balances_provider = Arc::new(TokenBalancesProvider::new(
            balances_interactor.clone(),
            selection.clone(),
        ));
        balances_provider.register_palette_action(&palette);

        Self {
            bridge,
            chain,
            selection,
            transactions,
            palette,
            balances_interactor,
            wallets_interactor,
            settings_interactor,
            balances_provider,
        }
    }

    /// Like `new`, but asks the backend for the current network first.
    pub async fn bootstrap(
        client: Arc<dyn BackendClient>,
        chain: Arc<dyn ChainQuery>,
    ) -> Result<Self> {
        let network = BridgeCommands::new(client.clone())
            .networks_get_current()
            .await?;
        Ok(Self::new(client, chain, network))
    }

    // Accessor methods

    pub fn bridge(&self) -> Arc<BridgeCommands> {
        self.bridge.clone()
    }

    pub fn chain(&self) -> Arc<dyn ChainQuery> {
        self.chain.clone()
    }

    pub fn selection(&self) -> Arc<SelectionStore> {
        self.selection.clone()
    }

    pub fn transactions(&self) -> Arc<TransactionsSignal> {
        self.transactions.clone()
    }

    pub fn palette(&self) -> Arc<CommandPalette> {
        self.palette.clone()
    }

    pub fn balances_interactor(&self) -> Arc<dyn BalancesInteractor> {
        self.balances_interactor.clone()
    }

    pub fn wallets_interactor(&self) -> Arc<dyn WalletsInteractor> {
        self.wallets_interactor.clone()
    }

    pub fn settings_interactor(&self) -> Arc<dyn SettingsInteractor> {
        self.settings_interactor.clone()
    }

    pub fn balances_provider(&self) -> Arc<TokenBalancesProvider> {
        self.balances_provider.clone()
    }

    // Component factories

    pub fn balance_poller(&self) -> BalancePoller {
        BalancePoller::new(self.balances_provider.clone(), self.selection.clone())
    }

    pub fn spawn_transactions_listener(&self) -> JoinHandle<()> {
        self.balances_provider
            .spawn_transactions_listener(&self.transactions)
    }

    pub fn balances_presenter<V>(&self, view: Arc<V>) -> BalancesPresenterImpl<V>
    where
        V: BalancesView,
    {
        BalancesPresenterImpl::new(
            self.balances_provider.clone(),
            self.chain.clone(),
            self.settings_interactor.clone(),
            self.selection.clone(),
            view,
        )
    }

    pub fn quick_wallet_select(&self) -> QuickWalletSelect {
        QuickWalletSelect::new(self.wallets_interactor.clone(), self.selection.clone())
    }

    pub fn quick_address_select(&self) -> QuickAddressSelect {
        QuickAddressSelect::new(self.wallets_interactor.clone(), self.selection.clone())
    }
}
