pub mod bridge;
pub mod chain;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod palette;
pub mod presenter;
pub mod provider;
pub mod state;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use bridge::{BackendClient, BridgeCommands};
pub use chain::ChainQuery;
pub use di::ServiceContainer;
pub use entity::{AppError, GeneralSettings, Network, TokenBalance, Wallet};
pub use palette::{Action, ActionHandler, CommandPalette};
pub use presenter::{
    AddressSelectState, BalanceRow, BalancesPresenter, BalancesPresenterImpl, QuickAddressSelect,
    QuickWalletSelect, WalletSelectState,
};
pub use provider::{BalancePoller, TokenBalancesProvider, REFRESH_ACTION_ID};
pub use state::{Selection, SelectionStore, TransactionsSignal};
pub use view::{BalancesView, BufferedBalancesView};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
