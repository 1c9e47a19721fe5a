pub mod address_select_presenter;
pub mod balances_presenter;
pub mod wallet_select_presenter;

pub use address_select_presenter::{AddressSelectState, QuickAddressSelect};
pub use balances_presenter::{BalanceRow, BalancesPresenter, BalancesPresenterImpl};
pub use wallet_select_presenter::{QuickWalletSelect, WalletSelectState};
