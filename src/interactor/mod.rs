pub mod balances_interactor;
pub mod settings_interactor;
pub mod wallets_interactor;

pub use balances_interactor::{BalancesInteractor, BalancesInteractorImpl};
pub use settings_interactor::{SettingsInteractor, SettingsInteractorImpl};
pub use wallets_interactor::{WalletsInteractor, WalletsInteractorImpl};
