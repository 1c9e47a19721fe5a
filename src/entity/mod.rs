mod app_error;
mod network;
mod settings;
mod token_balance;
mod wallet;

pub use app_error::AppError;
pub use network::Network;
pub use settings::GeneralSettings;
pub use token_balance::TokenBalance;
pub use wallet::Wallet;
