mod poller;
mod token_balances;

pub use poller::BalancePoller;
pub use token_balances::{TokenBalancesProvider, REFRESH_ACTION_ID};
