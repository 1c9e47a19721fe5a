pub mod balances_view;

pub use balances_view::{BalancesView, BufferedBalancesView};
