mod selection;
mod signals;

pub use selection::{Selection, SelectionStore};
pub use signals::TransactionsSignal;
