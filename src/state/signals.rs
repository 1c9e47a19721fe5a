use tokio::sync::broadcast;

/// Fired elsewhere in the application whenever new transactions touching the
/// current address are observed. The balances provider listens and re-reads
/// its snapshot eagerly instead of waiting for the next poll.
pub struct TransactionsSignal {
    tx: broadcast::Sender<()>,
}

impl Default for TransactionsSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionsSignal {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    pub fn notify(&self) {
        // no receivers is fine; nobody is interested yet
        let _ = self.tx.send(());
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }
}
