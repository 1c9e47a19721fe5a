#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Backend command failed: {0}")]
    Backend(String),

    #[error("Chain query failed: {0}")]
    Chain(String),

    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid balance value: {0}")]
    InvalidBalance(String),

    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Address not found: {0}")]
    AddressNotFound(String),

    #[error("No wallet selected")]
    NoWalletSelected,
}
