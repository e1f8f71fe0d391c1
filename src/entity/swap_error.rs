use reqwest::StatusCode;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, SwapError>;

#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    #[error("{0}")]
    Validation(String),

    #[error("Error fetching quote: {status} {body}")]
    QuoteApi { status: StatusCode, body: String },

    #[error("Error getting swap transaction: {status} {body}")]
    SwapApi { status: StatusCode, body: String },

    #[error("Error fetching quote: {0}")]
    QuoteRequest(#[source] reqwest::Error),

    #[error("Error getting swap transaction: {0}")]
    SwapRequest(#[source] reqwest::Error),

    #[error("Could not find mint")]
    MintNotFound,

    #[error("Transaction expired")]
    TransactionExpired,

    #[error("Error finalizing transaction: {0}")]
    Finalize(String),

    // Kept unprefixed: the expiry recovery matches on the start of this message.
    #[error("{0}")]
    Rpc(String),

    #[error("Invalid wallet private key: {0}")]
    InvalidKeypair(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SwapError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<solana_client::client_error::ClientError> for SwapError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        Self::Rpc(err.to_string())
    }
}
