pub mod api;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod settings;
pub mod solana;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used items
pub use api::*;
pub use di::ServiceContainer;
pub use entity::*;
pub use interactor::{
    BalanceInteractor, BalanceInteractorImpl, ExpiryMatch, ExpiryPolicy, TradeInteractor,
    TradeInteractorImpl,
};
pub use settings::{BuyConfig, SellConfig, Settings};
pub use solana::{convert_to_integer, AccountData, ChainRpc, SolanaRpc};
