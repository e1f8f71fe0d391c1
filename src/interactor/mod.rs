pub mod balance_interactor;
pub mod recovery;
pub mod trade_interactor;

pub use balance_interactor::{BalanceInteractor, BalanceInteractorImpl};
pub use recovery::{expired_transaction_signature, no_recovery, ExpiryMatch, ExpiryPolicy};
pub use trade_interactor::{TradeInteractor, TradeInteractorImpl};
