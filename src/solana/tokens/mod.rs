pub mod constants;
pub mod spl;
pub mod transaction;

pub use constants::{NATIVE_MINT, RAY_MINT, USDC_MINT, USDT_MINT};
pub use spl::{get_token_balance, get_token_balances, TokenAccount};
pub use transaction::{finalize_transaction, sign_swap_transaction};
