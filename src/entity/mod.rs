mod order;
mod swap_error;
mod swap_receipt;
mod token_balance;

pub use order::{BuyOrder, SellAmount, SellOrder};
pub use swap_error::{Result, SwapError};
pub use swap_receipt::SwapReceipt;
pub use token_balance::{TokenBalance, TokensObject};
