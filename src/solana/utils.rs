use crate::solana::tokens::constants::{NATIVE_MINT, RAY_MINT, USDC_MINT, USDT_MINT};

/// Scale a human amount to integer base units: `floor(amount * 10^decimals)`.
pub fn convert_to_integer(amount: f64, decimals: u8) -> u64 {
    (amount * 10_f64.powi(decimals as i32)).floor() as u64
}

/// Convert integer base units back to a human amount.
pub fn convert_from_integer(amount: u64, decimals: u8) -> f64 {
    amount as f64 / 10_f64.powi(decimals as i32)
}

/// Get token symbol from mint address
pub fn get_symbol_from_mint(mint: &str) -> String {
    match mint {
        NATIVE_MINT => "SOL".to_string(),
        USDC_MINT => "USDC".to_string(),
        USDT_MINT => "USDT".to_string(),
        RAY_MINT => "RAY".to_string(),
        _ => "Unknown".to_string(),
    }
}
