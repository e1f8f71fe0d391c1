use serde::Deserialize;

use crate::solana::tokens::constants::NATIVE_MINT;

/// Jupiter endpoints and the fixed flags sent with every swap request
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL for the quote and swap endpoints
    pub quote_api_url: String,

    /// Mint paired against the traded token (wrapped SOL)
    pub native_mint: String,

    pub wrap_and_unwrap_sol: bool,

    pub restrict_intermediate_tokens: bool,

    /// Multiplier applied by Jupiter to its "auto" priority fee
    pub auto_multiplier: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quote_api_url: "https://quote-api.jup.ag/v6".to_string(),
            native_mint: NATIVE_MINT.to_string(),
            wrap_and_unwrap_sol: true,
            restrict_intermediate_tokens: false,
            auto_multiplier: 2,
        }
    }
}

impl Config {
    pub fn quote_url(&self) -> String {
        format!("{}/quote", self.quote_api_url.trim_end_matches('/'))
    }

    pub fn swap_url(&self) -> String {
        format!("{}/swap", self.quote_api_url.trim_end_matches('/'))
    }
}
