use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub symbol: String,
    pub amount: f64,
    pub decimals: u8,
    pub mint_address: String,
}

/// Wallet holdings keyed by mint address.
pub type TokensObject = BTreeMap<String, TokenBalance>;
