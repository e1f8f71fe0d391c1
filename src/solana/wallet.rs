use solana_sdk::{pubkey::Pubkey, signature::Keypair};
use std::str::FromStr;

use crate::entity::{Result, SwapError};

/// Serialize Keypair (64 bytes) to base58.
pub fn keypair_to_base58(keypair: &Keypair) -> String {
    bs58::encode(keypair.to_bytes()).into_string()
}

/// Restore Keypair from base58 string (64 bytes).
pub fn keypair_from_base58(keypair_base58: &str) -> Result<Keypair> {
    if keypair_base58.trim().is_empty() {
        return Err(SwapError::validation("No wallet private key specified"));
    }

    let keypair_bytes = bs58::decode(keypair_base58.trim())
        .into_vec()
        .map_err(|e| SwapError::InvalidKeypair(format!("failed to decode base58: {}", e)))?;

    if keypair_bytes.len() != 64 {
        return Err(SwapError::InvalidKeypair(format!(
            "invalid keypair length: {}",
            keypair_bytes.len()
        )));
    }

    Keypair::from_bytes(&keypair_bytes).map_err(|e| SwapError::InvalidKeypair(e.to_string()))
}

/// Convert base58 string to Solana `Pubkey`.
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address.trim())
        .map_err(|e| SwapError::InvalidAddress(format!("{} ({})", address, e)))
}
