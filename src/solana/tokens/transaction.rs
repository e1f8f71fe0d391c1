use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use log::info;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::transaction::VersionedTransaction;

use crate::entity::{Result, SwapError};
use crate::solana::rpc::ChainRpc;

/// Decode a base64 transaction built by the swap API and sign it with `keypair`.
pub fn sign_swap_transaction(
    swap_transaction: &str,
    keypair: &Keypair,
) -> Result<VersionedTransaction> {
    let raw = BASE64_STANDARD
        .decode(swap_transaction)
        .map_err(|e| SwapError::Finalize(format!("failed to decode transaction: {}", e)))?;

    let unsigned: VersionedTransaction = bincode::deserialize(&raw)
        .map_err(|e| SwapError::Finalize(format!("failed to deserialize transaction: {}", e)))?;

    VersionedTransaction::try_new(unsigned.message, &[keypair])
        .map_err(|e| SwapError::Finalize(format!("failed to sign transaction: {}", e)))
}

/// Sign the swap transaction and broadcast it, returning its signature.
pub async fn finalize_transaction(
    rpc: &dyn ChainRpc,
    swap_transaction: &str,
    keypair: &Keypair,
) -> Result<Signature> {
    let transaction = sign_swap_transaction(swap_transaction, keypair)?;

    let signature = rpc.send_transaction(&transaction).await?;
    info!("Transaction sent with txid: {}", signature);

    Ok(signature)
}
