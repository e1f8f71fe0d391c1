use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::entity::{Result, SwapError, TokensObject};
use crate::solana::rpc::ChainRpc;
use crate::solana::tokens;

#[async_trait]
pub trait BalanceInteractor: Send + Sync {
    async fn get_tokens_balances(&self, wallet_public_key: &str) -> Result<TokensObject>;

    async fn get_token_balance(&self, wallet_public_key: &str, token_address: &str)
        -> Result<f64>;
}

pub struct BalanceInteractorImpl {
    rpc: Arc<dyn ChainRpc>,
}

impl BalanceInteractorImpl {
    pub fn new(rpc: Arc<dyn ChainRpc>) -> Self {
        Self { rpc }
    }
}

#[async_trait]
impl BalanceInteractor for BalanceInteractorImpl {
    async fn get_tokens_balances(&self, wallet_public_key: &str) -> Result<TokensObject> {
        if wallet_public_key.trim().is_empty() {
            return Err(SwapError::validation("No wallet public key specified"));
        }

        info!("Fetching tokens...");
        tokens::get_token_balances(self.rpc.as_ref(), wallet_public_key).await
    }

    async fn get_token_balance(
        &self,
        wallet_public_key: &str,
        token_address: &str,
    ) -> Result<f64> {
        if token_address.trim().is_empty() {
            return Err(SwapError::validation("No token address specified"));
        }
        if wallet_public_key.trim().is_empty() {
            return Err(SwapError::validation("No wallet public key specified"));
        }

        info!("Fetching token balance...");
        tokens::get_token_balance(self.rpc.as_ref(), wallet_public_key, token_address).await
    }
}
