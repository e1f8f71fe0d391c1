use async_trait::async_trait;
use log::{debug, info, warn};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_transaction_status::TransactionConfirmationStatus;
use std::sync::Arc;

use crate::entity::{BuyOrder, Result, SellAmount, SellOrder, SwapError, SwapReceipt};
use crate::interactor::recovery::{expired_transaction_signature, ExpiryMatch, ExpiryPolicy};
use crate::solana::jupiter::{QuoteParams, QuoteService, SwapService};
use crate::solana::rpc::{AccountData, ChainRpc};
use crate::solana::tokens::{finalize_transaction, get_token_balance};
use crate::solana::utils::convert_to_integer;
use crate::solana::wallet::parse_pubkey;

#[async_trait]
pub trait TradeInteractor: Send + Sync {
    /// Swap SOL for `order.token_address`.
    async fn buy(&self, order: &BuyOrder, keypair: &Keypair) -> Result<SwapReceipt>;

    /// Swap `order.token_address` for SOL.
    async fn sell(&self, order: &SellOrder, keypair: &Keypair) -> Result<SwapReceipt>;
}

pub struct TradeInteractorImpl {
    quote_service: Arc<dyn QuoteService>,
    swap_service: Arc<dyn SwapService>,
    rpc: Arc<dyn ChainRpc>,
    native_mint: String,
    expiry_policy: ExpiryPolicy,
}

impl TradeInteractorImpl {
    pub fn new(
        quote_service: Arc<dyn QuoteService>,
        swap_service: Arc<dyn SwapService>,
        rpc: Arc<dyn ChainRpc>,
        native_mint: String,
    ) -> Self {
        Self {
            quote_service,
            swap_service,
            rpc,
            native_mint,
            expiry_policy: expired_transaction_signature,
        }
    }

    /// Replace the expired-transaction recovery, e.g. with `recovery::no_recovery`.
    pub fn with_expiry_policy(mut self, expiry_policy: ExpiryPolicy) -> Self {
        self.expiry_policy = expiry_policy;
        self
    }

    /// Read `decimals` from the parsed mint account.
    async fn mint_decimals(&self, mint: &Pubkey) -> Result<u8> {
        match self.rpc.get_parsed_account(mint).await? {
            Some(AccountData::Parsed { parsed, .. }) => parsed
                .pointer("/info/decimals")
                .and_then(|decimals| decimals.as_u64())
                .and_then(|decimals| u8::try_from(decimals).ok())
                .ok_or(SwapError::MintNotFound),
            _ => Err(SwapError::MintNotFound),
        }
    }

    async fn swap(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: u64,
        slippage: f64,
        compute_unit_limit: Option<u32>,
        keypair: &Keypair,
    ) -> Result<SwapReceipt> {
        let params = QuoteParams {
            input_mint: input_mint.to_string(),
            output_mint: output_mint.to_string(),
            amount,
            slippage,
        };
        let route = self.quote_service.get_quote(&params).await?;

        let wallet_public_key = keypair.pubkey().to_string();
        let swap_transaction = self
            .swap_service
            .get_swap_transaction(&route, &wallet_public_key, compute_unit_limit)
            .await?;

        let signature = finalize_transaction(self.rpc.as_ref(), &swap_transaction, keypair).await?;

        info!("Waiting for confirmation... 🕒");
        let confirmation = self.rpc.watch_confirmation(signature);

        Ok(SwapReceipt::new(signature.to_string(), confirmation))
    }

    async fn execute_buy(&self, order: &BuyOrder, keypair: &Keypair) -> Result<SwapReceipt> {
        let native_mint = parse_pubkey(&self.native_mint)?;
        let decimals = self.mint_decimals(&native_mint).await?;
        let amount = convert_to_integer(order.sol_amount, decimals);
        debug!("Spending {} base units of {}", amount, self.native_mint);

        self.swap(
            &self.native_mint,
            &order.token_address,
            amount,
            order.slippage,
            order.compute_unit_limit,
            keypair,
        )
        .await
    }

    async fn execute_sell(&self, order: &SellOrder, keypair: &Keypair) -> Result<SwapReceipt> {
        let amount = match order.amount {
            SellAmount::All => {
                let owner = keypair.pubkey().to_string();
                get_token_balance(self.rpc.as_ref(), &owner, &order.token_address).await?
            }
            SellAmount::Exact(amount) => amount,
        };

        // also rejects NaN
        if !(amount > 0.0) {
            return Err(SwapError::validation("No tokens to sell"));
        }

        info!("Selling {} of {}", amount, order.token_address);

        let mint = parse_pubkey(&order.token_address)?;
        let decimals = self.mint_decimals(&mint).await?;
        let amount = convert_to_integer(amount, decimals);

        self.swap(
            &order.token_address,
            &self.native_mint,
            amount,
            order.slippage,
            order.compute_unit_limit,
            keypair,
        )
        .await
    }

    /// Apply the expiry policy to a failed swap.
    async fn settle(&self, result: Result<SwapReceipt>) -> Result<SwapReceipt> {
        let err = match result {
            Ok(receipt) => return Ok(receipt),
            Err(err) => err,
        };

        match (self.expiry_policy)(&err.to_string()) {
            ExpiryMatch::Unrelated => Err(err),
            ExpiryMatch::Expired(Some(signature)) => {
                if self.is_finalized(&signature).await? {
                    warn!("Transaction {} reported expired but is finalized", signature);
                    Ok(SwapReceipt::new(signature.to_string(), None))
                } else {
                    Err(SwapError::TransactionExpired)
                }
            }
            ExpiryMatch::Expired(None) => Err(SwapError::TransactionExpired),
        }
    }

    async fn is_finalized(&self, signature: &Signature) -> Result<bool> {
        let status = self.rpc.get_signature_status(signature).await?;
        Ok(status.is_some_and(|status| {
            status.confirmation_status == Some(TransactionConfirmationStatus::Finalized)
                && status.err.is_none()
        }))
    }
}

#[async_trait]
impl TradeInteractor for TradeInteractorImpl {
    async fn buy(&self, order: &BuyOrder, keypair: &Keypair) -> Result<SwapReceipt> {
        let result = self.execute_buy(order, keypair).await;
        self.settle(result).await
    }

    async fn sell(&self, order: &SellOrder, keypair: &Keypair) -> Result<SwapReceipt> {
        let result = self.execute_sell(order, keypair).await;
        self.settle(result).await
    }
}
