//! Entry points taking plain configuration values.
//!
//! The plain functions use [`Settings::default`]; the `_with` variants take
//! explicit settings, which is how endpoints get pointed elsewhere.
use log::info;

use crate::di::ServiceContainer;
use crate::entity::{Result, SellAmount, SwapError, SwapReceipt, TokensObject};
use crate::settings::{BuyConfig, SellConfig, Settings};
use crate::solana::wallet::keypair_from_base58;

/// Buy a token with SOL; returns the transaction signature.
///
/// The confirmation listener keeps running on the current runtime; use
/// [`buy_token_with`] to get a receipt that can wait for it.
pub async fn buy_token(config: BuyConfig) -> Result<String> {
    Ok(buy_token_with(&Settings::default(), config).await?.signature)
}

pub async fn buy_token_with(settings: &Settings, config: BuyConfig) -> Result<SwapReceipt> {
    let order = config.order(settings)?;

    let container = ServiceContainer::new(settings, &config.rpc_endpoint)?;
    info!("Connection established 🚀");

    let keypair = keypair_from_base58(&config.wallet_private_key)?;
    info!("Wallet fetched ✅");

    info!("Trying to buy token using {} SOL...", order.sol_amount);
    container.trade_interactor().buy(&order, &keypair).await
}

/// Sell a token in the wallet for SOL; returns the transaction signature.
pub async fn sell_token(config: SellConfig) -> Result<String> {
    Ok(sell_token_with(&Settings::default(), config).await?.signature)
}

pub async fn sell_token_with(settings: &Settings, config: SellConfig) -> Result<SwapReceipt> {
    let order = config.order(settings)?;

    let container = ServiceContainer::new(settings, &config.rpc_endpoint)?;
    info!("Connection established 🚀");

    let keypair = keypair_from_base58(&config.wallet_private_key)?;
    info!("Wallet fetched ✅");

    match order.amount {
        SellAmount::All => info!("Selling all of {}...", order.token_address),
        SellAmount::Exact(amount) => info!("Selling {} of {}...", amount, order.token_address),
    }
    container.trade_interactor().sell(&order, &keypair).await
}

/// All SPL token balances of a wallet, keyed by mint.
pub async fn get_tokens_balances(rpc_endpoint: &str, wallet_public_key: &str) -> Result<TokensObject> {
    get_tokens_balances_with(&Settings::default(), rpc_endpoint, wallet_public_key).await
}

pub async fn get_tokens_balances_with(
    settings: &Settings,
    rpc_endpoint: &str,
    wallet_public_key: &str,
) -> Result<TokensObject> {
    if wallet_public_key.trim().is_empty() {
        return Err(SwapError::validation("No wallet public key specified"));
    }
    if rpc_endpoint.trim().is_empty() {
        return Err(SwapError::validation("No RPC endpoint specified"));
    }

    let container = ServiceContainer::new(settings, rpc_endpoint)?;
    info!("Connection established 🚀");

    container
        .balance_interactor()
        .get_tokens_balances(wallet_public_key)
        .await
}

/// Balance of one token in a wallet, in whole tokens.
pub async fn get_token_balance(
    rpc_endpoint: &str,
    wallet_public_key: &str,
    token_address: &str,
) -> Result<f64> {
    get_token_balance_with(&Settings::default(), rpc_endpoint, wallet_public_key, token_address)
        .await
}

pub async fn get_token_balance_with(
    settings: &Settings,
    rpc_endpoint: &str,
    wallet_public_key: &str,
    token_address: &str,
) -> Result<f64> {
    if token_address.trim().is_empty() {
        return Err(SwapError::validation("No token address specified"));
    }
    if wallet_public_key.trim().is_empty() {
        return Err(SwapError::validation("No wallet public key specified"));
    }
    if rpc_endpoint.trim().is_empty() {
        return Err(SwapError::validation("No RPC endpoint specified"));
    }

    let container = ServiceContainer::new(settings, rpc_endpoint)?;
    info!("Connection established 🚀");

    container
        .balance_interactor()
        .get_token_balance(wallet_public_key, token_address)
        .await
}
