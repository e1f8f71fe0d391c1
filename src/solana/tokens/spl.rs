use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;

use crate::entity::{Result, TokenBalance, TokensObject};
use crate::solana::rpc::ChainRpc;
use crate::solana::utils::{convert_from_integer, get_symbol_from_mint};
use crate::solana::wallet::parse_pubkey;

/// One SPL token account as reported by a `jsonParsed` lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenAccount {
    pub mint: String,
    pub amount: f64,
    pub decimals: u8,
}

#[derive(Debug, Deserialize)]
struct ParsedTokenAccount {
    #[serde(rename = "type")]
    account_type: String,
    info: TokenAccountInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenAccountInfo {
    mint: String,
    token_amount: UiTokenAmount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UiTokenAmount {
    amount: String,
    decimals: u8,
    ui_amount: Option<f64>,
}

/// Read the `{"type": "account", "info": {...}}` payload of a token account.
pub fn parse_token_account(parsed: &Value) -> Option<TokenAccount> {
    let account: ParsedTokenAccount = serde_json::from_value(parsed.clone()).ok()?;
    if account.account_type != "account" {
        return None;
    }

    let token_amount = account.info.token_amount;
    // uiAmount is null for some legacy nodes; fall back to the raw integer amount
    let amount = match token_amount.ui_amount {
        Some(amount) => amount,
        None => convert_from_integer(token_amount.amount.parse().ok()?, token_amount.decimals),
    };

    Some(TokenAccount {
        mint: account.info.mint,
        amount,
        decimals: token_amount.decimals,
    })
}

/// Get all SPL token balances of a wallet, keyed by mint.
pub async fn get_token_balances(rpc: &dyn ChainRpc, owner: &str) -> Result<TokensObject> {
    let owner = parse_pubkey(owner)?;
    let accounts = rpc.get_token_accounts(&owner, None).await?;

    let mut balances = TokensObject::new();
    for account in accounts {
        balances
            .entry(account.mint.clone())
            .and_modify(|balance: &mut TokenBalance| balance.amount += account.amount)
            .or_insert_with(|| TokenBalance {
                symbol: get_symbol_from_mint(&account.mint),
                amount: account.amount,
                decimals: account.decimals,
                mint_address: account.mint.clone(),
            });
    }

    info!("Found {} tokens in {}", balances.len(), owner);
    Ok(balances)
}

/// Get balance of a specific SPL token; 0 when the wallet holds no account for it.
pub async fn get_token_balance(rpc: &dyn ChainRpc, owner: &str, mint: &str) -> Result<f64> {
    let owner = parse_pubkey(owner)?;
    let mint = parse_pubkey(mint)?;

    let accounts = rpc.get_token_accounts(&owner, Some(&mint)).await?;
    let balance: f64 = accounts
        .iter()
        .filter(|account| account.mint == mint.to_string())
        .map(|account| account.amount)
        .sum();

    debug!("Balance of {} in {}: {}", mint, owner, balance);
    Ok(balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_token_account_payload() {
        let parsed = json!({
            "type": "account",
            "info": {
                "isNative": false,
                "mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
                "owner": "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM",
                "state": "initialized",
                "tokenAmount": {
                    "amount": "2500000",
                    "decimals": 6,
                    "uiAmount": 2.5,
                    "uiAmountString": "2.5"
                }
            }
        });

        let account = parse_token_account(&parsed).unwrap();
        assert_eq!(account.mint, "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
        assert_eq!(account.amount, 2.5);
        assert_eq!(account.decimals, 6);
    }

    #[test]
    fn null_ui_amount_uses_raw_amount() {
        let parsed = json!({
            "type": "account",
            "info": {
                "mint": "mint",
                "tokenAmount": { "amount": "1234", "decimals": 2, "uiAmount": null }
            }
        });
        assert_eq!(parse_token_account(&parsed).unwrap().amount, 12.34);
    }

    #[test]
    fn mint_payload_is_not_a_token_account() {
        let parsed = json!({ "type": "mint", "info": { "decimals": 6 } });
        assert!(parse_token_account(&parsed).is_none());
    }
}
