use async_trait::async_trait;
use log::{debug, error};
use serde_json::{json, Value};
use solana_account_decoder::{UiAccount, UiAccountData, UiAccountEncoding};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcSendTransactionConfig};
use solana_client::rpc_request::{RpcRequest, TokenAccountsFilter};
use solana_client::rpc_response::Response as RpcResponse;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;
use solana_transaction_status::{TransactionStatus, UiTransactionEncoding};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::entity::Result;
use crate::solana::client::websocket_url;
use crate::solana::confirmation::spawn_confirmation_listener;
use crate::solana::tokens::spl::{parse_token_account, TokenAccount};

/// Account data as returned by a `jsonParsed` account lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountData {
    /// The node understood the owning program and returned JSON.
    Parsed { program: String, parsed: Value },
    /// The node fell back to an encoded byte blob.
    Raw,
}

impl From<UiAccountData> for AccountData {
    fn from(data: UiAccountData) -> Self {
        match data {
            UiAccountData::Json(account) => AccountData::Parsed {
                program: account.program,
                parsed: account.parsed,
            },
            _ => AccountData::Raw,
        }
    }
}

/// The RPC operations a swap needs.
#[async_trait]
pub trait ChainRpc: Send + Sync {
    /// `getAccountInfo` with `jsonParsed` encoding; `None` when the account does not exist.
    async fn get_parsed_account(&self, address: &Pubkey) -> Result<Option<AccountData>>;

    /// SPL token accounts owned by `owner`, optionally restricted to one mint.
    async fn get_token_accounts(
        &self,
        owner: &Pubkey,
        mint: Option<&Pubkey>,
    ) -> Result<Vec<TokenAccount>>;

    /// Broadcast a signed transaction without waiting for confirmation.
    async fn send_transaction(&self, transaction: &VersionedTransaction) -> Result<Signature>;

    async fn get_signature_status(&self, signature: &Signature)
        -> Result<Option<TransactionStatus>>;

    /// Log the finalized outcome of `signature` in the background.
    ///
    /// Returns the listener task, or `None` when no listener could be started.
    fn watch_confirmation(&self, signature: Signature) -> Option<JoinHandle<()>>;
}

/// `ChainRpc` backed by a Solana JSON-RPC node.
pub struct SolanaRpc {
    client: Arc<RpcClient>,
    ws_endpoint: Option<String>,
    confirmation_timeout: Duration,
}

impl SolanaRpc {
    /// `ws_endpoint` overrides the websocket URL otherwise derived from the client's URL.
    pub fn new(
        client: Arc<RpcClient>,
        ws_endpoint: Option<String>,
        confirmation_timeout: Duration,
    ) -> Self {
        Self {
            client,
            ws_endpoint,
            confirmation_timeout,
        }
    }

    /// Websocket URL for signature subscriptions, resolved only when a listener starts.
    pub fn ws_url(&self) -> Result<String> {
        match &self.ws_endpoint {
            Some(endpoint) => Ok(endpoint.clone()),
            None => websocket_url(&self.client.url()),
        }
    }
}

#[async_trait]
impl ChainRpc for SolanaRpc {
    async fn get_parsed_account(&self, address: &Pubkey) -> Result<Option<AccountData>> {
        let config = RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::JsonParsed),
            commitment: Some(self.client.commitment()),
            ..RpcAccountInfoConfig::default()
        };

        // RpcClient::get_account_with_config decodes into raw bytes, which drops parsed data.
        let response: RpcResponse<Option<UiAccount>> = self
            .client
            .send(RpcRequest::GetAccountInfo, json!([address.to_string(), config]))
            .await?;

        Ok(response.value.map(|account| AccountData::from(account.data)))
    }

    async fn get_token_accounts(
        &self,
        owner: &Pubkey,
        mint: Option<&Pubkey>,
    ) -> Result<Vec<TokenAccount>> {
        let filter = match mint {
            Some(mint) => TokenAccountsFilter::Mint(*mint),
            None => TokenAccountsFilter::ProgramId(spl_token::ID),
        };

        let keyed_accounts = self.client.get_token_accounts_by_owner(owner, filter).await?;
        debug!("Found {} token accounts for {}", keyed_accounts.len(), owner);

        Ok(keyed_accounts
            .into_iter()
            .filter_map(|keyed| match keyed.account.data {
                UiAccountData::Json(account) => parse_token_account(&account.parsed),
                _ => None,
            })
            .collect())
    }

    async fn send_transaction(&self, transaction: &VersionedTransaction) -> Result<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight: false,
            preflight_commitment: Some(CommitmentLevel::Confirmed),
            encoding: Some(UiTransactionEncoding::Base64),
            ..RpcSendTransactionConfig::default()
        };

        Ok(self
            .client
            .send_transaction_with_config(transaction, config)
            .await?)
    }

    async fn get_signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<TransactionStatus>> {
        let response = self.client.get_signature_statuses(&[*signature]).await?;
        Ok(response.value.into_iter().next().flatten())
    }

    fn watch_confirmation(&self, signature: Signature) -> Option<JoinHandle<()>> {
        let ws_url = match self.ws_url() {
            Ok(url) => url,
            Err(e) => {
                error!("Cannot watch {}: {}", signature, e);
                return None;
            }
        };

        Some(spawn_confirmation_listener(
            ws_url,
            signature,
            CommitmentConfig::finalized(),
            self.confirmation_timeout,
        ))
    }
}
