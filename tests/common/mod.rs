#![allow(dead_code)]

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use serde_json::json;
use solana_sdk::message::{Message, VersionedMessage};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::VersionedTransaction;
use solana_token_swapper::solana::tokens::TokenAccount;
use solana_token_swapper::{AccountData, ChainRpc, Result, Settings, SwapError};
use solana_transaction_status::{TransactionConfirmationStatus, TransactionStatus};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub const NATIVE_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

pub fn mint_account(decimals: u8) -> AccountData {
    AccountData::Parsed {
        program: "spl-token".to_string(),
        parsed: json!({
            "type": "mint",
            "info": {
                "decimals": decimals,
                "isInitialized": true,
                "supply": "1000000000000"
            }
        }),
    }
}

pub fn finalized_status() -> TransactionStatus {
    TransactionStatus {
        slot: 42,
        confirmations: None,
        status: Ok(()),
        err: None,
        confirmation_status: Some(TransactionConfirmationStatus::Finalized),
    }
}

pub fn confirmed_status() -> TransactionStatus {
    TransactionStatus {
        confirmation_status: Some(TransactionConfirmationStatus::Confirmed),
        ..finalized_status()
    }
}

/// In-memory `ChainRpc` that records which methods were hit.
#[derive(Default)]
pub struct MockRpc {
    pub accounts: HashMap<Pubkey, AccountData>,
    pub token_accounts: Vec<TokenAccount>,
    pub send_error: Option<String>,
    pub statuses: HashMap<Signature, TransactionStatus>,
    pub calls: Mutex<Vec<&'static str>>,
    pub sent: Mutex<Vec<VersionedTransaction>>,
    pub watched: Mutex<Vec<Signature>>,
    /// Set by the listener task `watch_confirmation` hands back.
    pub listener_finished: Arc<AtomicBool>,
}

impl MockRpc {
    pub fn with_mint(mut self, mint: &str, decimals: u8) -> Self {
        self.accounts
            .insert(mint.parse().unwrap(), mint_account(decimals));
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ChainRpc for MockRpc {
    async fn get_parsed_account(&self, address: &Pubkey) -> Result<Option<AccountData>> {
        self.record("get_parsed_account");
        Ok(self.accounts.get(address).cloned())
    }

    async fn get_token_accounts(
        &self,
        _owner: &Pubkey,
        mint: Option<&Pubkey>,
    ) -> Result<Vec<TokenAccount>> {
        self.record("get_token_accounts");
        Ok(self
            .token_accounts
            .iter()
            .filter(|account| mint.map_or(true, |mint| account.mint == mint.to_string()))
            .cloned()
            .collect())
    }

    async fn send_transaction(&self, transaction: &VersionedTransaction) -> Result<Signature> {
        self.record("send_transaction");
        if let Some(message) = &self.send_error {
            return Err(SwapError::Rpc(message.clone()));
        }
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures[0])
    }

    async fn get_signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<TransactionStatus>> {
        self.record("get_signature_status");
        Ok(self.statuses.get(signature).cloned())
    }

    fn watch_confirmation(&self, signature: Signature) -> Option<JoinHandle<()>> {
        self.watched.lock().unwrap().push(signature);
        let finished = self.listener_finished.clone();
        Some(tokio::spawn(async move {
            tokio::task::yield_now().await;
            finished.store(true, Ordering::SeqCst);
        }))
    }
}

/// Unsigned transaction paid for by `payer`, base64 encoded like the swap API returns it.
pub fn unsigned_swap_transaction(payer: &Keypair) -> String {
    let message = Message::new(&[], Some(&payer.pubkey()));
    let transaction = VersionedTransaction {
        signatures: vec![Signature::default()],
        message: VersionedMessage::Legacy(message),
    };
    BASE64_STANDARD.encode(bincode::serialize(&transaction).unwrap())
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub path_prefix: &'static str,
    /// Only answer requests whose body contains this text.
    pub body_contains: Option<String>,
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn new(path_prefix: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self {
            path_prefix,
            body_contains: None,
            status,
            body: body.into(),
        }
    }

    /// JSON-RPC success envelope for calls to `method`.
    pub fn rpc(method: &str, result: serde_json::Value) -> Self {
        Self {
            path_prefix: "/",
            body_contains: Some(format!("\"method\":\"{}\"", method)),
            status: 200,
            body: json!({ "jsonrpc": "2.0", "result": result, "id": 1 }).to_string(),
        }
    }
}

/// Minimal HTTP/1.1 server answering each request with the first matching canned response.
pub struct MockHttpServer {
    pub base_url: String,
    /// Root URL for pointing an `RpcClient` at the server.
    pub rpc_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpServer {
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let responses = responses.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, &responses, &recorded).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}/v6", addr),
            rpc_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.jupiter.quote_api_url = self.base_url.clone();
        settings
    }
}

async fn serve(
    mut stream: TcpStream,
    responses: &[CannedResponse],
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);

    while buffer.len() < header_end + content_length {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);
    }

    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let target = request_line.next().unwrap_or_default().to_string();
    let body = String::from_utf8_lossy(&buffer[header_end..]).to_string();

    recorded.lock().unwrap().push(RecordedRequest {
        method,
        target: target.clone(),
        body: body.clone(),
    });

    let path = target.strip_prefix("/v6").unwrap_or(&target);
    let (status, body) = responses
        .iter()
        .find(|response| {
            path.starts_with(response.path_prefix)
                && response
                    .body_contains
                    .as_ref()
                    .map_or(true, |needle| body.contains(needle.as_str()))
        })
        .map(|response| (response.status, response.body.clone()))
        .unwrap_or((404, "no canned response".to_string()));

    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Internal Server Error",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
