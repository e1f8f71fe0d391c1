use lazy_static::lazy_static;
use regex::Regex;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use std::sync::Arc;

use crate::entity::{Result, SwapError};

lazy_static! {
    static ref ENDPOINT_RE: Regex =
        Regex::new(r"(?i)^[^:]+://([^:\[]+|\[[^\]]+\])(:\d+)?(.*)$").unwrap();
}

/// Create a Solana client with confirmed commitment
pub fn create_solana_client(rpc_url: &str) -> Result<Arc<RpcClient>> {
    if rpc_url.trim().is_empty() {
        return Err(SwapError::validation("No RPC endpoint specified"));
    }

    let client = RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed());

    Ok(Arc::new(client))
}

/// Derive the pubsub endpoint for an RPC url.
///
/// `http` becomes `ws` and `https` becomes `wss`. An explicit port is bumped by
/// one, which is where a local validator serves its websocket.
pub fn websocket_url(rpc_url: &str) -> Result<String> {
    let captures = ENDPOINT_RE
        .captures(rpc_url)
        .ok_or_else(|| SwapError::InvalidAddress(format!("Failed to validate endpoint URL `{}`", rpc_url)))?;

    let host = captures.get(1).map_or("", |m| m.as_str());
    let rest = captures.get(3).map_or("", |m| m.as_str());
    let protocol = if rpc_url.to_ascii_lowercase().starts_with("https:") {
        "wss:"
    } else {
        "ws:"
    };

    let port = match captures.get(2) {
        Some(port) => {
            let port: u32 = port.as_str()[1..]
                .parse()
                .map_err(|_| SwapError::InvalidAddress(format!("Invalid port in `{}`", rpc_url)))?;
            format!(":{}", port + 1)
        }
        None => String::new(),
    };

    Ok(format!("{}//{}{}{}", protocol, host, port, rest))
}
