use futures::StreamExt;
use log::{error, info, warn};
use solana_client::nonblocking::pubsub_client::PubsubClient;
use solana_client::rpc_config::RpcSignatureSubscribeConfig;
use solana_client::rpc_response::RpcSignatureResult;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::Signature;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{timeout_at, Instant};

use crate::entity::{Result, SwapError};

/// What the signature listener observed before it was torn down.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationOutcome {
    Confirmed,
    Failed(String),
    /// The subscription closed without a notification.
    Closed,
    TimedOut,
}

/// Run the listener on its own task so the caller does not wait for finality.
pub fn spawn_confirmation_listener(
    ws_url: String,
    signature: Signature,
    commitment: CommitmentConfig,
    wait: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = listen_for_confirmation(&ws_url, &signature, commitment, wait).await {
            error!("Confirmation listener for {} failed: {}", signature, e);
        }
    })
}

/// Subscribe to `signature`, wait for one notification and unsubscribe.
///
/// `wait` bounds the whole sequence: connecting, subscribing and waiting for
/// the notification. The subscription is removed and the websocket closed on
/// every path that got as far as connecting.
pub async fn listen_for_confirmation(
    ws_url: &str,
    signature: &Signature,
    commitment: CommitmentConfig,
    wait: Duration,
) -> Result<ConfirmationOutcome> {
    let deadline = Instant::now() + wait;

    let client = match timeout_at(deadline, PubsubClient::new(ws_url)).await {
        Ok(client) => client
            .map_err(|e| SwapError::Rpc(format!("Failed to connect to {}: {}", ws_url, e)))?,
        Err(_) => {
            let outcome = ConfirmationOutcome::TimedOut;
            log_outcome(signature, &outcome);
            return Ok(outcome);
        }
    };

    let config = RpcSignatureSubscribeConfig {
        commitment: Some(commitment),
        enable_received_notification: Some(false),
    };

    let outcome = match timeout_at(deadline, client.signature_subscribe(signature, Some(config)))
        .await
    {
        Ok(Ok((mut notifications, unsubscribe))) => {
            let outcome = match timeout_at(deadline, notifications.next()).await {
                Ok(Some(response)) => outcome_from_result(response.value),
                Ok(None) => ConfirmationOutcome::Closed,
                Err(_) => ConfirmationOutcome::TimedOut,
            };

            drop(notifications);
            unsubscribe().await;
            Ok(outcome)
        }
        Ok(Err(e)) => Err(SwapError::Rpc(format!(
            "Failed to subscribe to {}: {}",
            signature, e
        ))),
        Err(_) => Ok(ConfirmationOutcome::TimedOut),
    };

    if let Err(e) = client.shutdown().await {
        warn!("Failed to close websocket for {}: {}", signature, e);
    }

    let outcome = outcome?;
    log_outcome(signature, &outcome);
    Ok(outcome)
}

/// Map a signature notification onto the outcome the listener reports.
pub fn outcome_from_result(result: RpcSignatureResult) -> ConfirmationOutcome {
    match result {
        RpcSignatureResult::ProcessedSignature(result) => match result.err {
            Some(err) => ConfirmationOutcome::Failed(format!("{:?}", err)),
            None => ConfirmationOutcome::Confirmed,
        },
        RpcSignatureResult::ReceivedSignature(_) => ConfirmationOutcome::Closed,
    }
}

fn log_outcome(signature: &Signature, outcome: &ConfirmationOutcome) {
    match outcome {
        ConfirmationOutcome::Confirmed => info!("Transaction confirmed ✅ {}", signature),
        ConfirmationOutcome::Failed(err) => error!("Transaction failed: {} ({})", err, signature),
        ConfirmationOutcome::Closed => {
            warn!("Signature subscription for {} closed without a result", signature)
        }
        ConfirmationOutcome::TimedOut => {
            warn!("Gave up waiting for {} to finalize", signature)
        }
    }
}
