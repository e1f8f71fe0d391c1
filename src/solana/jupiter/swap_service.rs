use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;

use crate::entity::{Result, SwapError};
use crate::solana::jupiter::config::Config;
use crate::solana::jupiter::models::{Route, SwapRequest, SwapResponse, AUTO_PRIORITIZATION_FEE};

/// Service that turns a quote into a ready-to-sign transaction
#[async_trait]
pub trait SwapService: Send + Sync {
    /// Returns the base64 encoded transaction for `route`.
    async fn get_swap_transaction(
        &self,
        route: &Route,
        user_public_key: &str,
        compute_unit_limit: Option<u32>,
    ) -> Result<String>;
}

pub struct JupiterSwapService {
    http_client: Client,
    config: Config,
}

impl JupiterSwapService {
    pub fn new(http_client: Client, config: Config) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn build_request(
        &self,
        route: &Route,
        user_public_key: &str,
        compute_unit_limit: Option<u32>,
    ) -> SwapRequest {
        SwapRequest {
            quote_response: route.clone(),
            user_public_key: user_public_key.to_string(),
            wrap_and_unwrap_sol: self.config.wrap_and_unwrap_sol,
            restrict_intermediate_tokens: self.config.restrict_intermediate_tokens,
            prioritization_fee_lamports: AUTO_PRIORITIZATION_FEE,
            auto_multiplier: self.config.auto_multiplier,
            // zero means "not set"
            compute_unit_limit: compute_unit_limit.filter(|limit| *limit > 0),
        }
    }
}

#[async_trait]
impl SwapService for JupiterSwapService {
    async fn get_swap_transaction(
        &self,
        route: &Route,
        user_public_key: &str,
        compute_unit_limit: Option<u32>,
    ) -> Result<String> {
        let request = self.build_request(route, user_public_key, compute_unit_limit);

        debug!(
            "Requesting swap transaction with user_public_key: {}",
            user_public_key
        );

        let response = self
            .http_client
            .post(self.config.swap_url())
            .json(&request)
            .send()
            .await
            .map_err(SwapError::SwapRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Jupiter API error [get_swap_transaction]: {} {}", status, body);
            return Err(SwapError::SwapApi { status, body });
        }

        let swap_response: SwapResponse = response.json().await.map_err(|e| {
            error!("Unreadable swap response: {}", e);
            SwapError::SwapRequest(e)
        })?;

        info!(
            "Swap transaction received: tx_length={}",
            swap_response.swap_transaction.len()
        );

        Ok(swap_response.swap_transaction)
    }
}
