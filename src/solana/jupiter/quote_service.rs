use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;

use crate::entity::{Result, SwapError};
use crate::solana::jupiter::config::Config;
use crate::solana::jupiter::models::{QuoteParams, Route};

/// Service for getting token swap quotes
#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn get_quote(&self, params: &QuoteParams) -> Result<Route>;
}

pub struct JupiterQuoteService {
    http_client: Client,
    config: Config,
}

impl JupiterQuoteService {
    pub fn new(http_client: Client, config: Config) -> Self {
        Self {
            http_client,
            config,
        }
    }
}

#[async_trait]
impl QuoteService for JupiterQuoteService {
    async fn get_quote(&self, params: &QuoteParams) -> Result<Route> {
        debug!("Requesting quote with parameters: {:?}", params);

        let response = self
            .http_client
            .get(self.config.quote_url())
            .query(&[
                ("inputMint", params.input_mint.clone()),
                ("outputMint", params.output_mint.clone()),
                ("amount", params.amount.to_string()),
                ("slippageBps", params.slippage_bps().to_string()),
            ])
            .send()
            .await
            .map_err(SwapError::QuoteRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Jupiter API error [get_quote]: {} {}", status, body);
            return Err(SwapError::QuoteApi { status, body });
        }

        let route: Route = response.json().await.map_err(|e| {
            error!("Unreadable quote response: {}", e);
            SwapError::QuoteRequest(e)
        })?;

        info!(
            "Quote received successfully: input_amount={:?}, output_amount={:?}",
            route.in_amount(),
            route.out_amount()
        );

        Ok(route)
    }
}
