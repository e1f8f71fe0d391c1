// src/solana/jupiter/models.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Quote returned by the Jupiter quote API.
///
/// The route is handed back to the swap endpoint untouched, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(pub Value);

impl Route {
    fn amount_field(&self, field: &str) -> Option<u64> {
        self.0.get(field)?.as_str()?.parse().ok()
    }

    pub fn in_amount(&self) -> Option<u64> {
        self.amount_field("inAmount")
    }

    pub fn out_amount(&self) -> Option<u64> {
        self.amount_field("outAmount")
    }
}

// Parameters for a quote request
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteParams {
    pub input_mint: String,
    pub output_mint: String,
    /// Integer amount of the input mint in base units
    pub amount: u64,
    /// Slippage in percent
    pub slippage: f64,
}

impl QuoteParams {
    /// The API takes slippage in basis points.
    pub fn slippage_bps(&self) -> u16 {
        (self.slippage * 100.0).round() as u16
    }
}

/// Let the API pick the priority fee.
pub const AUTO_PRIORITIZATION_FEE: &str = "auto";

// Body of the swap transaction request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub quote_response: Route,
    pub user_public_key: String,
    pub wrap_and_unwrap_sol: bool,
    pub restrict_intermediate_tokens: bool,
    pub prioritization_fee_lamports: &'static str,
    pub auto_multiplier: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_unit_limit: Option<u32>,
}

// Swap transaction response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    /// Base64 encoded, unsigned versioned transaction
    pub swap_transaction: String,
}
