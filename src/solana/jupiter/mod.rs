// src/solana/jupiter/mod.rs
pub mod config;
pub mod models;
pub mod quote_service;
pub mod swap_service;

pub use config::Config;
pub use models::{QuoteParams, Route, SwapRequest, SwapResponse, AUTO_PRIORITIZATION_FEE};
pub use quote_service::{JupiterQuoteService, QuoteService};
pub use swap_service::{JupiterSwapService, SwapService};
