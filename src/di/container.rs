use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::entity::Result;
use crate::interactor::{
    BalanceInteractor, BalanceInteractorImpl, TradeInteractor, TradeInteractorImpl,
};
use crate::settings::Settings;
use crate::solana::client::create_solana_client;
use crate::solana::jupiter::{JupiterQuoteService, JupiterSwapService, QuoteService, SwapService};
use crate::solana::rpc::{ChainRpc, SolanaRpc};

/// ServiceContainer wires the Jupiter services and the RPC into the interactors
pub struct ServiceContainer {
    rpc: Arc<dyn ChainRpc>,
    quote_service: Arc<dyn QuoteService>,
    swap_service: Arc<dyn SwapService>,
    settings: Settings,
}

impl ServiceContainer {
    /// Connect to `rpc_endpoint` and build the services from `settings`.
    ///
    /// The websocket endpoint is only resolved once a trade needs a confirmation listener.
    pub fn new(settings: &Settings, rpc_endpoint: &str) -> Result<Self> {
        let client = create_solana_client(rpc_endpoint)?;

        let rpc = Arc::new(SolanaRpc::new(
            client,
            settings.ws_endpoint.clone(),
            Duration::from_secs(settings.confirmation_timeout_secs),
        )) as Arc<dyn ChainRpc>;

        Ok(Self::with_rpc(settings, rpc))
    }

    /// Build the Jupiter services around an existing RPC implementation.
    pub fn with_rpc(settings: &Settings, rpc: Arc<dyn ChainRpc>) -> Self {
        let http_client = Client::new();

        let quote_service = Arc::new(JupiterQuoteService::new(
            http_client.clone(),
            settings.jupiter.clone(),
        )) as Arc<dyn QuoteService>;

        let swap_service = Arc::new(JupiterSwapService::new(
            http_client,
            settings.jupiter.clone(),
        )) as Arc<dyn SwapService>;

        Self {
            rpc,
            quote_service,
            swap_service,
            settings: settings.clone(),
        }
    }

    pub fn rpc(&self) -> Arc<dyn ChainRpc> {
        self.rpc.clone()
    }

    pub fn trade_interactor(&self) -> Arc<dyn TradeInteractor> {
        Arc::new(TradeInteractorImpl::new(
            self.quote_service.clone(),
            self.swap_service.clone(),
            self.rpc.clone(),
            self.settings.jupiter.native_mint.clone(),
        ))
    }

    pub fn balance_interactor(&self) -> Arc<dyn BalanceInteractor> {
        Arc::new(BalanceInteractorImpl::new(self.rpc.clone()))
    }
}
