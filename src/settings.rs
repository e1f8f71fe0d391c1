use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;

use crate::entity::{BuyOrder, Result, SellAmount, SellOrder, SwapError};
use crate::solana::jupiter::Config as JupiterConfig;

/// Library-wide settings; every field has a working default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub jupiter: JupiterConfig,

    /// Slippage in percent used when a call does not set one
    pub default_slippage: f64,

    /// Websocket endpoint for confirmations; derived from the RPC url when unset
    pub ws_endpoint: Option<String>,

    /// How long the confirmation listener waits for finality
    pub confirmation_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            jupiter: JupiterConfig::default(),
            default_slippage: 1.0,
            ws_endpoint: None,
            confirmation_timeout_secs: 60,
        }
    }
}

impl Settings {
    /// Defaults overlaid with `SWAPPER_*` environment variables.
    ///
    /// Nested keys use a double underscore, e.g. `SWAPPER_JUPITER__QUOTE_API_URL`.
    pub fn from_env() -> Result<Self> {
        let settings = ConfigBuilder::builder()
            .add_source(
                Environment::with_prefix("SWAPPER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

fn require(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SwapError::validation(message));
    }
    Ok(())
}

/// Resolve a call's slippage percent against the default and keep it in range.
fn resolve_slippage(value: Option<f64>, settings: &Settings) -> Result<f64> {
    let slippage = value.unwrap_or(settings.default_slippage);
    if !(0.0..=100.0).contains(&slippage) {
        return Err(SwapError::validation(
            "slippage must be between 0 and 100 percent",
        ));
    }
    Ok(slippage)
}

/// Parameters of a `buy_token` call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BuyConfig {
    pub rpc_endpoint: String,
    /// Base58 encoded 64-byte keypair
    pub wallet_private_key: String,
    pub address_of_token_to_buy: String,
    pub amount_of_solana_to_spend: f64,
    /// Percent; `Settings::default_slippage` when absent
    #[serde(default)]
    pub slippage: Option<f64>,
    #[serde(default)]
    pub compute_unit_limit: Option<u32>,
}

impl BuyConfig {
    pub fn order(&self, settings: &Settings) -> Result<BuyOrder> {
        require(&self.rpc_endpoint, "No RPC endpoint specified")?;
        require(&self.wallet_private_key, "No wallet private key specified")?;
        require(&self.address_of_token_to_buy, "No token address specified")?;
        if !(self.amount_of_solana_to_spend > 0.0) {
            return Err(SwapError::validation(
                "amount_of_solana_to_spend must be greater than zero",
            ));
        }

        Ok(BuyOrder {
            token_address: self.address_of_token_to_buy.trim().to_string(),
            sol_amount: self.amount_of_solana_to_spend,
            slippage: resolve_slippage(self.slippage, settings)?,
            compute_unit_limit: self.compute_unit_limit,
        })
    }
}

/// Parameters of a `sell_token` call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SellConfig {
    #[serde(default)]
    pub sell_all: bool,
    pub rpc_endpoint: String,
    /// Base58 encoded 64-byte keypair
    pub wallet_private_key: String,
    pub address_of_token_to_sell: String,
    /// Ignored when `sell_all` is set
    #[serde(default)]
    pub amount_of_token_to_sell: Option<f64>,
    /// Percent; `Settings::default_slippage` when absent
    #[serde(default)]
    pub slippage: Option<f64>,
    #[serde(default)]
    pub compute_unit_limit: Option<u32>,
}

impl SellConfig {
    pub fn order(&self, settings: &Settings) -> Result<SellOrder> {
        let amount = match (self.sell_all, self.amount_of_token_to_sell) {
            (true, _) => SellAmount::All,
            (false, Some(amount)) if amount != 0.0 => SellAmount::Exact(amount),
            (false, _) => {
                return Err(SwapError::validation(
                    "You need to specify amount_of_token_to_sell if sell_all is false",
                ))
            }
        };

        require(&self.rpc_endpoint, "No RPC endpoint specified")?;
        require(&self.wallet_private_key, "No wallet private key specified")?;
        require(&self.address_of_token_to_sell, "No token address specified")?;

        Ok(SellOrder {
            token_address: self.address_of_token_to_sell.trim().to_string(),
            amount,
            slippage: resolve_slippage(self.slippage, settings)?,
            compute_unit_limit: self.compute_unit_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sell_config() -> SellConfig {
        SellConfig {
            sell_all: false,
            rpc_endpoint: "http://127.0.0.1:8899".to_string(),
            wallet_private_key: "key".to_string(),
            address_of_token_to_sell: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
            amount_of_token_to_sell: None,
            slippage: None,
            compute_unit_limit: None,
        }
    }

    #[test]
    fn default_settings_match_public_endpoints() {
        let settings = Settings::default();
        assert_eq!(settings.jupiter.quote_api_url, "https://quote-api.jup.ag/v6");
        assert_eq!(settings.default_slippage, 1.0);
        assert_eq!(settings.confirmation_timeout_secs, 60);
    }

    #[test]
    fn sell_without_amount_needs_sell_all() {
        let err = sell_config().order(&Settings::default()).unwrap_err();
        assert!(matches!(err, SwapError::Validation(_)));

        let zero = SellConfig {
            amount_of_token_to_sell: Some(0.0),
            ..sell_config()
        };
        assert!(zero.order(&Settings::default()).is_err());
    }

    #[test]
    fn sell_all_ignores_amount() {
        let config = SellConfig {
            sell_all: true,
            amount_of_token_to_sell: Some(3.0),
            ..sell_config()
        };
        let order = config.order(&Settings::default()).unwrap();
        assert_eq!(order.amount, SellAmount::All);
        assert_eq!(order.slippage, 1.0);
    }

    #[test]
    fn buy_slippage_falls_back_to_settings() {
        let config = BuyConfig {
            rpc_endpoint: "http://127.0.0.1:8899".to_string(),
            wallet_private_key: "key".to_string(),
            address_of_token_to_buy: "token".to_string(),
            amount_of_solana_to_spend: 0.25,
            slippage: None,
            compute_unit_limit: Some(200_000),
        };
        let settings = Settings {
            default_slippage: 2.5,
            ..Settings::default()
        };

        let order = config.order(&settings).unwrap();
        assert_eq!(
            order,
            BuyOrder {
                token_address: "token".to_string(),
                sol_amount: 0.25,
                slippage: 2.5,
                compute_unit_limit: Some(200_000),
            }
        );

        let broke = BuyConfig {
            amount_of_solana_to_spend: 0.0,
            ..config
        };
        assert!(broke.order(&settings).is_err());
    }

    #[test]
    fn out_of_range_slippage_is_rejected() {
        for bad in [-0.5, 100.5, f64::NAN, f64::INFINITY] {
            let config = SellConfig {
                sell_all: true,
                slippage: Some(bad),
                ..sell_config()
            };
            let err = config.order(&Settings::default()).unwrap_err();
            assert!(matches!(err, SwapError::Validation(_)), "{}", bad);
            assert_eq!(err.to_string(), "slippage must be between 0 and 100 percent");
        }

        let settings = Settings {
            default_slippage: -1.0,
            ..Settings::default()
        };
        let config = SellConfig {
            sell_all: true,
            ..sell_config()
        };
        assert!(config.order(&settings).is_err());

        let edge = SellConfig {
            sell_all: true,
            slippage: Some(0.0),
            ..sell_config()
        };
        assert_eq!(edge.order(&Settings::default()).unwrap().slippage, 0.0);
    }

    #[test]
    fn buy_rejects_negative_slippage() {
        let config = BuyConfig {
            rpc_endpoint: "http://127.0.0.1:8899".to_string(),
            wallet_private_key: "key".to_string(),
            address_of_token_to_buy: "token".to_string(),
            amount_of_solana_to_spend: 0.25,
            slippage: Some(-3.0),
            compute_unit_limit: None,
        };
        let err = config.order(&Settings::default()).unwrap_err();
        assert!(matches!(err, SwapError::Validation(_)));
    }

    #[test]
    fn buy_config_deserializes_with_defaults() {
        let config: BuyConfig = serde_json::from_value(serde_json::json!({
            "rpc_endpoint": "http://localhost:8899",
            "wallet_private_key": "key",
            "address_of_token_to_buy": "token",
            "amount_of_solana_to_spend": 1.0
        }))
        .unwrap();
        assert_eq!(config.slippage, None);
        assert_eq!(config.compute_unit_limit, None);
    }
}
