//! Command line front end for buying and selling tokens through Jupiter.
use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::info;
use solana_token_swapper::{
    buy_token_with, get_token_balance_with, get_tokens_balances_with, sell_token_with, BuyConfig,
    SellConfig, Settings,
};

#[derive(Debug, Parser)]
#[command(name = "solana-token-swapper", version, about)]
struct Cli {
    /// Solana JSON-RPC endpoint
    #[arg(long, env = "RPC_ENDPOINT")]
    rpc_endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Spend SOL on a token
    Buy {
        /// Mint address of the token to buy
        token: String,
        /// SOL to spend
        #[arg(long)]
        sol: f64,
        /// Slippage in percent
        #[arg(long)]
        slippage: Option<f64>,
        #[arg(long)]
        compute_unit_limit: Option<u32>,
        /// Base58 encoded keypair
        #[arg(long, env = "WALLET_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
    /// Sell a token for SOL
    Sell {
        /// Mint address of the token to sell
        token: String,
        #[arg(long, conflicts_with = "all", required_unless_present = "all")]
        amount: Option<f64>,
        /// Sell the whole balance
        #[arg(long)]
        all: bool,
        /// Slippage in percent
        #[arg(long)]
        slippage: Option<f64>,
        #[arg(long)]
        compute_unit_limit: Option<u32>,
        /// Base58 encoded keypair
        #[arg(long, env = "WALLET_PRIVATE_KEY", hide_env_values = true)]
        private_key: String,
    },
    /// Balance of one token
    Balance {
        token: String,
        #[arg(long, env = "WALLET_PUBLIC_KEY")]
        wallet: String,
    },
    /// Every token balance of a wallet
    Balances {
        #[arg(long, env = "WALLET_PUBLIC_KEY")]
        wallet: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    let settings = Settings::from_env().context("Failed to load SWAPPER_* settings")?;
    info!("solana-token-swapper v{}", solana_token_swapper::VERSION);

    match cli.command {
        Command::Buy {
            token,
            sol,
            slippage,
            compute_unit_limit,
            private_key,
        } => {
            let config = BuyConfig {
                rpc_endpoint: cli.rpc_endpoint,
                wallet_private_key: private_key,
                address_of_token_to_buy: token,
                amount_of_solana_to_spend: sol,
                slippage,
                compute_unit_limit,
            };
            let receipt = buy_token_with(&settings, config)
                .await
                .context("Buy failed")?;
            println!("{}", receipt.signature);
            receipt.wait_for_confirmation().await;
        }
        Command::Sell {
            token,
            amount,
            all,
            slippage,
            compute_unit_limit,
            private_key,
        } => {
            let config = SellConfig {
                sell_all: all,
                rpc_endpoint: cli.rpc_endpoint,
                wallet_private_key: private_key,
                address_of_token_to_sell: token,
                amount_of_token_to_sell: amount,
                slippage,
                compute_unit_limit,
            };
            let receipt = sell_token_with(&settings, config)
                .await
                .context("Sell failed")?;
            println!("{}", receipt.signature);
            receipt.wait_for_confirmation().await;
        }
        Command::Balance { token, wallet } => {
            let balance = get_token_balance_with(&settings, &cli.rpc_endpoint, &wallet, &token)
                .await
                .context("Failed to fetch token balance")?;
            println!("{}", balance);
        }
        Command::Balances { wallet } => {
            let balances = get_tokens_balances_with(&settings, &cli.rpc_endpoint, &wallet)
                .await
                .context("Failed to fetch token balances")?;
            for balance in balances.values() {
                println!(
                    "{}\t{}\t{}",
                    balance.mint_address, balance.symbol, balance.amount
                );
            }
        }
    }

    Ok(())
}
