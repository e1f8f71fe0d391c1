pub mod client;
pub mod confirmation;
pub mod jupiter;
pub mod rpc;
pub mod tokens;
pub mod utils;
pub mod wallet;

// Re-export commonly used items
pub use client::{create_solana_client, websocket_url};
pub use rpc::{AccountData, ChainRpc, SolanaRpc};
pub use tokens::constants::{NATIVE_MINT, USDC_MINT};
pub use utils::{convert_to_integer, get_symbol_from_mint};
pub use wallet::{keypair_from_base58, parse_pubkey};
