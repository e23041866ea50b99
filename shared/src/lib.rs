//! # Shared Chain Vocabulary
//!
//! Types and helpers used by both the wallet core (`lib-wallet`) and the
//! browser panel (`wallet-web`).
//!
//! ## Structure
//!
//! - **[`dto`]**: Chain vocabulary
//!   - **[`dto::chain`]**: [`Network`], [`Asset`] and [`ChainId`]
//! - **[`utils`]**: Display helpers
//!   - **[`utils::short_address`]**: Abbreviate a hex address for logs and labels
//!
//! ## Wire Format
//!
//! - `Network` and `Asset` serialize as lowercase strings (`"mainnet"`, `"primary"`)
//! - `ChainId` serializes as the `0x`-prefixed hex string wallets expect
//!
//! ```rust
//! use shared::{ChainId, Network};
//!
//! let network: Network = "testnet".parse().unwrap();
//! assert_eq!(network, Network::Testnet);
//! assert_eq!(ChainId::new(1).to_string(), "0x1");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
