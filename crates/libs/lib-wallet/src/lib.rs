//! # Wallet Library
//!
//! Session and transfer logic for the wallet panel, independent of the
//! browser: the provider seam, the adapter that types its responses, the
//! session state, transfer validation and the controller tying them together.
//!
//! ```text
//! UI events ──► Controller ──► ProviderAdapter ──► WalletProvider (window.ethereum)
//!                  │   ▲
//!                  ▼   │
//!               Session, validate()
//! ```

pub mod adapter;
pub mod config;
pub mod controller;
pub mod error;
pub mod provider;
pub mod session;
pub mod units;
pub mod validator;

// Re-export commonly used types
pub use adapter::{ProviderAdapter, TransferReceipt};
pub use config::WalletConfig;
pub use controller::{Controller, ControllerEvent, ControllerStatus};
pub use error::{ConfigError, ProviderError, Rejection, Result, SubmitError, WalletError};
pub use provider::{TransferTx, WalletProvider};
pub use session::Session;
pub use validator::{validate, TransferRequest};

pub use ethers_core::types::{Address, H256, U256};
