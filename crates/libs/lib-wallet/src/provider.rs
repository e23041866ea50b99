//! # Injected Provider Seam
//!
//! [`WalletProvider`] is the narrow slice of EIP-1193 the panel uses. The
//! browser build implements it over `window.ethereum`; tests implement it with
//! scripted mocks. Implementations report failures as [`ProviderError`] and
//! leave classification to [`crate::adapter::ProviderAdapter`].
//!
//! ## Requests
//!
//! | Method | EIP-1193 request |
//! |---|---|
//! | [`request_accounts`](WalletProvider::request_accounts) | `eth_requestAccounts` |
//! | [`chain_id`](WalletProvider::chain_id) | `eth_chainId` |
//! | [`get_balance`](WalletProvider::get_balance) | `eth_getBalance(account, "latest")` |
//! | [`switch_chain`](WalletProvider::switch_chain) | `wallet_switchEthereumChain` |
//! | [`send_transaction`](WalletProvider::send_transaction) | `eth_sendTransaction` |
//!
//! Futures are `?Send`: browser promises live on the single JS thread.

use crate::error::ProviderError;
use async_trait::async_trait;
use ethers_core::types::{Address, U256};
use shared::ChainId;

/// A native value transfer, already converted to typed values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferTx {
    pub from: Address,
    pub to: Address,
    /// Value in minor units (wei)
    pub value: U256,
}

/// Host wallet provider.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Whether a provider is injected into the host at all.
    fn is_injected(&self) -> bool;

    /// Ask the user to authorize accounts. Returns raw account strings.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Chain the provider is currently on.
    async fn chain_id(&self) -> Result<ChainId, ProviderError>;

    /// Native balance of `account` on the active chain, in minor units.
    async fn get_balance(&self, account: &Address) -> Result<U256, ProviderError>;

    async fn switch_chain(&self, chain_id: ChainId) -> Result<(), ProviderError>;

    /// Submit a transfer for signing. Resolves with the transaction hash once
    /// the provider accepts it.
    async fn send_transaction(&self, tx: &TransferTx) -> Result<String, ProviderError>;
}
