//! # Provider Adapter
//!
//! Thin façade over an injected [`WalletProvider`]. It owns the provider handle,
//! converts raw provider values into typed ones (checksummed addresses,
//! major-unit balances, transaction hashes) and classifies failures into
//! [`WalletError`]. Nothing untyped leaves this module.
//!
//! Every call may open a wallet prompt; the adapter awaits it and reports the
//! outcome, it never retries.

use crate::config::WalletConfig;
use crate::error::{ProviderError, Result, WalletError};
use crate::provider::{TransferTx, WalletProvider};
use crate::units::{format_major, parse_major};
use ethers_core::types::{Address, H256, U256};
use ethers_core::utils::to_checksum;
use shared::{short_address, Asset, Network};
use std::str::FromStr;

/// Provider acceptance of a transfer. Not an on-chain confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferReceipt {
    pub hash: H256,
    pub from: Address,
    pub to: Address,
    /// Value in minor units
    pub value: U256,
}

impl TransferReceipt {
    /// Full `0x`-prefixed transaction hash.
    pub fn hash_hex(&self) -> String {
        format!("{:?}", self.hash)
    }
}

pub struct ProviderAdapter<P> {
    provider: P,
    config: WalletConfig,
}

impl<P: WalletProvider> ProviderAdapter<P> {
    pub fn new(provider: P, config: WalletConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_injected()
    }

    /// Request account authorization and return the first authorized account
    /// in EIP-55 checksum form.
    pub async fn connect(&self) -> Result<String> {
        if !self.is_available() {
            return Err(WalletError::ProviderUnavailable);
        }

        let accounts = self.provider.request_accounts().await.map_err(|e| {
            if e.is_user_rejection() {
                WalletError::AuthorizationDenied
            } else {
                WalletError::Provider(e.message)
            }
        })?;

        if accounts.len() > 1 {
            tracing::debug!(count = accounts.len(), "provider authorized several accounts, using the first");
        }
        let first = accounts.first().ok_or(WalletError::NoAccounts)?;
        let address = parse_address(first).map_err(WalletError::InvalidResponse)?;

        Ok(to_checksum(&address, None))
    }

    /// Native balance of `account` in major units.
    ///
    /// Both assets read the same chain balance; `asset` only labels the query.
    pub async fn get_balance(&self, account: &str, asset: Asset) -> Result<String> {
        let address = parse_address(account).map_err(WalletError::BalanceQuery)?;

        let minor = self
            .provider
            .get_balance(&address)
            .await
            .map_err(|e| WalletError::BalanceQuery(e.message))?;

        let major = format_major(minor);
        tracing::debug!(
            account = %short_address(account),
            asset = self.config.symbol(asset),
            balance = %major,
            "balance fetched"
        );
        Ok(major)
    }

    /// Switch the provider to the chain configured for `target`.
    ///
    /// A no-op when the provider already reports that chain. If the current
    /// chain can't be read the switch is requested anyway.
    pub async fn switch_chain(&self, target: Network) -> Result<()> {
        let chain_id = self.config.chain_id(target);

        match self.provider.chain_id().await {
            Ok(current) if current == chain_id => {
                tracing::debug!(%chain_id, "already on requested chain");
                return Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(error = %e, "could not read current chain, switching anyway");
            }
        }

        self.provider
            .switch_chain(chain_id)
            .await
            .map_err(|e: ProviderError| WalletError::ChainSwitchRejected(e.message))
    }

    /// Convert `amount` to minor units and submit a transfer from `from` to `to`.
    pub async fn send_value_transfer(
        &self,
        from: &str,
        to: &str,
        amount: &str,
    ) -> Result<TransferReceipt> {
        let from = parse_address(from).map_err(WalletError::TransactionSubmission)?;
        let to = parse_address(to)
            .map_err(|e| WalletError::TransactionSubmission(format!("recipient: {}", e)))?;
        let value = parse_major(amount)
            .map_err(|e| WalletError::TransactionSubmission(format!("amount: {}", e)))?;

        let tx = TransferTx { from, to, value };
        let raw_hash = self.provider.send_transaction(&tx).await.map_err(|e| {
            if e.is_user_rejection() {
                WalletError::TransactionRejected
            } else {
                WalletError::TransactionSubmission(e.message)
            }
        })?;

        let hash = parse_hash(&raw_hash).ok_or_else(|| {
            WalletError::TransactionSubmission(format!(
                "provider returned malformed transaction hash `{}`",
                raw_hash
            ))
        })?;

        Ok(TransferReceipt {
            hash,
            from,
            to,
            value,
        })
    }
}

/// Parse a `0x`-prefixed 20-byte hex address.
fn parse_address(raw: &str) -> std::result::Result<Address, String> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| format!("`{}` is not a 0x-prefixed address", raw))?;
    if digits.len() != 40 {
        return Err(format!("`{}` is not a 20-byte address", raw));
    }
    Address::from_str(digits).map_err(|_| format!("`{}` is not a hex address", raw))
}

/// Parse a `0x`-prefixed 32-byte transaction hash.
fn parse_hash(raw: &str) -> Option<H256> {
    let digits = raw.trim().strip_prefix("0x")?;
    if digits.len() != 64 {
        return None;
    }
    H256::from_str(digits).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hash() {
        let hash = format!("0x{}", "ab".repeat(32));
        assert_eq!(parse_hash(&hash), Some(H256::repeat_byte(0xab)));
        assert_eq!(parse_hash(&"ab".repeat(32)), None);
        assert_eq!(parse_hash("0xabc"), None);
        assert_eq!(parse_hash(""), None);
    }

    #[test]
    fn test_parse_address() {
        let addr = parse_address("0x52908400098527886e0f7030069857d2e4169ee7").unwrap();
        assert_eq!(
            to_checksum(&addr, None),
            "0x52908400098527886E0F7030069857D2E4169EE7"
        );

        assert!(parse_address("52908400098527886e0f7030069857d2e4169ee7").is_err());
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("0xAB...").is_err());
        assert!(parse_address("0xzz08400098527886e0f7030069857d2e4169ee7").is_err());
    }

    #[test]
    fn test_receipt_hash_hex() {
        let receipt = TransferReceipt {
            hash: H256::repeat_byte(0xab),
            from: Address::zero(),
            to: Address::zero(),
            value: U256::one(),
        };
        assert_eq!(receipt.hash_hex(), format!("0x{}", "ab".repeat(32)));
    }
}
