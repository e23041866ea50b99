//! # Wallet Configuration
//!
//! Which chain each network maps to and how the two tracked assets are
//! labelled. Defaults match the panel's historical behaviour (mainnet `0x1`,
//! testnet `0x3`, assets `ETH` / `BNB`); a host can override any of them with
//! key/value pairs, e.g. from the page's query string:
//!
//! ```rust
//! use lib_wallet::config::WalletConfig;
//! use shared::{ChainId, Network};
//!
//! let config = WalletConfig::from_pairs([("testnetChainId", "0xaa36a7")]).unwrap();
//! assert_eq!(config.chain_id(Network::Testnet), ChainId::new(11_155_111));
//! assert_eq!(config.chain_id(Network::Mainnet), ChainId::MAINNET);
//! ```
//!
//! Every constructor validates before returning, so a `WalletConfig` obtained
//! from [`WalletConfig::from_pairs`] is always consistent.

use crate::error::ConfigError;
use shared::{Asset, ChainId, Network};

pub const KEY_MAINNET_CHAIN_ID: &str = "mainnetChainId";
pub const KEY_TESTNET_CHAIN_ID: &str = "testnetChainId";
pub const KEY_PRIMARY_SYMBOL: &str = "primarySymbol";
pub const KEY_SECONDARY_SYMBOL: &str = "secondarySymbol";

/// Network and asset configuration for one panel instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConfig {
    /// Chain requested when the user picks mainnet
    pub mainnet_chain_id: ChainId,

    /// Chain requested when the user picks testnet
    pub testnet_chain_id: ChainId,

    /// Display symbol of [`Asset::Primary`]
    pub primary_symbol: String,

    /// Display symbol of [`Asset::Secondary`]
    pub secondary_symbol: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            mainnet_chain_id: ChainId::MAINNET,
            testnet_chain_id: ChainId::ROPSTEN,
            primary_symbol: "ETH".to_string(),
            secondary_symbol: "BNB".to_string(),
        }
    }
}

impl WalletConfig {
    /// Defaults with the given overrides applied, then validated.
    ///
    /// Keys are [`KEY_MAINNET_CHAIN_ID`], [`KEY_TESTNET_CHAIN_ID`],
    /// [`KEY_PRIMARY_SYMBOL`] and [`KEY_SECONDARY_SYMBOL`]. Any other key is
    /// an error so typos don't silently fall back to defaults.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            config.apply(key.as_ref(), value.as_ref())?;
        }
        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.to_string(),
            reason,
        };

        match key {
            KEY_MAINNET_CHAIN_ID => {
                self.mainnet_chain_id = value.parse::<ChainId>().map_err(|e| invalid(format!("{}", e)))?;
            }
            KEY_TESTNET_CHAIN_ID => {
                self.testnet_chain_id = value.parse::<ChainId>().map_err(|e| invalid(format!("{}", e)))?;
            }
            KEY_PRIMARY_SYMBOL => self.primary_symbol = value.trim().to_string(),
            KEY_SECONDARY_SYMBOL => self.secondary_symbol = value.trim().to_string(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Check the values against each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mainnet_chain_id.value() == 0 || self.testnet_chain_id.value() == 0 {
            return Err(ConfigError::Inconsistent(
                "chain id 0 is not a valid chain".to_string(),
            ));
        }
        if self.mainnet_chain_id == self.testnet_chain_id {
            return Err(ConfigError::Inconsistent(format!(
                "mainnet and testnet share chain id {}",
                self.mainnet_chain_id
            )));
        }
        if self.primary_symbol.is_empty() || self.secondary_symbol.is_empty() {
            return Err(ConfigError::Inconsistent(
                "asset symbols must not be empty".to_string(),
            ));
        }
        if self.primary_symbol == self.secondary_symbol {
            return Err(ConfigError::Inconsistent(format!(
                "both assets use the symbol {}",
                self.primary_symbol
            )));
        }
        Ok(())
    }

    /// Chain id the provider is asked to switch to for `network`.
    pub fn chain_id(&self, network: Network) -> ChainId {
        match network {
            Network::Mainnet => self.mainnet_chain_id,
            Network::Testnet => self.testnet_chain_id,
        }
    }

    pub fn symbol(&self, asset: Asset) -> &str {
        match asset {
            Asset::Primary => &self.primary_symbol,
            Asset::Secondary => &self.secondary_symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WalletConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chain_id(Network::Mainnet).to_string(), "0x1");
        assert_eq!(config.chain_id(Network::Testnet).to_string(), "0x3");
        assert_eq!(config.symbol(Asset::Primary), "ETH");
        assert_eq!(config.symbol(Asset::Secondary), "BNB");
    }

    #[test]
    fn test_overrides() {
        let config = WalletConfig::from_pairs([
            (KEY_MAINNET_CHAIN_ID, "56"),
            (KEY_TESTNET_CHAIN_ID, "0x61"),
            (KEY_PRIMARY_SYMBOL, " BNB "),
            (KEY_SECONDARY_SYMBOL, "ETH"),
        ])
        .unwrap();

        assert_eq!(config.mainnet_chain_id, ChainId::new(56));
        assert_eq!(config.testnet_chain_id, ChainId::new(97));
        assert_eq!(config.symbol(Asset::Primary), "BNB");
    }

    #[test]
    fn test_no_overrides_is_default() {
        let pairs: Vec<(String, String)> = Vec::new();
        assert_eq!(WalletConfig::from_pairs(pairs).unwrap(), WalletConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = WalletConfig::from_pairs([(KEY_TESTNET_CHAIN_ID, "sepolia")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == KEY_TESTNET_CHAIN_ID));

        let err = WalletConfig::from_pairs([("testnetChainID", "0x5")]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownKey("testnetChainID".to_string()));
    }

    #[test]
    fn test_rejects_inconsistent_values() {
        assert!(matches!(
            WalletConfig::from_pairs([(KEY_TESTNET_CHAIN_ID, "0x1")]),
            Err(ConfigError::Inconsistent(_))
        ));
        assert!(matches!(
            WalletConfig::from_pairs([(KEY_MAINNET_CHAIN_ID, "0")]),
            Err(ConfigError::Inconsistent(_))
        ));
        assert!(matches!(
            WalletConfig::from_pairs([(KEY_SECONDARY_SYMBOL, "ETH")]),
            Err(ConfigError::Inconsistent(_))
        ));
        assert!(matches!(
            WalletConfig::from_pairs([(KEY_PRIMARY_SYMBOL, "  ")]),
            Err(ConfigError::Inconsistent(_))
        ));
    }
}
