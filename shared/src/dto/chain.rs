//! # Networks, Assets and Chain Identifiers
//!
//! The panel knows exactly two networks and two tracked assets. Chain
//! identifiers are plain integers that travel as `0x`-prefixed hex strings,
//! matching what `wallet_switchEthereumChain` and `eth_chainId` use.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Network the user has selected in the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Mainnet, Network::Testnet];

    /// Lowercase identifier, as used in select values and serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// One of the two balances the panel tracks.
///
/// Display symbols are configuration, not part of the type; see
/// `lib_wallet::config::WalletConfig`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    #[default]
    Primary,
    Secondary,
}

impl Asset {
    pub const ALL: [Asset; 2] = [Asset::Primary, Asset::Secondary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Asset::Primary => "primary",
            Asset::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Asset {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Asset::Primary),
            "secondary" => Ok(Asset::Secondary),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Returned when a string names no known [`Network`] or [`Asset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant `{}`", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// EVM chain identifier.
///
/// Parses from `0x`-prefixed hex (`"0xaa36a7"`) or plain decimal (`"11155111"`)
/// and always displays as lowercase `0x` hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(u64);

impl ChainId {
    pub const MAINNET: ChainId = ChainId(0x1);
    /// Ropsten, the testnet the panel has always switched to.
    pub const ROPSTEN: ChainId = ChainId(0x3);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Returned when a chain id string is neither hex nor decimal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidChainId(pub String);

impl fmt::Display for InvalidChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid chain id `{}`", self.0)
    }
}

impl std::error::Error for InvalidChainId {}

impl FromStr for ChainId {
    type Err = InvalidChainId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => trimmed.parse::<u64>(),
        };
        parsed
            .map(ChainId)
            .map_err(|_| InvalidChainId(s.to_string()))
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_round_trips_through_str() {
        for network in Network::ALL {
            assert_eq!(network.as_str().parse::<Network>(), Ok(network));
        }
        assert_eq!(" Testnet ".parse::<Network>(), Ok(Network::Testnet));
        assert!("devnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_asset_parse() {
        assert_eq!("secondary".parse::<Asset>(), Ok(Asset::Secondary));
        assert_eq!(
            "eth".parse::<Asset>(),
            Err(UnknownVariant("eth".to_string()))
        );
    }

    #[test]
    fn test_chain_id_parse_hex_and_decimal() {
        assert_eq!("0x1".parse::<ChainId>(), Ok(ChainId::MAINNET));
        assert_eq!("0xAA36A7".parse::<ChainId>(), Ok(ChainId::new(11_155_111)));
        assert_eq!("11155111".parse::<ChainId>(), Ok(ChainId::new(11_155_111)));
        assert!("0x".parse::<ChainId>().is_err());
        assert!("ropsten".parse::<ChainId>().is_err());
    }

    #[test]
    fn test_chain_id_display_is_lowercase_hex() {
        assert_eq!(ChainId::ROPSTEN.to_string(), "0x3");
        assert_eq!(ChainId::new(11_155_111).to_string(), "0xaa36a7");
    }

    #[test]
    fn test_serde_wire_format() {
        assert_eq!(serde_json::to_string(&Network::Testnet).unwrap(), "\"testnet\"");
        assert_eq!(serde_json::to_string(&Asset::Primary).unwrap(), "\"primary\"");
        assert_eq!(serde_json::to_string(&ChainId::MAINNET).unwrap(), "\"0x1\"");

        let id: ChainId = serde_json::from_str("\"0x3\"").unwrap();
        assert_eq!(id, ChainId::ROPSTEN);
    }
}
