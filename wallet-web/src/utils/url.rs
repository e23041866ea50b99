//! URL utility functions for reading query parameters

use lib_wallet::config::{
    KEY_MAINNET_CHAIN_ID, KEY_PRIMARY_SYMBOL, KEY_SECONDARY_SYMBOL, KEY_TESTNET_CHAIN_ID,
};
use lib_wallet::{ConfigError, WalletConfig};

const CONFIG_KEYS: [&str; 4] = [
    KEY_MAINNET_CHAIN_ID,
    KEY_TESTNET_CHAIN_ID,
    KEY_PRIMARY_SYMBOL,
    KEY_SECONDARY_SYMBOL,
];

/// Split a `location.search` string into decoded key/value pairs, in order.
///
/// A key without `=` yields an empty value. Values that fail to decode are
/// kept as written.
///
/// ```rust
/// use wallet_web::utils::url::parse_query;
///
/// let pairs = parse_query("?primarySymbol=ETH&note=a%20b&flag");
/// assert_eq!(pairs[1], ("note".to_string(), "a b".to_string()));
/// assert_eq!(pairs[2], ("flag".to_string(), String::new()));
/// ```
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    let query_string = search.strip_prefix('?').unwrap_or(search);

    query_string
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Build the wallet configuration from the page's query string.
///
/// Parameters that aren't configuration keys are ignored, so the panel can be
/// embedded with unrelated query parameters.
pub fn config_from_query(search: &str) -> Result<WalletConfig, ConfigError> {
    let overrides = parse_query(search)
        .into_iter()
        .filter(|(key, _)| CONFIG_KEYS.contains(&key.as_str()));
    WalletConfig::from_pairs(overrides)
}

/// Raw `location.search` of the current page, empty when unavailable.
#[cfg(target_arch = "wasm32")]
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Asset, ChainId, Network};

    #[test]
    fn test_parse_query() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
        assert_eq!(
            parse_query("a=1&&b=x%3Dy"),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "x=y".to_string()),
            ]
        );
    }

    #[test]
    fn test_config_from_query() {
        let config =
            config_from_query("?testnetChainId=0xaa36a7&secondarySymbol=USDC&utm_source=mail")
                .unwrap();
        assert_eq!(config.chain_id(Network::Testnet), ChainId::new(11_155_111));
        assert_eq!(config.chain_id(Network::Mainnet), ChainId::MAINNET);
        assert_eq!(config.symbol(Asset::Secondary), "USDC");
    }

    #[test]
    fn test_config_from_empty_query_is_default() {
        assert_eq!(config_from_query("").unwrap(), WalletConfig::default());
    }

    #[test]
    fn test_config_from_query_rejects_bad_values() {
        assert!(config_from_query("?mainnetChainId=main").is_err());
        assert!(config_from_query("?testnetChainId=0x1").is_err());
    }
}
