//! # Session State
//!
//! Data derived from the provider connection plus the user's network and asset
//! selection. The transitions are crate-private: only the controller mutates a
//! session, and each transition leaves it consistent
//! (`transfer_locked == (network == Testnet)`).

use serde::Serialize;
use shared::{Asset, Network};
use std::collections::BTreeMap;

/// Snapshot-able session data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    account: Option<String>,
    /// Major-unit decimal strings keyed by asset
    balances: BTreeMap<Asset, String>,
    network: Network,
    selected_asset: Asset,
    transfer_locked: bool,
}

impl Session {
    /// Empty session: no account, mainnet, primary asset, unlocked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connected account, `None` until the first successful connection.
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Balance of `asset` in major units, if fetched.
    pub fn balance(&self, asset: Asset) -> Option<&str> {
        self.balances.get(&asset).map(String::as_str)
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn selected_asset(&self) -> Asset {
        self.selected_asset
    }

    /// True on testnet: asset selection is frozen to primary and transfers
    /// skip the balance check.
    pub fn transfer_locked(&self) -> bool {
        self.transfer_locked
    }

    /// Store the account and both balances from the connect-and-fetch sequence.
    ///
    /// Network and selection are left as they are: a fresh session is already
    /// on mainnet and unlocked, and a network change made while connecting must
    /// survive initialization.
    pub(crate) fn initialize(&mut self, account: String, primary: String, secondary: String) {
        self.account = Some(account);
        self.balances.insert(Asset::Primary, primary);
        self.balances.insert(Asset::Secondary, secondary);
    }

    pub(crate) fn set_network(&mut self, network: Network) {
        self.network = network;
        self.transfer_locked = network == Network::Testnet;
        if self.transfer_locked {
            self.selected_asset = Asset::Primary;
        }
    }

    /// Returns false, leaving the selection untouched, while locked.
    pub(crate) fn set_selected_asset(&mut self, asset: Asset) -> bool {
        if self.transfer_locked {
            return false;
        }
        self.selected_asset = asset;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected() -> Session {
        let mut session = Session::new();
        session.initialize(
            "0x52908400098527886E0F7030069857D2E4169EE7".to_string(),
            "2.5".to_string(),
            "10".to_string(),
        );
        session
    }

    #[test]
    fn test_new_session_is_empty_mainnet() {
        let session = Session::new();
        assert_eq!(session.account(), None);
        assert!(!session.is_connected());
        assert_eq!(session.balance(Asset::Primary), None);
        assert_eq!(session.network(), Network::Mainnet);
        assert_eq!(session.selected_asset(), Asset::Primary);
        assert!(!session.transfer_locked());
    }

    #[test]
    fn test_initialize_sets_account_and_balances() {
        let session = connected();
        assert!(session.is_connected());
        assert_eq!(session.balance(Asset::Primary), Some("2.5"));
        assert_eq!(session.balance(Asset::Secondary), Some("10"));
        assert_eq!(session.network(), Network::Mainnet);
        assert!(!session.transfer_locked());
    }

    #[test]
    fn test_initialize_keeps_network_chosen_while_connecting() {
        let mut session = Session::new();
        session.set_network(Network::Testnet);
        session.initialize("0xabc".to_string(), "1".to_string(), "1".to_string());
        assert_eq!(session.network(), Network::Testnet);
        assert!(session.transfer_locked());
    }

    #[test]
    fn test_testnet_locks_and_forces_primary() {
        let mut session = connected();
        assert!(session.set_selected_asset(Asset::Secondary));

        session.set_network(Network::Testnet);
        assert!(session.transfer_locked());
        assert_eq!(session.selected_asset(), Asset::Primary);
    }

    #[test]
    fn test_mainnet_unlocks_without_touching_selection() {
        let mut session = connected();
        session.set_network(Network::Testnet);
        session.set_network(Network::Mainnet);
        assert!(!session.transfer_locked());
        assert_eq!(session.selected_asset(), Asset::Primary);

        assert!(session.set_selected_asset(Asset::Secondary));
        session.set_network(Network::Mainnet);
        assert_eq!(session.selected_asset(), Asset::Secondary);
    }

    #[test]
    fn test_lock_invariant_holds_for_any_sequence() {
        let mut session = connected();
        let steps = [
            Network::Testnet,
            Network::Testnet,
            Network::Mainnet,
            Network::Testnet,
            Network::Mainnet,
            Network::Mainnet,
        ];
        for network in steps {
            session.set_network(network);
            assert_eq!(session.transfer_locked(), network == Network::Testnet);
            if session.transfer_locked() {
                assert_eq!(session.selected_asset(), Asset::Primary);
            }
        }
    }

    #[test]
    fn test_selection_frozen_while_locked() {
        let mut session = connected();
        session.set_network(Network::Testnet);

        for _ in 0..3 {
            assert!(!session.set_selected_asset(Asset::Secondary));
            assert_eq!(session.selected_asset(), Asset::Primary);
        }
    }

    #[test]
    fn test_serializes_for_snapshots() {
        let json = serde_json::to_value(connected()).unwrap();
        assert_eq!(json["network"], "mainnet");
        assert_eq!(json["balances"]["primary"], "2.5");
        assert_eq!(json["transfer_locked"], false);
    }
}
