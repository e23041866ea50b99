//! # Transfer Validator
//!
//! Pure pre-flight check of a transfer request against the current session.
//! Runs before anything reaches the provider, so a rejection here never opens
//! a wallet prompt.
//!
//! Checks run in order and the first failure wins:
//!
//! 1. recipient is non-empty
//! 2. amount is a positive plain decimal
//! 3. amount does not exceed the balance of the requested asset, unless the
//!    session is transfer-locked (testnet)
//!
//! Amounts are compared as minor-unit integers, never as floats.

use crate::error::Rejection;
use crate::session::Session;
use crate::units::parse_major;
use ethers_core::types::U256;
use shared::Asset;

/// One submit attempt as entered in the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    pub recipient: String,
    /// Major-unit decimal string
    pub amount: String,
    pub asset: Asset,
}

impl TransferRequest {
    pub fn new(recipient: impl Into<String>, amount: impl Into<String>, asset: Asset) -> Self {
        Self {
            recipient: recipient.into(),
            amount: amount.into(),
            asset,
        }
    }
}

/// Validate `request` against `session`.
///
/// ```rust
/// use lib_wallet::error::Rejection;
/// use lib_wallet::session::Session;
/// use lib_wallet::validator::{validate, TransferRequest};
/// use shared::Asset;
///
/// let session = Session::new();
/// let request = TransferRequest::new("", "1", Asset::Primary);
/// assert_eq!(validate(&session, &request), Err(Rejection::InvalidRecipient));
/// ```
pub fn validate(session: &Session, request: &TransferRequest) -> Result<(), Rejection> {
    if request.recipient.trim().is_empty() {
        return Err(Rejection::InvalidRecipient);
    }

    let amount = parse_major(&request.amount).map_err(|_| Rejection::InvalidAmount)?;
    if amount.is_zero() {
        return Err(Rejection::InvalidAmount);
    }

    if session.transfer_locked() {
        return Ok(());
    }

    if amount > balance_of(session, request.asset) {
        return Err(Rejection::InsufficientBalance);
    }

    Ok(())
}

/// Minor-unit balance of `asset`. Missing or unreadable balances count as zero.
fn balance_of(session: &Session, asset: Asset) -> U256 {
    session
        .balance(asset)
        .and_then(|balance| parse_major(balance).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared::Network;

    const RECIPIENT: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    fn session(primary: &str, secondary: &str, network: Network) -> Session {
        let mut session = Session::new();
        session.initialize(
            "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe".to_string(),
            primary.to_string(),
            secondary.to_string(),
        );
        session.set_network(network);
        session
    }

    fn request(recipient: &str, amount: &str) -> TransferRequest {
        TransferRequest::new(recipient, amount, Asset::Primary)
    }

    #[test]
    fn test_scenario_a_within_balance() {
        let session = session("2.5", "10", Network::Mainnet);
        assert_eq!(validate(&session, &request(RECIPIENT, "1.0")), Ok(()));
    }

    #[test]
    fn test_scenario_b_insufficient_balance() {
        let session = session("2.5", "10", Network::Mainnet);
        assert_eq!(
            validate(&session, &request(RECIPIENT, "3.0")),
            Err(Rejection::InsufficientBalance)
        );
    }

    #[test]
    fn test_scenario_c_testnet_skips_balance() {
        let session = session("2.5", "10", Network::Testnet);
        assert_eq!(validate(&session, &request(RECIPIENT, "1000")), Ok(()));
    }

    #[test]
    fn test_scenario_d_empty_recipient() {
        let session = session("2.5", "10", Network::Mainnet);
        assert_eq!(
            validate(&session, &request("", "1.0")),
            Err(Rejection::InvalidRecipient)
        );
    }

    #[test]
    fn test_recipient_checked_before_amount() {
        let session = session("2.5", "10", Network::Mainnet);
        for amount in ["", "abc", "0", "999"] {
            assert_eq!(
                validate(&session, &request("   ", amount)),
                Err(Rejection::InvalidRecipient)
            );
        }
    }

    #[test]
    fn test_invalid_amounts() {
        let session = session("2.5", "10", Network::Testnet);
        for amount in ["", "0", "0.0", "-1", "abc", "1e3", "0.0000000000000000001"] {
            assert_eq!(
                validate(&session, &request(RECIPIENT, amount)),
                Err(Rejection::InvalidAmount),
                "amount {amount:?}"
            );
        }
    }

    #[test]
    fn test_amount_equal_to_balance_is_allowed() {
        let session = session("2.5", "10", Network::Mainnet);
        assert_eq!(validate(&session, &request(RECIPIENT, "2.5")), Ok(()));
        assert_eq!(
            validate(&session, &request(RECIPIENT, "2.500000000000000001")),
            Err(Rejection::InsufficientBalance)
        );
    }

    #[test]
    fn test_checks_balance_of_requested_asset() {
        let session = session("2.5", "10", Network::Mainnet);
        let req = TransferRequest::new(RECIPIENT, "5", Asset::Secondary);
        assert_eq!(validate(&session, &req), Ok(()));

        let req = TransferRequest::new(RECIPIENT, "11", Asset::Secondary);
        assert_eq!(validate(&session, &req), Err(Rejection::InsufficientBalance));
    }

    #[test]
    fn test_missing_balance_counts_as_zero() {
        let session = Session::new();
        assert_eq!(
            validate(&session, &request(RECIPIENT, "0.1")),
            Err(Rejection::InsufficientBalance)
        );
    }

    fn decimal() -> impl Strategy<Value = String> {
        (0u64..1_000_000, 0u32..1_000_000).prop_map(|(int, frac)| format!("{}.{:06}", int, frac))
    }

    proptest! {
        #[test]
        fn prop_unlocked_compares_against_balance(balance in decimal(), amount in decimal()) {
            let session = session(&balance, "0", Network::Mainnet);
            let result = validate(&session, &request(RECIPIENT, &amount));

            let amount_wei = parse_major(&amount).unwrap();
            let balance_wei = parse_major(&balance).unwrap();
            if amount_wei.is_zero() {
                prop_assert_eq!(result, Err(Rejection::InvalidAmount));
            } else if amount_wei > balance_wei {
                prop_assert_eq!(result, Err(Rejection::InsufficientBalance));
            } else {
                prop_assert_eq!(result, Ok(()));
            }
        }

        #[test]
        fn prop_locked_never_insufficient(balance in decimal(), amount in decimal()) {
            let session = session(&balance, &balance, Network::Testnet);
            let result = validate(&session, &request(RECIPIENT, &amount));
            prop_assert_ne!(result, Err(Rejection::InsufficientBalance));
        }
    }
}
