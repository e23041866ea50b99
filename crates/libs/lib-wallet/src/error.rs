//! # Error Types
//!
//! Errors are split by where they originate:
//!
//! - [`WalletError`]: anything the injected provider (or its response) caused
//! - [`Rejection`]: local transfer validation; never reaches the provider
//! - [`SubmitError`]: everything a submit attempt can end with
//! - [`ConfigError`]: malformed configuration overrides
//!
//! None of these are fatal. The controller logs them and carries on; the worst
//! outcome is a provider prompt that never resolves.
//!
//! ```rust
//! use lib_wallet::error::{Rejection, SubmitError};
//!
//! let err = SubmitError::from(Rejection::InsufficientBalance);
//! assert_eq!(err.to_string(), "Transfer rejected: insufficient balance");
//! ```

use crate::controller::ControllerStatus;
use thiserror::Error;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

/// EIP-1193 error code for "the user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Raw failure reported by an injected provider, shaped like an EIP-1193
/// error object. The adapter classifies these into [`WalletError`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("provider error {}: {message}", code_label(.code))]
pub struct ProviderError {
    pub code: Option<i64>,
    pub message: String,
}

fn code_label(code: &Option<i64>) -> String {
    code.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
}

impl ProviderError {
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Provider error with code 4001.
    pub fn user_rejected(message: impl Into<String>) -> Self {
        Self::new(Some(USER_REJECTED_CODE), message)
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(USER_REJECTED_CODE)
    }
}

/// Provider-side failure, classified by the adapter.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No wallet provider is injected into the page. Terminal for the session.
    #[error("No wallet provider available")]
    ProviderUnavailable,

    /// The user declined the account authorization prompt.
    #[error("Account authorization denied")]
    AuthorizationDenied,

    /// Authorization succeeded but the provider returned no accounts.
    #[error("Provider returned no accounts")]
    NoAccounts,

    /// The provider or the user refused to switch chains.
    #[error("Chain switch rejected: {0}")]
    ChainSwitchRejected(String),

    /// The user declined to sign the transaction.
    #[error("Transaction rejected by user")]
    TransactionRejected,

    /// The provider or network failed to accept the transaction.
    #[error("Transaction submission failed: {0}")]
    TransactionSubmission(String),

    /// Balance query failed.
    #[error("Balance query failed: {0}")]
    BalanceQuery(String),

    /// The provider answered with a value that does not fit the expected type.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// Any other provider failure.
    #[error("Provider error: {0}")]
    Provider(String),
}

/// Why the transfer validator refused a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("recipient is empty")]
    InvalidRecipient,

    #[error("amount must be a positive decimal number")]
    InvalidAmount,

    #[error("insufficient balance")]
    InsufficientBalance,
}

/// Outcome of a failed submit attempt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Submit was requested while the controller was not `Ready`.
    #[error("Controller not ready (status: {0})")]
    NotReady(ControllerStatus),

    #[error("Transfer rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Wallet(#[from] WalletError),
}

/// Invalid configuration value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Unknown configuration key `{0}`")]
    UnknownKey(String),

    #[error("Inconsistent configuration: {0}")]
    Inconsistent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::user_rejected("User denied account authorization");
        assert!(err.is_user_rejection());
        assert_eq!(
            err.to_string(),
            "provider error 4001: User denied account authorization"
        );

        let err = ProviderError::new(None, "boom");
        assert!(!err.is_user_rejection());
        assert_eq!(err.to_string(), "provider error -: boom");
    }

    #[test]
    fn test_submit_error_conversions() {
        let err: SubmitError = WalletError::TransactionRejected.into();
        assert_eq!(err.to_string(), "Transaction rejected by user");

        let err: SubmitError = Rejection::InvalidAmount.into();
        assert_eq!(
            err.to_string(),
            "Transfer rejected: amount must be a positive decimal number"
        );

        let err = SubmitError::NotReady(ControllerStatus::Connecting);
        assert_eq!(err.to_string(), "Controller not ready (status: connecting)");
    }
}
