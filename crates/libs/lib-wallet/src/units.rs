//! # Major / Minor Unit Conversion
//!
//! Amounts cross the UI as human-readable decimal strings ("major units",
//! e.g. `"2.5"` ETH) and cross the provider boundary as integer base units
//! ("minor units", wei). Comparison always happens on the integer side.
//!
//! Parsing goes through `ethers_core::utils::parse_ether`, which handles the
//! full 256-bit range without floating point. Input is screened first so that
//! signs, exponents and separators never reach it.

use ethers_core::types::U256;
use ethers_core::utils::{format_ether, parse_ether};
use thiserror::Error;

/// Longest integer part whose wei value still fits in 256 bits.
const MAX_INTEGER_DIGITS: usize = 58;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("amount is empty")]
    Empty,

    #[error("`{0}` is not a plain decimal number")]
    NotDecimal(String),

    #[error("`{0}` does not fit in 256 bits")]
    Overflow(String),

    #[error("`{0}` is not a hex quantity")]
    NotHex(String),
}

/// Parse a major-unit decimal string into minor units.
///
/// Accepts ASCII digits with at most one decimal point (`"1"`, `"0.5"`,
/// `".5"`, `"5."`). Surrounding whitespace is ignored. Digits past the 18th
/// decimal place are truncated.
///
/// ```rust
/// use lib_wallet::units::parse_major;
///
/// assert_eq!(parse_major("1.5").unwrap().as_u128(), 1_500_000_000_000_000_000);
/// assert!(parse_major("-1").is_err());
/// assert!(parse_major("1e18").is_err());
/// ```
pub fn parse_major(amount: &str) -> Result<U256, UnitsError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(UnitsError::Empty);
    }

    let mut dots = 0usize;
    let mut digits = 0usize;
    for ch in trimmed.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return Err(UnitsError::NotDecimal(trimmed.to_string())),
        }
    }
    if digits == 0 || dots > 1 {
        return Err(UnitsError::NotDecimal(trimmed.to_string()));
    }

    let (integer, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    // leading zeros carry no magnitude
    let integer = integer.trim_start_matches('0');
    if integer.len() > MAX_INTEGER_DIGITS {
        return Err(UnitsError::Overflow(trimmed.to_string()));
    }

    // parse_ether wants digits on both sides of the point
    let integer = if integer.is_empty() { "0" } else { integer };
    let normalized = if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    };

    parse_ether(&normalized).map_err(|_| UnitsError::Overflow(trimmed.to_string()))
}

/// Format minor units as a major-unit decimal string without trailing zeros.
///
/// ```rust
/// use lib_wallet::units::{format_major, parse_major};
///
/// assert_eq!(format_major(parse_major("2.50").unwrap()), "2.5");
/// assert_eq!(format_major(0u64.into()), "0");
/// ```
pub fn format_major(minor: U256) -> String {
    let formatted = format_ether(minor);
    if !formatted.contains('.') {
        return formatted;
    }
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse an EIP-1193 hex quantity (`"0x1bc16d674ec80000"`) into minor units.
pub fn parse_hex_quantity(quantity: &str) -> Result<U256, UnitsError> {
    let trimmed = quantity.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| UnitsError::NotHex(quantity.to_string()))?;
    if digits.is_empty() {
        return Err(UnitsError::NotHex(quantity.to_string()));
    }
    U256::from_str_radix(digits, 16).map_err(|_| UnitsError::NotHex(quantity.to_string()))
}

/// Render minor units as an EIP-1193 hex quantity.
pub fn to_hex_quantity(minor: U256) -> String {
    format!("0x{:x}", minor)
}
