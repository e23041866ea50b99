//! # Formatting Utilities for Wallet Web
//!
//! Display formatting for amounts and addresses. Amounts arrive as exact
//! major-unit decimal strings from `lib-wallet` and are formatted as strings;
//! they never pass through floating point.
//!
//! ## Functions
//!
//! - [`format_amount`] - Group the integer part and cap the shown decimals
//! - [`format_balance`] - Amount with its asset symbol
//! - [`format_tx_hash`] - Shortened transaction hash for notices

/// Format a decimal string with comma separators, showing at most
/// `max_decimals` decimal places (truncated, trailing zeros dropped).
///
/// Input that isn't a plain decimal is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use wallet_web::utils::format::format_amount;
///
/// assert_eq!(format_amount("1234567.891", 2), "1,234,567.89");
/// assert_eq!(format_amount("100", 4), "100");
/// assert_eq!(format_amount("0.000000000000000001", 4), "0");
/// ```
pub fn format_amount(amount: &str, max_decimals: usize) -> String {
    let (integer_part, decimal_part) = match amount.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (amount, ""),
    };
    let is_plain = !integer_part.is_empty()
        && integer_part.chars().all(|c| c.is_ascii_digit())
        && decimal_part.chars().all(|c| c.is_ascii_digit());
    if !is_plain {
        return amount.to_string();
    }

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();

    let shown = &decimal_part[..decimal_part.len().min(max_decimals)];
    let shown = shown.trim_end_matches('0');
    if shown.is_empty() {
        integer_with_commas
    } else {
        format!("{}.{}", integer_with_commas, shown)
    }
}

/// Balance line for the panel, e.g. `"2.5 ETH"`. A missing balance shows `-`.
pub fn format_balance(balance: Option<&str>, symbol: &str) -> String {
    match balance {
        Some(amount) => format!("{} {}", format_amount(amount, 6), symbol),
        None => format!("- {}", symbol),
    }
}

/// Shorten a transaction hash for display (`0x88df01…13944b`).
pub fn format_tx_hash(hash: &str) -> String {
    shared::format_hex_address(hash, 6)
}
