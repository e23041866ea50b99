//! # Shared Utility Functions
//!
//! Display helpers used by the wallet core's log lines and the panel.

/// Abbreviate a hex address to its `0x` prefix, the first `keep` hex digits
/// and the last `keep` hex digits.
///
/// Strings too short to abbreviate, or containing non-ASCII characters, are
/// returned unchanged.
///
/// ```rust
/// use shared::utils::format_hex_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(format_hex_address(addr, 4), "0x5290…9EE7");
/// assert_eq!(format_hex_address("0xAB", 4), "0xAB");
/// ```
pub fn format_hex_address(address: &str, keep: usize) -> String {
    if !address.is_ascii() {
        return address.to_string();
    }

    let (prefix, digits) = match address.strip_prefix("0x") {
        Some(rest) => ("0x", rest),
        None => ("", address),
    };

    if digits.len() <= keep * 2 {
        return address.to_string();
    }

    format!("{}{}…{}", prefix, &digits[..keep], &digits[digits.len() - keep..])
}

/// [`format_hex_address`] with four digits kept on each side.
pub fn short_address(address: &str) -> String {
    format_hex_address(address, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address() {
        let addr = "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe";
        assert_eq!(short_address(addr), "0xde0B…7BAe");
    }

    #[test]
    fn test_without_prefix() {
        assert_eq!(format_hex_address("abcdef0123456789", 2), "ab…89");
    }

    #[test]
    fn test_short_inputs_unchanged() {
        assert_eq!(short_address(""), "");
        assert_eq!(short_address("0x12345678"), "0x12345678");
        assert_eq!(short_address("0xAB..."), "0xAB...");
    }

    #[test]
    fn test_non_ascii_unchanged() {
        assert_eq!(short_address("0xäöüäöüäöüäöü"), "0xäöüäöüäöüäöü");
    }
}
