//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Account identifiers returned by browser wallets are long hex strings
//! (`0x` + 40 hex digits). The site shows them shortened:
//! - [`format_address`] - Keep `prefix_len` leading and `suffix_len` trailing characters
//! - [`truncate_address`] - `format_address` with the site defaults (6 and 4)
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let account = "0x52908400098527886E0F7030069857D2E4169EE7";
//! assert_eq!(truncate_address(account), "0x5290...9EE7");
//! ```

/// Shorten `address` to its first `prefix_len` and last `suffix_len` characters.
///
/// Addresses that would not get shorter are returned unchanged. Lengths are
/// counted in characters, so non-ASCII input never splits a code point.
///
/// ```rust
/// use shared::utils::format_address;
///
/// let account = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(format_address(account, 4, 4), "0x52...9EE7");
/// assert_eq!(format_address("0xabc", 4, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len + 3 {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();
    format!("{}...{}", prefix, suffix)
}

/// [`format_address`] with a 6-character prefix (`0x` plus four digits) and
/// a 4-character suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ACCOUNT, 6, 4), "0x5290...9EE7");
        assert_eq!(format_address(ACCOUNT, 2, 2), "0x...E7");
    }

    #[test]
    fn test_format_address_not_shortened() {
        assert_eq!(format_address("0x12345678", 4, 4), "0x12345678");
        assert_eq!(format_address("", 4, 4), "");
    }

    #[test]
    fn test_format_address_counts_chars() {
        assert_eq!(format_address("ééééééééééééé", 2, 2), "éé...éé");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ACCOUNT), "0x5290...9EE7");
    }
}
