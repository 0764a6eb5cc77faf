//! Card network detection using prefix matching.
//!
//! Detection walks the [catalog](crate::network::NETWORKS) in priority order
//! and stops at the first network with a matching prefix. It works on partial
//! input, so the network can be shown while the user is still typing.

use crate::network::{all_networks, network_id, CardNetwork};

/// Detects the card network from a (possibly partial) card number.
///
/// Whitespace is removed before matching, so both `"4111 1111"` and
/// `"41111111"` are accepted. Overlapping prefixes are resolved purely by
/// catalog order: anything starting with `4` is Visa, even `4011...`, which is
/// also an Elo prefix.
///
/// # Returns
///
/// `Some(CardNetwork)` if a known network is detected, `None` otherwise.
///
/// # Example
///
/// ```
/// use card_form::detect::detect_network;
/// use card_form::CardNetwork;
///
/// assert_eq!(detect_network("4111 1111 1111 1111"), Some(CardNetwork::Visa));
/// assert_eq!(detect_network("3782"), Some(CardNetwork::Amex));
/// assert_eq!(detect_network("0000"), None);
/// ```
pub fn detect_network(input: &str) -> Option<CardNetwork> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return None;
    }

    all_networks()
        .iter()
        .find(|def| def.matches(&cleaned))
        .map(|def| def.network)
}

/// Detects the card network and returns its identifier, or `"unknown"`.
///
/// # Example
///
/// ```
/// use card_form::detect::detect_network_id;
///
/// assert_eq!(detect_network_id("5500000000000000"), "mastercard");
/// assert_eq!(detect_network_id("0000000000000000"), "unknown");
/// ```
#[inline]
pub fn detect_network_id(input: &str) -> &'static str {
    network_id(detect_network(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_detection() {
        assert_eq!(detect_network("4111111111111111"), Some(CardNetwork::Visa));
        assert_eq!(detect_network("4"), Some(CardNetwork::Visa));
    }

    #[test]
    fn test_mastercard_detection() {
        for prefix in ["51", "52", "53", "54", "55"] {
            assert_eq!(
                detect_network(&format!("{}00000000000000", prefix)),
                Some(CardNetwork::Mastercard)
            );
        }
        assert_eq!(detect_network("5600000000000000"), None);
        // A lone 5 is not enough to decide
        assert_eq!(detect_network("5"), None);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(detect_network("340000000000000"), Some(CardNetwork::Amex));
        assert_eq!(detect_network("378282246310005"), Some(CardNetwork::Amex));
        assert_eq!(detect_network("3500000000000000"), None);
    }

    #[test]
    fn test_elo_detection() {
        assert_eq!(detect_network("5067000000000000"), Some(CardNetwork::Elo));
        assert_eq!(detect_network("5090000000000000"), Some(CardNetwork::Elo));
        assert_eq!(detect_network("6277800000000000"), Some(CardNetwork::Elo));
        assert_eq!(detect_network("6363680000000000"), Some(CardNetwork::Elo));
        assert_eq!(detect_network("5041750000000000"), Some(CardNetwork::Elo));
    }

    #[test]
    fn test_hipercard_detection() {
        assert_eq!(
            detect_network("6062820000000000"),
            Some(CardNetwork::Hipercard)
        );
        assert_eq!(
            detect_network("3841000000000000"),
            Some(CardNetwork::Hipercard)
        );
    }

    #[test]
    fn test_visa_wins_over_elo() {
        // These are Elo prefixes, but Visa comes first in the catalog
        for number in ["4011000000000000", "4312740000000000", "4573930000000000"] {
            assert_eq!(detect_network(number), Some(CardNetwork::Visa));
        }
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(detect_network("4111 1111 1111 1111"), Some(CardNetwork::Visa));
        assert_eq!(detect_network(" 5 5 00"), Some(CardNetwork::Mastercard));
        assert_eq!(detect_network("\t3 7"), Some(CardNetwork::Amex));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(detect_network("0000000000000000"), None);
        assert_eq!(detect_network("9999"), None);
        assert_eq!(detect_network("-4111"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(detect_network(""), None);
        assert_eq!(detect_network("   "), None);
    }

    #[test]
    fn test_network_id() {
        assert_eq!(detect_network_id("4111111111111111"), "visa");
        assert_eq!(detect_network_id("5500000000000000"), "mastercard");
        assert_eq!(detect_network_id("340000000000000"), "amex");
        assert_eq!(detect_network_id("6062820000000000"), "hipercard");
        assert_eq!(detect_network_id("0000000000000000"), "unknown");
    }
}
