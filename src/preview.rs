//! Card preview projection.
//!
//! The virtual card mirrors the form while the user types. Every projection
//! has a placeholder for an empty field, so the card never shows blanks.
//!
//! # Example
//!
//! ```
//! use card_form::preview::{project_card_number, project_expiry, CardPreview};
//!
//! assert_eq!(project_card_number("4111 11"), ["4111", "1100", "0000", "0000"]);
//! assert_eq!(project_expiry("5", ""), "5/00");
//!
//! let blank = CardPreview::default();
//! assert_eq!(blank.holder_name, "Cardholder Name");
//! ```

use crate::form::{FormState, CARD_GROUP_SIZE, PREVIEW_GROUPS};
use crate::network::{CardNetwork, DEFAULT_ASSET_ID};

/// Placeholder for an empty digit group.
pub const PLACEHOLDER_GROUP: &str = "0000";

/// Placeholder for an empty holder name.
pub const PLACEHOLDER_HOLDER_NAME: &str = "Cardholder Name";

/// Placeholder for an empty month or year.
pub const PLACEHOLDER_EXPIRY_PART: &str = "00";

/// Placeholder for an empty CVC.
pub const PLACEHOLDER_CVC: &str = "000";

/// Projects the card number onto the 4 digit groups of the card face.
///
/// Whitespace is removed and the rest is cut into 4-character windows. A
/// partially filled window is padded with `'0'` on the right; an empty one
/// shows `"0000"`. Characters past the sixteenth are not shown.
pub fn project_card_number(value: &str) -> [String; PREVIEW_GROUPS] {
    let chars: Vec<char> = value.chars().filter(|c| !c.is_whitespace()).collect();

    std::array::from_fn(|index| {
        let start = index * CARD_GROUP_SIZE;
        if start >= chars.len() {
            return PLACEHOLDER_GROUP.to_string();
        }
        let end = (start + CARD_GROUP_SIZE).min(chars.len());
        let mut group: String = chars[start..end].iter().collect();
        for _ in end - start..CARD_GROUP_SIZE {
            group.push('0');
        }
        group
    })
}

/// Projects the holder name: the trimmed name, or `"Cardholder Name"`.
pub fn project_holder_name(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        PLACEHOLDER_HOLDER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Projects the expiry as `MM/YY`, with `"00"` standing in for an empty part.
pub fn project_expiry(month: &str, year: &str) -> String {
    format!(
        "{}/{}",
        or_placeholder(month, PLACEHOLDER_EXPIRY_PART),
        or_placeholder(year, PLACEHOLDER_EXPIRY_PART)
    )
}

/// Projects the CVC: the value, or `"000"`.
#[inline]
pub fn project_cvc(value: &str) -> String {
    or_placeholder(value, PLACEHOLDER_CVC).to_string()
}

/// Returns the asset to show for a network, or the neutral card asset.
#[inline]
pub fn project_network_asset(network: Option<CardNetwork>) -> &'static str {
    network.map_or(DEFAULT_ASSET_ID, |n| n.asset_id())
}

#[inline]
fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Everything the card face shows.
///
/// `CardPreview::default()` is the blank card shown before any input and
/// after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardPreview {
    /// The 4 digit groups.
    pub number_groups: [String; PREVIEW_GROUPS],
    /// The holder name line.
    pub holder_name: String,
    /// The `MM/YY` line.
    pub expiry: String,
    /// The CVC on the back of the card.
    pub cvc: String,
    /// The detected network, if any.
    pub network: Option<CardNetwork>,
    /// The network logo asset.
    pub asset_id: &'static str,
}

impl CardPreview {
    /// Projects a whole form onto the card face.
    pub fn from_form(state: &FormState) -> Self {
        let network = state.network();
        Self {
            number_groups: project_card_number(state.card_number()),
            holder_name: project_holder_name(state.holder_name()),
            expiry: project_expiry(state.month(), state.year()),
            cvc: project_cvc(state.cvc()),
            network,
            asset_id: project_network_asset(network),
        }
    }

    /// Returns the digit groups joined by single spaces.
    pub fn number_line(&self) -> String {
        self.number_groups.join(" ")
    }
}

impl Default for CardPreview {
    fn default() -> Self {
        Self {
            number_groups: std::array::from_fn(|_| PLACEHOLDER_GROUP.to_string()),
            holder_name: PLACEHOLDER_HOLDER_NAME.to_string(),
            expiry: project_expiry("", ""),
            cvc: PLACEHOLDER_CVC.to_string(),
            network: None,
            asset_id: DEFAULT_ASSET_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_card_number_partial() {
        assert_eq!(project_card_number("1234"), ["1234", "0000", "0000", "0000"]);
        assert_eq!(project_card_number("1234 5"), ["1234", "5000", "0000", "0000"]);
        assert_eq!(
            project_card_number("4111 1111 1111 11"),
            ["4111", "1111", "1111", "1100"]
        );
    }

    #[test]
    fn test_project_card_number_empty() {
        assert_eq!(project_card_number(""), ["0000", "0000", "0000", "0000"]);
        assert_eq!(project_card_number("   "), ["0000", "0000", "0000", "0000"]);
    }

    #[test]
    fn test_project_card_number_full() {
        assert_eq!(
            project_card_number("4111 1111 1111 1234"),
            ["4111", "1111", "1111", "1234"]
        );
    }

    #[test]
    fn test_project_card_number_ignores_overflow() {
        assert_eq!(
            project_card_number("11112222333344445555"),
            ["1111", "2222", "3333", "4444"]
        );
    }

    #[test]
    fn test_project_card_number_always_four_by_four() {
        for len in 0..=20 {
            let input = "7".repeat(len);
            let groups = project_card_number(&input);
            assert!(groups.iter().all(|g| g.chars().count() == 4));
        }
    }

    #[test]
    fn test_project_holder_name() {
        assert_eq!(project_holder_name(""), "Cardholder Name");
        assert_eq!(project_holder_name("   "), "Cardholder Name");
        assert_eq!(project_holder_name(" Jane Doe "), "Jane Doe");
    }

    #[test]
    fn test_project_expiry() {
        assert_eq!(project_expiry("", ""), "00/00");
        assert_eq!(project_expiry("05", ""), "05/00");
        assert_eq!(project_expiry("", "27"), "00/27");
        assert_eq!(project_expiry("1", "2"), "1/2");
        assert_eq!(project_expiry("05", "27"), "05/27");
    }

    #[test]
    fn test_project_cvc() {
        assert_eq!(project_cvc(""), "000");
        assert_eq!(project_cvc("12"), "12");
        assert_eq!(project_cvc("1234"), "1234");
    }

    #[test]
    fn test_project_network_asset() {
        assert_eq!(project_network_asset(None), DEFAULT_ASSET_ID);
        assert_eq!(project_network_asset(Some(CardNetwork::Visa)), "visa.svg");
        assert_eq!(project_network_asset(Some(CardNetwork::Elo)), "elo-logo.svg");
    }

    #[test]
    fn test_default_preview() {
        let preview = CardPreview::default();
        assert_eq!(preview.number_line(), "0000 0000 0000 0000");
        assert_eq!(preview.holder_name, "Cardholder Name");
        assert_eq!(preview.expiry, "00/00");
        assert_eq!(preview.cvc, "000");
        assert_eq!(preview.network, None);
        assert_eq!(preview.asset_id, "card-logo.svg");
    }

    #[test]
    fn test_preview_from_empty_form_is_default() {
        assert_eq!(CardPreview::from_form(&FormState::new()), CardPreview::default());
    }

    #[test]
    fn test_preview_from_form() {
        let state = FormState::new()
            .with_card_number("3782 8224")
            .with_holder_name("John Roe")
            .with_month("11")
            .with_cvc("12");
        let preview = CardPreview::from_form(&state);
        assert_eq!(preview.number_groups, ["3782", "8224", "0000", "0000"]);
        assert_eq!(preview.holder_name, "John Roe");
        assert_eq!(preview.expiry, "11/00");
        assert_eq!(preview.cvc, "12");
        assert_eq!(preview.network, Some(CardNetwork::Amex));
        assert_eq!(preview.asset_id, "amex-logo.svg");
    }
}
