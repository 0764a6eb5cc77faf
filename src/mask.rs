//! PCI-DSS compliant masking for card form data.
//!
//! Form values pass through logs and `Debug` output while the user is still
//! typing. Everything that leaves the form for display or logging goes through
//! these functions first.
//!
//! PCI-DSS allows displaying only the last 4 digits of a card number. The CVC
//! must never be shown at all.

/// Masks a card number showing only the last 4 digits.
///
/// Non-digit characters are ignored. Numbers with 4 digits or fewer are fully
/// masked, since the last four would be the whole number.
///
/// Format: `****-****-****-1234`
///
/// # Example
///
/// ```
/// use card_form::mask::mask_card_number;
///
/// assert_eq!(mask_card_number("4111 1111 1111 1111"), "****-****-****-1111");
/// assert_eq!(mask_card_number("4111"), "****");
/// ```
pub fn mask_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4));

    // Add masked portion with grouping
    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    // Add separator before last 4 if needed
    if masked_count % 4 == 0 {
        result.push('-');
    }

    for &c in &digits[len - 4..] {
        result.push(c);
    }

    result
}

/// Masks a CVC completely, one `*` per character.
#[inline]
pub fn mask_cvc(input: &str) -> String {
    "*".repeat(input.chars().count())
}

/// Extracts the last 4 digits of a card number.
///
/// Returns an empty string if there are fewer than 4 digits.
#[inline]
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_16_digits() {
        assert_eq!(mask_card_number("4111111111111111"), "****-****-****-1111");
        assert_eq!(
            mask_card_number("4111 1111 1111 1234"),
            "****-****-****-1234"
        );
    }

    #[test]
    fn test_mask_partial_number() {
        assert_eq!(mask_card_number("41111"), "*1111");
        assert_eq!(mask_card_number("411111111"), "****-*1111");
    }

    #[test]
    fn test_mask_short_number() {
        assert_eq!(mask_card_number(""), "");
        assert_eq!(mask_card_number("41"), "**");
        assert_eq!(mask_card_number("4111"), "****");
    }

    #[test]
    fn test_mask_never_leaks_full_number() {
        let masked = mask_card_number("5500000000000004");
        assert!(!masked.contains("5500000000000004"));
        assert!(masked.ends_with("0004"));
    }

    #[test]
    fn test_mask_cvc() {
        assert_eq!(mask_cvc("123"), "***");
        assert_eq!(mask_cvc("1234"), "****");
        assert_eq!(mask_cvc(""), "");
    }

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("4111 1111 1111 1234"), "1234");
        assert_eq!(last_four("123"), "");
    }
}
