//! Live formatting for the card form fields.
//!
//! Every formatter here runs on each keystroke: it takes whatever the input
//! currently holds and returns the value to write back. They are total (any
//! string in, a string out), return `""` for `""`, and are idempotent, so
//! writing the output back and formatting again changes nothing.
//!
//! # Example
//!
//! ```
//! use card_form::format::{format_card_number, format_month, format_cvc};
//! use card_form::CardNetwork;
//!
//! assert_eq!(format_card_number("4111-1111-1111-1111"), "4111 1111 1111 1111");
//! assert_eq!(format_month("13"), "12");
//! assert_eq!(format_cvc("12345", Some(CardNetwork::Amex)), "1234");
//! ```

use crate::form::{
    CARD_GROUP_SIZE, MAX_CARD_DIGITS, MAX_HOLDER_NAME_CHARS, MAX_MONTH_DIGITS, MAX_YEAR_DIGITS,
};
use crate::network::{cvc_length_for, CardNetwork};

/// Strips all formatting from a value, leaving only ASCII digits.
///
/// # Example
///
/// ```
/// use card_form::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// ```
#[inline]
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keeps at most `max` ASCII digits of `input`.
#[inline]
fn digits_truncated(input: &str, max: usize) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// Formats a card number as the user types.
///
/// Non-digits are dropped, the number is cut at 16 digits, and a single space
/// goes between every group of 4. The last group may be shorter.
///
/// # Example
///
/// ```
/// use card_form::format::format_card_number;
///
/// assert_eq!(format_card_number("4111"), "4111");
/// assert_eq!(format_card_number("41111"), "4111 1");
/// assert_eq!(format_card_number("4111111111111111999"), "4111 1111 1111 1111");
/// ```
pub fn format_card_number(input: &str) -> String {
    let digits = digits_truncated(input, MAX_CARD_DIGITS);

    let mut result = String::with_capacity(digits.len() + digits.len() / CARD_GROUP_SIZE);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % CARD_GROUP_SIZE == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Formats the expiry month.
///
/// Keeps up to 2 digits. Once both digits are typed the month is clamped:
/// anything above 12 becomes `"12"` and `"00"` becomes `"01"`. A single digit
/// is left alone, including `"0"`, since the user may still be typing `"05"`.
///
/// # Example
///
/// ```
/// use card_form::format::format_month;
///
/// assert_eq!(format_month("0"), "0");
/// assert_eq!(format_month("00"), "01");
/// assert_eq!(format_month("07"), "07");
/// assert_eq!(format_month("13"), "12");
/// assert_eq!(format_month("1/"), "1");
/// ```
pub fn format_month(input: &str) -> String {
    let digits = digits_truncated(input, MAX_MONTH_DIGITS);

    if digits.len() == MAX_MONTH_DIGITS {
        // Two ASCII digits always parse
        let month: u8 = digits.parse().unwrap_or(0);
        if month > 12 {
            return "12".to_string();
        }
        if month < 1 {
            return "01".to_string();
        }
    }

    digits
}

/// Formats the expiry year: up to 2 digits, no range check.
///
/// # Example
///
/// ```
/// use card_form::format::format_year;
///
/// assert_eq!(format_year("2027"), "20");
/// assert_eq!(format_year("'27"), "27");
/// ```
#[inline]
pub fn format_year(input: &str) -> String {
    digits_truncated(input, MAX_YEAR_DIGITS)
}

/// Formats the CVC for the given network.
///
/// American Express allows 4 digits; any other network, or no network at all,
/// allows 3.
///
/// # Example
///
/// ```
/// use card_form::format::format_cvc;
/// use card_form::CardNetwork;
///
/// assert_eq!(format_cvc("1234", Some(CardNetwork::Visa)), "123");
/// assert_eq!(format_cvc("1234", Some(CardNetwork::Amex)), "1234");
/// assert_eq!(format_cvc("1a2b", None), "12");
/// ```
#[inline]
pub fn format_cvc(input: &str, network: Option<CardNetwork>) -> String {
    digits_truncated(input, cvc_length_for(network))
}

/// Returns true for characters allowed in the holder name.
///
/// ASCII letters, whitespace, and the Latin-1 block from `À` (U+00C0) to
/// `ÿ` (U+00FF).
#[inline]
pub fn is_holder_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{C0}'..='\u{FF}').contains(&c) || c.is_whitespace()
}

/// Formats the holder name.
///
/// Drops every character that is not a letter or whitespace and keeps at most
/// 30 characters. Case and inner spacing are preserved.
///
/// # Example
///
/// ```
/// use card_form::format::format_holder_name;
///
/// assert_eq!(format_holder_name("Jo3hn_Doe!!"), "JohnDoe");
/// assert_eq!(format_holder_name("José Müller"), "José Müller");
/// ```
pub fn format_holder_name(input: &str) -> String {
    input
        .chars()
        .filter(|&c| is_holder_name_char(c))
        .take(MAX_HOLDER_NAME_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_card_number_groups() {
        assert_eq!(format_card_number("4"), "4");
        assert_eq!(format_card_number("4111"), "4111");
        assert_eq!(format_card_number("41111"), "4111 1");
        assert_eq!(format_card_number("411111111"), "4111 1111 1");
        assert_eq!(
            format_card_number("4111111111111111"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_format_card_number_truncates() {
        assert_eq!(
            format_card_number("41111111111111112222"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_format_card_number_strips() {
        assert_eq!(
            format_card_number("4111-1111.1111/1111"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number("abc"), "");
        assert_eq!(format_card_number("  4 1 1 "), "411");
    }

    #[test]
    fn test_format_card_number_no_trailing_space() {
        assert_eq!(format_card_number("41111111 "), "4111 1111");
        assert_eq!(format_card_number("4111 "), "4111");
    }

    #[test]
    fn test_format_card_number_idempotent() {
        let once = format_card_number("4111-1111-1111-11");
        assert_eq!(format_card_number(&once), once);
    }

    #[test]
    fn test_format_card_number_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not card digits
        assert_eq!(format_card_number("٤١١١"), "");
    }

    #[test]
    fn test_format_month_clamps() {
        assert_eq!(format_month("13"), "12");
        assert_eq!(format_month("99"), "12");
        assert_eq!(format_month("00"), "01");
        assert_eq!(format_month("12"), "12");
        assert_eq!(format_month("01"), "01");
    }

    #[test]
    fn test_format_month_partial_input() {
        assert_eq!(format_month("1"), "1");
        assert_eq!(format_month("0"), "0");
        assert_eq!(format_month("9"), "9");
        assert_eq!(format_month(""), "");
    }

    #[test]
    fn test_format_month_truncates_first() {
        // Truncation to 2 digits happens before clamping
        assert_eq!(format_month("123"), "12");
        assert_eq!(format_month("0012"), "01");
        assert_eq!(format_month("1a3"), "12");
    }

    #[test]
    fn test_format_year() {
        assert_eq!(format_year("27"), "27");
        assert_eq!(format_year("2027"), "20");
        assert_eq!(format_year("00"), "00");
        assert_eq!(format_year("y2"), "2");
        assert_eq!(format_year(""), "");
    }

    #[test]
    fn test_format_cvc() {
        assert_eq!(format_cvc("123", Some(CardNetwork::Visa)), "123");
        assert_eq!(format_cvc("1234", Some(CardNetwork::Mastercard)), "123");
        assert_eq!(format_cvc("1234", Some(CardNetwork::Amex)), "1234");
        assert_eq!(format_cvc("12345", Some(CardNetwork::Amex)), "1234");
        assert_eq!(format_cvc("1234", None), "123");
        assert_eq!(format_cvc("a1-2", Some(CardNetwork::Elo)), "12");
        assert_eq!(format_cvc("", Some(CardNetwork::Amex)), "");
    }

    #[test]
    fn test_format_holder_name_strips() {
        assert_eq!(format_holder_name("Jo3hn_Doe!!"), "JohnDoe");
        assert_eq!(format_holder_name("Jane Doe"), "Jane Doe");
        assert_eq!(format_holder_name("O'Brien-Smith"), "OBrienSmith");
        assert_eq!(format_holder_name("1234"), "");
    }

    #[test]
    fn test_format_holder_name_accents() {
        assert_eq!(format_holder_name("Ãngela Çésar"), "Ãngela Çésar");
        assert_eq!(format_holder_name("ÿÀ"), "ÿÀ");
        // Outside Latin-1
        assert_eq!(format_holder_name("Łukasz"), "ukasz");
        assert_eq!(format_holder_name("李"), "");
    }

    #[test]
    fn test_format_holder_name_truncates() {
        let long = "A".repeat(40);
        assert_eq!(format_holder_name(&long).chars().count(), 30);

        let accented = "é".repeat(40);
        assert_eq!(format_holder_name(&accented), "é".repeat(30));
    }

    #[test]
    fn test_format_holder_name_keeps_spacing() {
        assert_eq!(format_holder_name("  Jane  Doe "), "  Jane  Doe ");
    }

    #[test]
    fn test_strip_formatting() {
        assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
        assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
        assert_eq!(strip_formatting(""), "");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_month(""), "");
        assert_eq!(format_year(""), "");
        assert_eq!(format_cvc("", None), "");
        assert_eq!(format_holder_name(""), "");
    }
}
