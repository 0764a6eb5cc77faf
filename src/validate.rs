//! Submit-time validation for the card form.
//!
//! [`validate_form`] runs every check, in form order, and collects a
//! [`FieldError`] for each one that fails. There is no short-circuiting: a
//! form with a bad number and a bad CVC reports both.
//!
//! | Order | Field | Rule |
//! |-------|-------|------|
//! | 1 | card number | exactly 16 digits once whitespace is removed |
//! | 2 | holder name | at least 2 characters once trimmed |
//! | 3 | month | a number from 1 to 12 |
//! | 4 | year | exactly 2 digits |
//! | 5 | CVC | 4 digits for American Express, 3 otherwise |

use crate::detect::detect_network;
use crate::error::FieldError;
use crate::form::{Field, FormState, MAX_CARD_DIGITS, MAX_YEAR_DIGITS, MIN_HOLDER_NAME_CHARS};
use crate::network::cvc_length_for;

/// The outcome of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Returns true if no check failed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the failed checks in form order.
    #[inline]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the user-facing messages in form order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::message).collect()
    }

    /// Returns the error for a single field, if its check failed.
    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Consumes the report, returning the errors.
    #[inline]
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

#[inline]
fn all_ascii_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Validates a complete card form.
///
/// # Example
///
/// ```
/// use card_form::{validate_form, FormState};
///
/// let state = FormState::new()
///     .with_card_number("4111 1111 1111 1111")
///     .with_holder_name("Jane Doe")
///     .with_month("05")
///     .with_year("27")
///     .with_cvc("123");
/// assert!(validate_form(&state).is_valid());
///
/// let state = state.with_cvc("1234");
/// let report = validate_form(&state);
/// assert_eq!(report.messages(), vec!["CVC must have 3 digits"]);
/// ```
pub fn validate_form(state: &FormState) -> ValidationReport {
    let mut errors = Vec::new();

    let number: String = state
        .card_number()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let number_length = number.chars().count();
    if number_length != MAX_CARD_DIGITS || !all_ascii_digits(&number) {
        errors.push(FieldError::CardNumberLength {
            length: number_length,
        });
    }

    let name_length = state.holder_name().trim().chars().count();
    if name_length < MIN_HOLDER_NAME_CHARS {
        errors.push(FieldError::HolderNameTooShort {
            length: name_length,
        });
    }

    if !is_valid_month(state.month()) {
        errors.push(FieldError::InvalidMonth);
    }

    let year_length = state.year().chars().count();
    if year_length != MAX_YEAR_DIGITS || !all_ascii_digits(state.year()) {
        errors.push(FieldError::YearLength {
            length: year_length,
        });
    }

    let expected = cvc_length_for(detect_network(&number));
    let cvc_length = state.cvc().chars().count();
    if cvc_length != expected || !all_ascii_digits(state.cvc()) {
        errors.push(FieldError::CvcLength {
            expected,
            length: cvc_length,
        });
    }

    ValidationReport { errors }
}

/// Returns true if `month` is a number from 1 to 12.
///
/// A single digit counts, so `"5"` and `"05"` are both May.
///
/// # Example
///
/// ```
/// use card_form::validate::is_valid_month;
///
/// assert!(is_valid_month("5"));
/// assert!(is_valid_month("12"));
/// assert!(!is_valid_month("0"));
/// assert!(!is_valid_month(""));
/// ```
pub fn is_valid_month(month: &str) -> bool {
    if month.is_empty() || !all_ascii_digits(month) {
        return false;
    }
    month
        .parse::<u32>()
        .map(|m| (1..=12).contains(&m))
        .unwrap_or(false)
}

/// Quickly checks if a form would be accepted.
#[inline]
pub fn is_form_valid(state: &FormState) -> bool {
    validate_form(state).is_valid()
}
