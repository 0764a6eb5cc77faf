//! Error types for card form validation.
//!
//! Validation never stops at the first problem. Each failed check produces
//! one [`FieldError`], and the user sees all of them at once.

use std::fmt;

use crate::form::Field;

/// A single failed form check.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The card number does not have exactly 16 digits.
    CardNumberLength {
        /// Characters left after removing whitespace.
        length: usize,
    },

    /// The trimmed holder name is shorter than 2 characters.
    HolderNameTooShort {
        /// Characters in the trimmed name.
        length: usize,
    },

    /// The month is empty, not a number, or outside 1-12.
    InvalidMonth,

    /// The year is not exactly 2 digits.
    YearLength {
        /// Characters in the year field.
        length: usize,
    },

    /// The CVC length does not match the detected network.
    CvcLength {
        /// Digits required by the network.
        expected: usize,
        /// Characters in the CVC field.
        length: usize,
    },
}

impl FieldError {
    /// Returns the field this error belongs to.
    #[inline]
    pub const fn field(&self) -> Field {
        match self {
            Self::CardNumberLength { .. } => Field::CardNumber,
            Self::HolderNameTooShort { .. } => Field::HolderName,
            Self::InvalidMonth => Field::Month,
            Self::YearLength { .. } => Field::Year,
            Self::CvcLength { .. } => Field::Cvc,
        }
    }

    /// Returns the user-facing message.
    #[inline]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardNumberLength { .. } => write!(f, "card number must have 16 digits"),
            Self::HolderNameTooShort { .. } => {
                write!(f, "holder name must have at least 2 characters")
            }
            Self::InvalidMonth => write!(f, "invalid expiration month"),
            Self::YearLength { .. } => write!(f, "expiration year must have 2 digits"),
            Self::CvcLength { expected, .. } => write!(f, "CVC must have {} digits", expected),
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FieldError::CardNumberLength { length: 12 }.to_string(),
            "card number must have 16 digits"
        );
        assert_eq!(
            FieldError::HolderNameTooShort { length: 1 }.to_string(),
            "holder name must have at least 2 characters"
        );
        assert_eq!(
            FieldError::InvalidMonth.to_string(),
            "invalid expiration month"
        );
        assert_eq!(
            FieldError::YearLength { length: 1 }.to_string(),
            "expiration year must have 2 digits"
        );
        assert_eq!(
            FieldError::CvcLength {
                expected: 4,
                length: 3
            }
            .to_string(),
            "CVC must have 4 digits"
        );
    }

    #[test]
    fn test_error_field() {
        assert_eq!(FieldError::InvalidMonth.field(), Field::Month);
        assert_eq!(
            FieldError::CvcLength {
                expected: 3,
                length: 0
            }
            .field(),
            Field::Cvc
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldError>();
    }
}
