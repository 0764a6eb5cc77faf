//! Card form state.
//!
//! [`FormState`] holds the five raw field values exactly as the adapter last
//! wrote them. The card network is never stored; it is derived from the card
//! number whenever it is needed.
//!
//! # Security
//!
//! - Field buffers are wiped with `zeroize` on overwrite, reset, and drop
//! - `Debug` shows the card number masked and the CVC as `*`s

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::detect::detect_network;
use crate::mask::{mask_card_number, mask_cvc};
use crate::network::CardNetwork;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 16;

/// Number of digits per display group.
pub const CARD_GROUP_SIZE: usize = 4;

/// Number of digit groups on the card preview.
pub const PREVIEW_GROUPS: usize = MAX_CARD_DIGITS / CARD_GROUP_SIZE;

/// Maximum number of characters in the holder name.
pub const MAX_HOLDER_NAME_CHARS: usize = 30;

/// Minimum number of characters in the trimmed holder name for submission.
pub const MIN_HOLDER_NAME_CHARS: usize = 2;

/// Number of digits in the expiry month field.
pub const MAX_MONTH_DIGITS: usize = 2;

/// Number of digits in the expiry year field.
pub const MAX_YEAR_DIGITS: usize = 2;

/// The five card form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// The card number.
    CardNumber,
    /// The cardholder name.
    HolderName,
    /// The expiry month.
    Month,
    /// The expiry year.
    Year,
    /// The card verification code.
    Cvc,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 5] = [
        Field::CardNumber,
        Field::HolderName,
        Field::Month,
        Field::Year,
        Field::Cvc,
    ];

    /// Returns the snake_case field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CardNumber => "card_number",
            Self::HolderName => "holder_name",
            Self::Month => "month",
            Self::Year => "year",
            Self::Cvc => "cvc",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "card_number" | "number" => Ok(Self::CardNumber),
            "holder_name" | "name" => Ok(Self::HolderName),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "cvc" | "cvv" => Ok(Self::Cvc),
            _ => Err(format!("unknown field '{}'", s)),
        }
    }
}

/// The current values of the card form.
///
/// Values are stored as given; run them through the
/// [formatters](crate::format) first if they come from raw input.
/// [`CardForm`](crate::CardForm) does that for every input event.
///
/// # Example
///
/// ```
/// use card_form::{FormState, CardNetwork};
///
/// let state = FormState::new()
///     .with_card_number("3782 822463 10005")
///     .with_cvc("1234");
///
/// assert_eq!(state.network(), Some(CardNetwork::Amex));
/// assert!(!format!("{:?}", state).contains("1234"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormState {
    card_number: String,
    holder_name: String,
    month: String,
    year: String,
    cvc: String,
}

impl FormState {
    /// Creates an empty form.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the card number.
    #[inline]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Returns the holder name.
    #[inline]
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Returns the expiry month.
    #[inline]
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Returns the expiry year.
    #[inline]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns the CVC.
    #[inline]
    pub fn cvc(&self) -> &str {
        &self.cvc
    }

    /// Returns the value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::HolderName => &self.holder_name,
            Field::Month => &self.month,
            Field::Year => &self.year,
            Field::Cvc => &self.cvc,
        }
    }

    /// Replaces the value of a field, wiping the previous value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::CardNumber => &mut self.card_number,
            Field::HolderName => &mut self.holder_name,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
            Field::Cvc => &mut self.cvc,
        };
        slot.zeroize();
        *slot = value.into();
    }

    /// Sets the card number.
    pub fn with_card_number(mut self, value: impl Into<String>) -> Self {
        self.set(Field::CardNumber, value);
        self
    }

    /// Sets the holder name.
    pub fn with_holder_name(mut self, value: impl Into<String>) -> Self {
        self.set(Field::HolderName, value);
        self
    }

    /// Sets the expiry month.
    pub fn with_month(mut self, value: impl Into<String>) -> Self {
        self.set(Field::Month, value);
        self
    }

    /// Sets the expiry year.
    pub fn with_year(mut self, value: impl Into<String>) -> Self {
        self.set(Field::Year, value);
        self
    }

    /// Sets the CVC.
    pub fn with_cvc(mut self, value: impl Into<String>) -> Self {
        self.set(Field::Cvc, value);
        self
    }

    /// Detects the card network from the current card number.
    #[inline]
    pub fn network(&self) -> Option<CardNetwork> {
        detect_network(&self.card_number)
    }

    /// Returns true if every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&f| self.get(f).is_empty())
    }

    /// Wipes every field back to empty.
    #[inline]
    pub fn clear(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("card_number", &mask_card_number(&self.card_number))
            .field("holder_name", &self.holder_name)
            .field("month", &self.month)
            .field("year", &self.year)
            .field("cvc", &mask_cvc(&self.cvc))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState::new()
            .with_card_number("4111 1111 1111 1111")
            .with_holder_name("Jane Doe")
            .with_month("05")
            .with_year("27")
            .with_cvc("123")
    }

    #[test]
    fn test_new_is_empty() {
        assert!(FormState::new().is_empty());
        assert!(!filled().is_empty());
    }

    #[test]
    fn test_accessors() {
        let state = filled();
        assert_eq!(state.card_number(), "4111 1111 1111 1111");
        assert_eq!(state.holder_name(), "Jane Doe");
        assert_eq!(state.month(), "05");
        assert_eq!(state.year(), "27");
        assert_eq!(state.cvc(), "123");
        for field in Field::ALL {
            assert!(!state.get(field).is_empty());
        }
    }

    #[test]
    fn test_set_replaces_value() {
        let mut state = filled();
        state.set(Field::Cvc, "999");
        assert_eq!(state.cvc(), "999");
        state.set(Field::Month, "");
        assert_eq!(state.month(), "");
    }

    #[test]
    fn test_network_is_derived() {
        let mut state = filled();
        assert_eq!(state.network(), Some(CardNetwork::Visa));
        state.set(Field::CardNumber, "3400");
        assert_eq!(state.network(), Some(CardNetwork::Amex));
        state.set(Field::CardNumber, "");
        assert_eq!(state.network(), None);
    }

    #[test]
    fn test_clear() {
        let mut state = filled();
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state, FormState::new());
    }

    #[test]
    fn test_debug_is_masked() {
        let debug = format!("{:?}", filled());
        assert!(!debug.contains("4111 1111 1111 1111"));
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("\"123\""));
        assert!(debug.contains("****-****-****-1111"));
        assert!(debug.contains("Jane Doe"));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::CardNumber.to_string(), "card_number");
        assert_eq!("number".parse::<Field>(), Ok(Field::CardNumber));
        assert_eq!("holder-name".parse::<Field>(), Ok(Field::HolderName));
        assert_eq!("CVV".parse::<Field>(), Ok(Field::Cvc));
        assert!("zip".parse::<Field>().is_err());
    }

    #[test]
    fn test_form_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FormState>();
    }
}
