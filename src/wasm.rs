//! WebAssembly bindings for the card form.
//!
//! This module is the browser side of the adapter boundary: the page keeps
//! its own event listeners and calls these functions with input values.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { CardFormSession } from 'card_form';
//!
//! await init();
//!
//! const form = new CardFormSession();
//!
//! numberInput.addEventListener('input', () => {
//!     const update = form.input_card_number(numberInput.value);
//!     numberInput.value = update.value;
//!     update.groups.forEach((g, i) => groupSpans[i].textContent = g);
//!     logo.src = update.asset_id;
//! });
//!
//! formElement.addEventListener('submit', (e) => {
//!     e.preventDefault();
//!     const result = form.submit();
//!     if (!result.valid) {
//!         result.errors.forEach((msg) => alert(msg));
//!     }
//! });
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::network::{network_id, CardNetwork};
use crate::session::SubmitOutcome;
use crate::validate::ValidationReport;
use crate::{CardForm, FormState};

fn parse_network(network: Option<String>) -> Option<CardNetwork> {
    network.and_then(|id| id.parse().ok())
}

fn string_array<I, S>(items: I) -> js_sys::Array
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| JsValue::from_str(s.as_ref()))
        .collect()
}

/// Formats a card number: digits only, at most 16, grouped by 4.
#[wasm_bindgen]
pub fn format_card_number(value: &str) -> String {
    crate::format::format_card_number(value)
}

/// Formats the expiry month, clamping two-digit values into 01-12.
#[wasm_bindgen]
pub fn format_month(value: &str) -> String {
    crate::format::format_month(value)
}

/// Formats the expiry year (2 digits).
#[wasm_bindgen]
pub fn format_year(value: &str) -> String {
    crate::format::format_year(value)
}

/// Formats the CVC for a network id (`"amex"` allows 4 digits).
#[wasm_bindgen]
pub fn format_cvc(value: &str, network: Option<String>) -> String {
    crate::format::format_cvc(value, parse_network(network))
}

/// Formats the holder name: letters and spaces, at most 30 characters.
#[wasm_bindgen]
pub fn format_holder_name(value: &str) -> String {
    crate::format::format_holder_name(value)
}

/// Detects the card network, returning its id or `"unknown"`.
///
/// # Example
/// ```javascript
/// detect_network("4111");  // "visa"
/// ```
#[wasm_bindgen]
pub fn detect_network(card_number: &str) -> String {
    crate::detect::detect_network_id(card_number).to_string()
}

/// Returns the 4 digit groups for the card face.
#[wasm_bindgen]
pub fn project_card_number(value: &str) -> js_sys::Array {
    string_array(crate::preview::project_card_number(value))
}

/// Returns the name line for the card face.
#[wasm_bindgen]
pub fn project_holder_name(value: &str) -> String {
    crate::preview::project_holder_name(value)
}

/// Returns the `MM/YY` line for the card face.
#[wasm_bindgen]
pub fn project_expiry(month: &str, year: &str) -> String {
    crate::preview::project_expiry(month, year)
}

/// Returns the CVC for the back of the card.
#[wasm_bindgen]
pub fn project_cvc(value: &str) -> String {
    crate::preview::project_cvc(value)
}

/// Returns the logo asset for a network id.
#[wasm_bindgen]
pub fn project_network_asset(network: Option<String>) -> String {
    crate::preview::project_network_asset(parse_network(network)).to_string()
}

/// Result of form validation, returned to JavaScript.
#[wasm_bindgen]
pub struct FormValidation {
    valid: bool,
    errors: Vec<String>,
    fields: Vec<String>,
}

impl From<&ValidationReport> for FormValidation {
    fn from(report: &ValidationReport) -> Self {
        Self {
            valid: report.is_valid(),
            errors: report.messages(),
            fields: report
                .errors()
                .iter()
                .map(|e| e.field().name().to_string())
                .collect(),
        }
    }
}

#[wasm_bindgen]
impl FormValidation {
    /// Whether every check passed.
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Error messages in form order.
    #[wasm_bindgen(getter)]
    pub fn errors(&self) -> js_sys::Array {
        string_array(&self.errors)
    }

    /// Field names of the errors, parallel to `errors`.
    #[wasm_bindgen(getter)]
    pub fn fields(&self) -> js_sys::Array {
        string_array(&self.fields)
    }
}

/// Validates a complete form.
///
/// # Example
/// ```javascript
/// const result = validate_form("4111 1111 1111 1111", "Jane Doe", "05", "27", "123");
/// console.log(result.valid);  // true
/// ```
#[wasm_bindgen]
pub fn validate_form(
    card_number: &str,
    holder_name: &str,
    month: &str,
    year: &str,
    cvc: &str,
) -> FormValidation {
    let state = FormState::new()
        .with_card_number(card_number)
        .with_holder_name(holder_name)
        .with_month(month)
        .with_year(year)
        .with_cvc(cvc);
    FormValidation::from(&crate::validate::validate_form(&state))
}

/// Result of a card number input event.
#[wasm_bindgen]
pub struct NumberUpdate {
    value: String,
    network: String,
    groups: Vec<String>,
    asset_id: String,
}

#[wasm_bindgen]
impl NumberUpdate {
    /// Formatted number to write back into the input.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.value.clone()
    }

    /// Detected network id, or `"unknown"`.
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> String {
        self.network.clone()
    }

    /// The 4 digit groups for the card face.
    #[wasm_bindgen(getter)]
    pub fn groups(&self) -> js_sys::Array {
        string_array(&self.groups)
    }

    /// Logo asset for the detected network.
    #[wasm_bindgen(getter)]
    pub fn asset_id(&self) -> String {
        self.asset_id.clone()
    }
}

/// Result of any other field input event.
#[wasm_bindgen]
pub struct FieldUpdate {
    value: String,
    display: String,
}

#[wasm_bindgen]
impl FieldUpdate {
    /// Formatted value to write back into the input.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.value.clone()
    }

    /// Text for the card face.
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.display.clone()
    }
}

/// An interactive card form for browser glue code.
#[wasm_bindgen]
pub struct CardFormSession {
    inner: CardForm,
}

#[wasm_bindgen]
impl CardFormSession {
    /// Creates an empty form.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: CardForm::new(),
        }
    }

    /// Handles a card number input event.
    pub fn input_card_number(&mut self, raw: &str) -> NumberUpdate {
        let update = self.inner.input_card_number(raw);
        NumberUpdate {
            network: network_id(update.network).to_string(),
            groups: update.groups.to_vec(),
            asset_id: update.asset_id.to_string(),
            value: update.value,
        }
    }

    /// Handles a holder name input event.
    pub fn input_holder_name(&mut self, raw: &str) -> FieldUpdate {
        let update = self.inner.input_holder_name(raw);
        FieldUpdate {
            value: update.value,
            display: update.display,
        }
    }

    /// Handles a month input event; `display` is the `MM/YY` line.
    pub fn input_month(&mut self, raw: &str) -> FieldUpdate {
        let update = self.inner.input_month(raw);
        FieldUpdate {
            value: update.value,
            display: update.display,
        }
    }

    /// Handles a year input event; `display` is the `MM/YY` line.
    pub fn input_year(&mut self, raw: &str) -> FieldUpdate {
        let update = self.inner.input_year(raw);
        FieldUpdate {
            value: update.value,
            display: update.display,
        }
    }

    /// Handles a CVC input event.
    pub fn input_cvc(&mut self, raw: &str) -> FieldUpdate {
        let update = self.inner.input_cvc(raw);
        FieldUpdate {
            value: update.value,
            display: update.display,
        }
    }

    /// Validates the form, clearing it on success.
    ///
    /// After a valid submit the page should clear its inputs and render the
    /// blank card.
    pub fn submit(&mut self) -> FormValidation {
        match self.inner.submit() {
            SubmitOutcome::Accepted { .. } => FormValidation {
                valid: true,
                errors: Vec::new(),
                fields: Vec::new(),
            },
            SubmitOutcome::Rejected(report) => FormValidation::from(&report),
        }
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl Default for CardFormSession {
    fn default() -> Self {
        Self::new()
    }
}
