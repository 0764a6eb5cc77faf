//! # card_form
//!
//! Credit card form core for Rust: live field formatting, card network
//! detection, a virtual card preview, and submit-time validation.
//!
//! The crate holds no UI code. A thin adapter (browser glue, CLI, HTTP
//! service) passes raw field values in and renders what comes back.
//!
//! ## Features
//!
//! - As-you-type formatting for number, name, month, year and CVC
//! - Card network detection (Visa, Mastercard, Amex, Elo, Hipercard)
//! - Card face projection with placeholders
//! - Form validation that reports every failed field at once
//! - Multiple interfaces: library, CLI, REST API, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{CardForm, CardNetwork, SubmitOutcome};
//!
//! let mut form = CardForm::new();
//!
//! let number = form.input_card_number("4111111111111111");
//! assert_eq!(number.value, "4111 1111 1111 1111");
//! assert_eq!(number.network, Some(CardNetwork::Visa));
//!
//! form.input_holder_name("Jane Doe");
//! form.input_month("05");
//! form.input_year("27");
//! form.input_cvc("123");
//!
//! match form.submit() {
//!     SubmitOutcome::Accepted { preview } => assert_eq!(preview.expiry, "00/00"),
//!     SubmitOutcome::Rejected(report) => panic!("{:?}", report.messages()),
//! }
//! ```
//!
//! ## Field Formatting
//!
//! ```rust
//! use card_form::format;
//! use card_form::CardNetwork;
//!
//! assert_eq!(format::format_card_number("4111-1111-1111-1111"), "4111 1111 1111 1111");
//! assert_eq!(format::format_month("13"), "12");
//! assert_eq!(format::format_month("00"), "01");
//! assert_eq!(format::format_month("0"), "0");
//! assert_eq!(format::format_year("2027"), "20");
//! assert_eq!(format::format_cvc("12345", Some(CardNetwork::Amex)), "1234");
//! assert_eq!(format::format_holder_name("Jo3hn_Doe!!"), "JohnDoe");
//! ```
//!
//! ## Card Preview
//!
//! ```rust
//! use card_form::preview;
//!
//! assert_eq!(preview::project_card_number("1234"), ["1234", "0000", "0000", "0000"]);
//! assert_eq!(preview::project_holder_name(""), "Cardholder Name");
//! assert_eq!(preview::project_expiry("05", ""), "05/00");
//! assert_eq!(preview::project_cvc(""), "000");
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use card_form::{validate_form, FormState};
//!
//! let state = FormState::new()
//!     .with_card_number("4111111111111111")
//!     .with_holder_name("J")
//!     .with_month("05")
//!     .with_year("27")
//!     .with_cvc("1234");
//!
//! let report = validate_form(&state);
//! assert!(!report.is_valid());
//! assert_eq!(report.messages(), vec![
//!     "holder name must have at least 2 characters",
//!     "CVC must have 3 digits",
//! ]);
//! ```
//!
//! ## Supported Card Networks
//!
//! Detection checks networks in this order and the first match wins.
//!
//! | Network | Prefix | CVC |
//! |---------|--------|-----|
//! | Visa | 4 | 3 |
//! | Mastercard | 51-55 | 3 |
//! | American Express | 34, 37 | 4 |
//! | Elo | 4011, 431274, 438935, 451416, 457393, 504175, 506699, 5067, 509, 627780, 636297, 636368 | 3 |
//! | Hipercard | 606282, 3841 | 3 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/deserialize form state, previews and updates |
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |
//! | `wasm` | WebAssembly support |
//!
//! ## Security
//!
//! - Form field buffers are zeroized on overwrite, reset and drop
//! - `Debug` output masks the card number and the CVC
//! - Log events carry masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod detect;
pub mod error;
pub mod form;
pub mod format;
pub mod mask;
pub mod network;
pub mod preview;
pub mod session;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use detect::{detect_network, detect_network_id};
pub use error::FieldError;
pub use form::{
    Field, FormState, CARD_GROUP_SIZE, MAX_CARD_DIGITS, MAX_HOLDER_NAME_CHARS,
    MIN_HOLDER_NAME_CHARS, PREVIEW_GROUPS,
};
pub use network::{
    all_networks, CardNetwork, NetworkDefinition, DEFAULT_ASSET_ID, UNKNOWN_NETWORK_ID,
};
pub use preview::CardPreview;
pub use session::{CardForm, SubmitOutcome};
pub use validate::{is_form_valid, validate_form, ValidationReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_examples() {
        assert_eq!(detect_network_id("4111111111111111"), "visa");
        assert_eq!(detect_network_id("5500000000000000"), "mastercard");
        assert_eq!(detect_network_id("340000000000000"), "amex");
        assert_eq!(detect_network_id("6062820000000000"), "hipercard");
        assert_eq!(detect_network_id("0000000000000000"), "unknown");
    }

    #[test]
    fn test_valid_submission_example() {
        let state = FormState::new()
            .with_card_number("4111111111111111")
            .with_holder_name("Jane Doe")
            .with_month("05")
            .with_year("27")
            .with_cvc("123");
        let report = validate_form(&state);
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_wrong_cvc_example() {
        let state = FormState::new()
            .with_card_number("4111111111111111")
            .with_holder_name("Jane Doe")
            .with_month("05")
            .with_year("27")
            .with_cvc("1234");
        let report = validate_form(&state);
        assert!(!report.is_valid());
        assert!(report
            .messages()
            .contains(&"CVC must have 3 digits".to_string()));
    }

    #[test]
    fn test_thread_safety() {
        // Ensure types are Send + Sync
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardForm>();
        assert_send_sync::<FormState>();
        assert_send_sync::<CardPreview>();
        assert_send_sync::<ValidationReport>();
        assert_send_sync::<CardNetwork>();
    }
}
