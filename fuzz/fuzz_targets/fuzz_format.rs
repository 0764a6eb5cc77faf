//! Fuzz target for field formatting.
//!
//! Tests that the formatters never panic on arbitrary input and that
//! formatting their own output changes nothing.

#![no_main]

use card_form::{detect_network, format, preview, CardNetwork};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let number = format::format_card_number(data);
    let month = format::format_month(data);
    let year = format::format_year(data);
    let name = format::format_holder_name(data);
    let _ = format::strip_formatting(data);
    let _ = detect_network(data);
    let _ = preview::project_card_number(data);
    let _ = preview::project_holder_name(data);
    let _ = preview::project_expiry(data, data);

    assert_eq!(format::format_card_number(&number), number);
    assert_eq!(format::format_month(&month), month);
    assert_eq!(format::format_year(&year), year);
    assert_eq!(format::format_holder_name(&name), name);
    assert!(name.chars().count() <= 30);

    let networks = [
        None,
        Some(CardNetwork::Visa),
        Some(CardNetwork::Mastercard),
        Some(CardNetwork::Amex),
        Some(CardNetwork::Elo),
        Some(CardNetwork::Hipercard),
    ];

    for network in networks {
        let cvc = format::format_cvc(data, network);
        assert_eq!(format::format_cvc(&cvc, network), cvc);
        let _ = preview::project_network_asset(network);
    }

    // Formatting keeps the leading digits
    let kept = format::strip_formatting(&number);
    assert!(format::strip_formatting(data).starts_with(&kept));
});
