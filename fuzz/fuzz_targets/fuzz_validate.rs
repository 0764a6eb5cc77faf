//! Fuzz target for form validation.
//!
//! Tests that validation and the form session never panic on arbitrary
//! field values.

#![no_main]

use arbitrary::Arbitrary;
use card_form::{validate_form, CardForm, FormState, SubmitOutcome};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FormInput<'a> {
    card_number: &'a str,
    holder_name: &'a str,
    month: &'a str,
    year: &'a str,
    cvc: &'a str,
}

fuzz_target!(|input: FormInput<'_>| {
    // Raw values straight into the validator
    let state = FormState::new()
        .with_card_number(input.card_number)
        .with_holder_name(input.holder_name)
        .with_month(input.month)
        .with_year(input.year)
        .with_cvc(input.cvc);
    let report = validate_form(&state);
    assert_eq!(report.is_valid(), report.errors().is_empty());
    assert!(report.errors().len() <= 5);

    // The same values typed into a session
    let mut form = CardForm::new();
    form.input_card_number(input.card_number);
    form.input_holder_name(input.holder_name);
    form.input_month(input.month);
    form.input_year(input.year);
    form.input_cvc(input.cvc);
    let _ = form.preview();

    match form.submit() {
        SubmitOutcome::Accepted { .. } => assert!(form.state().is_empty()),
        SubmitOutcome::Rejected(report) => assert!(!report.is_valid()),
    }
});
