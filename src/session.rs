//! Interactive card form session.
//!
//! [`CardForm`] is the object a UI adapter talks to. It owns one
//! [`FormState`], and for every input event it formats the raw value, stores
//! it, and answers with exactly what the adapter has to render: the value to
//! write back into the input and the preview text that changed.
//!
//! The session holds no UI handles. The adapter owns the event subscriptions
//! and calls in with plain strings.
//!
//! # Example
//!
//! ```
//! use card_form::{CardForm, CardNetwork, SubmitOutcome};
//!
//! let mut form = CardForm::new();
//!
//! let update = form.input_card_number("4111111111111111");
//! assert_eq!(update.value, "4111 1111 1111 1111");
//! assert_eq!(update.network, Some(CardNetwork::Visa));
//!
//! form.input_holder_name("Jane Doe");
//! form.input_month("05");
//! let expiry = form.input_year("27");
//! assert_eq!(expiry.display, "05/27");
//! form.input_cvc("1234");  // cut to 3 digits for Visa
//!
//! assert!(matches!(form.submit(), SubmitOutcome::Accepted { .. }));
//! assert!(form.state().is_empty());
//! ```

use tracing::{debug, info, warn};

use crate::format::{
    format_card_number, format_cvc, format_holder_name, format_month, format_year,
};
use crate::form::{Field, FormState, PREVIEW_GROUPS};
use crate::mask::mask_card_number;
use crate::network::{network_id, CardNetwork};
use crate::preview::{
    project_card_number, project_cvc, project_expiry, project_holder_name, project_network_asset,
    CardPreview,
};
use crate::validate::{validate_form, ValidationReport};

/// Result of a card number input event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardNumberUpdate {
    /// The formatted number to write back into the input.
    pub value: String,
    /// The network detected from the number.
    pub network: Option<CardNetwork>,
    /// The digit groups for the card face.
    pub groups: [String; PREVIEW_GROUPS],
    /// The network logo asset.
    pub asset_id: &'static str,
}

/// Result of a holder name input event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HolderNameUpdate {
    /// The formatted name to write back into the input.
    pub value: String,
    /// The name line for the card face.
    pub display: String,
}

/// Result of a month or year input event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExpiryUpdate {
    /// The formatted month or year to write back into the input.
    pub value: String,
    /// The `MM/YY` line for the card face.
    pub display: String,
}

/// Result of a CVC input event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CvcUpdate {
    /// The formatted CVC to write back into the input.
    pub value: String,
    /// The CVC for the back of the card.
    pub display: String,
}

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every check passed. The form has been cleared and `preview` is the
    /// blank card the adapter should render.
    Accepted {
        /// The blank card.
        preview: CardPreview,
    },
    /// At least one check failed. The form is left as it was.
    Rejected(ValidationReport),
}

impl SubmitOutcome {
    /// Returns true if the form was accepted.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// An interactive card form.
///
/// Created empty, updated one field per input event, and cleared after a
/// successful [`submit`](CardForm::submit).
#[derive(Debug, Clone, Default)]
pub struct CardForm {
    state: FormState,
}

impl CardForm {
    /// Creates an empty form.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session around existing values.
    ///
    /// The values are not reformatted.
    #[inline]
    pub fn from_state(state: FormState) -> Self {
        Self { state }
    }

    /// Returns the current form values.
    #[inline]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the network detected from the current card number.
    #[inline]
    pub fn network(&self) -> Option<CardNetwork> {
        self.state.network()
    }

    /// Projects the whole form onto the card face.
    #[inline]
    pub fn preview(&self) -> CardPreview {
        CardPreview::from_form(&self.state)
    }

    /// Handles a change of the card number input.
    pub fn input_card_number(&mut self, raw: &str) -> CardNumberUpdate {
        let value = format_card_number(raw);
        self.state.set(Field::CardNumber, value.clone());

        let network = self.state.network();
        debug!(
            card_number = %mask_card_number(&value),
            network = network_id(network),
            "card number updated"
        );

        CardNumberUpdate {
            groups: project_card_number(&value),
            asset_id: project_network_asset(network),
            network,
            value,
        }
    }

    /// Handles a change of the holder name input.
    pub fn input_holder_name(&mut self, raw: &str) -> HolderNameUpdate {
        let value = format_holder_name(raw);
        self.state.set(Field::HolderName, value.clone());
        debug!(length = value.chars().count(), "holder name updated");

        HolderNameUpdate {
            display: project_holder_name(&value),
            value,
        }
    }

    /// Handles a change of the expiry month input.
    ///
    /// The display combines the new month with the current year.
    pub fn input_month(&mut self, raw: &str) -> ExpiryUpdate {
        let value = format_month(raw);
        self.state.set(Field::Month, value.clone());
        debug!(month = %value, "expiry month updated");

        ExpiryUpdate {
            display: project_expiry(&value, self.state.year()),
            value,
        }
    }

    /// Handles a change of the expiry year input.
    ///
    /// The display combines the current month with the new year.
    pub fn input_year(&mut self, raw: &str) -> ExpiryUpdate {
        let value = format_year(raw);
        self.state.set(Field::Year, value.clone());
        debug!(year = %value, "expiry year updated");

        ExpiryUpdate {
            display: project_expiry(self.state.month(), &value),
            value,
        }
    }

    /// Handles a change of the CVC input.
    ///
    /// The length limit follows the network of the current card number. A
    /// CVC typed before the number changes is not re-cut; submit catches it.
    pub fn input_cvc(&mut self, raw: &str) -> CvcUpdate {
        let value = format_cvc(raw, self.state.network());
        self.state.set(Field::Cvc, value.clone());
        debug!(length = value.len(), "cvc updated");

        CvcUpdate {
            display: project_cvc(&value),
            value,
        }
    }

    /// Handles an input event for any field.
    ///
    /// Returns the formatted value written into the form.
    pub fn input(&mut self, field: Field, raw: &str) -> String {
        match field {
            Field::CardNumber => self.input_card_number(raw).value,
            Field::HolderName => self.input_holder_name(raw).value,
            Field::Month => self.input_month(raw).value,
            Field::Year => self.input_year(raw).value,
            Field::Cvc => self.input_cvc(raw).value,
        }
    }

    /// Validates the form.
    ///
    /// On success the form is cleared; on failure it is left untouched so the
    /// user can fix the reported fields.
    pub fn submit(&mut self) -> SubmitOutcome {
        let report = validate_form(&self.state);

        if report.is_valid() {
            info!(
                card_number = %mask_card_number(self.state.card_number()),
                network = network_id(self.state.network()),
                "card form accepted"
            );
            self.reset();
            SubmitOutcome::Accepted {
                preview: CardPreview::default(),
            }
        } else {
            let fields: Vec<&str> = report.errors().iter().map(|e| e.field().name()).collect();
            warn!(errors = fields.len(), ?fields, "card form rejected");
            SubmitOutcome::Rejected(report)
        }
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        self.state.clear();
        debug!("card form reset");
    }
}
