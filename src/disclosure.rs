//! Conditional disclosure of recipient fields.
//!
//! Pure policy, recomputed per giver/recipient pair: nothing here is cached
//! across runs with different override settings.

use crate::core::{Participant, SurveyField, ALL_FIELDS};

/// True when the giver may learn who their recipient is: either party opting
/// in is enough.
pub fn knows_recipient_identity(giver: &Participant, recipient: &Participant) -> bool {
    giver.reveal_giving || recipient.reveal_receiving
}

/// The recipient fields a giver's hand-out may contain, in canonical order.
///
/// Organizer-only fields are never shown. Identity (name, email) requires the
/// reveal predicate; the address additionally honors the operator override.
/// Every remaining preference field is always shown.
pub fn visible_fields(
    giver: &Participant,
    recipient: &Participant,
    reveal_addresses: bool,
) -> Vec<SurveyField> {
    let identity_shown = knows_recipient_identity(giver, recipient);

    ALL_FIELDS
        .into_iter()
        .filter(|field| match field {
            field if field.is_organizer_only() => false,
            field if field.is_identity() => identity_shown,
            SurveyField::Address => identity_shown || reveal_addresses,
            _ => true,
        })
        .collect()
}
