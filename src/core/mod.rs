pub mod errors;

use serde::{Deserialize, Serialize};

/// Semantic survey fields, in canonical order.
///
/// The order is load-bearing: it fixes the fingerprint input, the reference
/// table columns, and the line order of the per-participant hand-outs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyField {
    Name,
    Email,
    FavoriteColor,
    Address,
    Restrictions,
    FunctionalOrFrivolous,
    KeepsakeOrConsumable,
    ShirtSize,
    InterviewResponse,
    MessageToRecipient,
    MessageToOrganizer,
    RevealReceiving,
    RevealGiving,
}

/// Every field, in canonical order.
pub const ALL_FIELDS: [SurveyField; 13] = [
    SurveyField::Name,
    SurveyField::Email,
    SurveyField::FavoriteColor,
    SurveyField::Address,
    SurveyField::Restrictions,
    SurveyField::FunctionalOrFrivolous,
    SurveyField::KeepsakeOrConsumable,
    SurveyField::ShirtSize,
    SurveyField::InterviewResponse,
    SurveyField::MessageToRecipient,
    SurveyField::MessageToOrganizer,
    SurveyField::RevealReceiving,
    SurveyField::RevealGiving,
];

impl SurveyField {
    /// Stable machine name used in the reference table header and in
    /// configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            SurveyField::Name => "name",
            SurveyField::Email => "email",
            SurveyField::FavoriteColor => "favorite_color",
            SurveyField::Address => "address",
            SurveyField::Restrictions => "restrictions",
            SurveyField::FunctionalOrFrivolous => "functional_or_frivolous",
            SurveyField::KeepsakeOrConsumable => "keepsake_or_consumable",
            SurveyField::ShirtSize => "shirt_size",
            SurveyField::InterviewResponse => "interview_response",
            SurveyField::MessageToRecipient => "message_to_recipient",
            SurveyField::MessageToOrganizer => "message_to_organizer",
            SurveyField::RevealReceiving => "reveal_receiving",
            SurveyField::RevealGiving => "reveal_giving",
        }
    }

    /// Resolve a machine name back to a field (used by config validation).
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_FIELDS.into_iter().find(|field| field.key() == key)
    }

    /// Caption shown in the per-participant hand-out. An empty caption means
    /// the value is printed bare, without any leading key.
    pub fn caption(&self) -> &'static str {
        match self {
            SurveyField::Name => "Name",
            SurveyField::Email => "Email",
            SurveyField::FavoriteColor => "Favorite color",
            SurveyField::Address => "Address",
            SurveyField::Restrictions => "Allergies & restrictions",
            SurveyField::FunctionalOrFrivolous => "Functional or frivolous",
            SurveyField::KeepsakeOrConsumable => "Keepsake or consumable",
            SurveyField::ShirtSize => "Sizes",
            SurveyField::InterviewResponse => "Interview answers",
            // Printed as a closing note in the recipient's own words.
            SurveyField::MessageToRecipient => "",
            SurveyField::MessageToOrganizer => "Message to the organizer",
            SurveyField::RevealReceiving => "Reveal (receiving)",
            SurveyField::RevealGiving => "Reveal (giving)",
        }
    }

    /// Fields that only the organizer may ever see.
    pub fn is_organizer_only(&self) -> bool {
        matches!(
            self,
            SurveyField::MessageToOrganizer
                | SurveyField::RevealReceiving
                | SurveyField::RevealGiving
        )
    }

    /// Fields that identify the participant.
    pub fn is_identity(&self) -> bool {
        matches!(self, SurveyField::Name | SurveyField::Email)
    }
}

/// One survey respondent. Immutable once parsed; the gift ring lives in a
/// separate [`Assignment`] rather than in a mutable back-reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
    pub favorite_color: String,
    pub address: String,
    pub restrictions: String,
    pub functional_or_frivolous: String,
    pub keepsake_or_consumable: String,
    pub shirt_size: String,
    pub interview_response: String,
    pub message_to_recipient: String,
    pub message_to_organizer: String,
    pub reveal_receiving: bool,
    pub reveal_giving: bool,
}

impl Participant {
    /// The field's value rendered as text (booleans as `true`/`false`).
    pub fn field(&self, field: SurveyField) -> String {
        match field {
            SurveyField::Name => self.name.clone(),
            SurveyField::Email => self.email.clone(),
            SurveyField::FavoriteColor => self.favorite_color.clone(),
            SurveyField::Address => self.address.clone(),
            SurveyField::Restrictions => self.restrictions.clone(),
            SurveyField::FunctionalOrFrivolous => self.functional_or_frivolous.clone(),
            SurveyField::KeepsakeOrConsumable => self.keepsake_or_consumable.clone(),
            SurveyField::ShirtSize => self.shirt_size.clone(),
            SurveyField::InterviewResponse => self.interview_response.clone(),
            SurveyField::MessageToRecipient => self.message_to_recipient.clone(),
            SurveyField::MessageToOrganizer => self.message_to_organizer.clone(),
            SurveyField::RevealReceiving => self.reveal_receiving.to_string(),
            SurveyField::RevealGiving => self.reveal_giving.to_string(),
        }
    }

    /// Name for this participant's hand-out file: email, falling back to name.
    pub fn output_name(&self) -> &str {
        if self.email.is_empty() {
            &self.name
        } else {
            &self.email
        }
    }
}

/// The gift ring: a giver-index to recipient-index mapping over the parsed
/// participant order, forming exactly one cycle with no fixed points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    recipients: Vec<usize>,
}

impl Assignment {
    /// Build the mapping from a cycle order: each entry gives to the next,
    /// and the last wraps around to the first.
    ///
    /// `order` must be a permutation of `0..order.len()` with length >= 2;
    /// the assignment engine guarantees both.
    pub fn from_cycle(order: &[usize]) -> Self {
        let mut recipients = vec![0; order.len()];
        for (pos, &giver) in order.iter().enumerate() {
            recipients[giver] = order[(pos + 1) % order.len()];
        }
        Self { recipients }
    }

    pub fn recipient_of(&self, giver: usize) -> usize {
        self.recipients[giver]
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    /// All (giver, recipient) index pairs, in parsed participant order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.recipients.iter().copied().enumerate()
    }
}
