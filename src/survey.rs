//! Survey CSV parsing.
//!
//! Survey exports label columns with the full question text, so columns are
//! matched to semantic fields by label prefix through a declarative dispatch
//! table. First match wins; unmatched columns are ignored.

use crate::core::errors::{Error, Result};
use crate::core::{Participant, SurveyField};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Built-in (label prefix, field) dispatch table, checked in order.
pub const COLUMN_PREFIXES: &[(&str, SurveyField)] = &[
    ("Name", SurveyField::Name),
    ("Email", SurveyField::Email),
    ("Favorite color", SurveyField::FavoriteColor),
    ("Address", SurveyField::Address),
    ("Allergies", SurveyField::Restrictions),
    ("Do you prefer functional", SurveyField::FunctionalOrFrivolous),
    ("Do you like keepsakes", SurveyField::KeepsakeOrConsumable),
    ("What size t-shirt", SurveyField::ShirtSize),
    ("You're doing a job interview", SurveyField::InterviewResponse),
    ("General message for your", SurveyField::MessageToRecipient),
    ("General message for ME", SurveyField::MessageToOrganizer),
    ("Opt-in name reveal - RECEIVING", SurveyField::RevealReceiving),
    ("Opt-in name reveal - GIVING", SurveyField::RevealGiving),
];

/// Column-index to semantic-field resolution for one survey file.
#[derive(Clone, Debug)]
pub struct ColumnMap {
    fields: Vec<Option<SurveyField>>,
}

impl ColumnMap {
    /// Resolve each header label against `extra` mappings first (supplied by
    /// configuration), then the built-in table.
    pub fn from_headers<'a, I>(headers: I, extra: &[(String, SurveyField)]) -> Self
    where
        I: Iterator<Item = &'a str>,
    {
        let fields = headers
            .map(|label| resolve_column(label, extra))
            .collect();
        Self { fields }
    }

    pub fn field_at(&self, column: usize) -> Option<SurveyField> {
        self.fields.get(column).copied().flatten()
    }
}

fn resolve_column(label: &str, extra: &[(String, SurveyField)]) -> Option<SurveyField> {
    extra
        .iter()
        .find(|(prefix, _)| label.starts_with(prefix.as_str()))
        .map(|(_, field)| *field)
        .or_else(|| {
            COLUMN_PREFIXES
                .iter()
                .find(|(prefix, _)| label.starts_with(prefix))
                .map(|(_, field)| *field)
        })
}

/// An opt-in cell counts as consent only when it leads with the literal
/// token the survey offered ("YES, ...").
fn parse_opt_in(cell: &str) -> bool {
    cell.trim_start().starts_with("YES")
}

/// Read a survey export into participants, in row order.
pub fn parse_survey(path: &Path, extra: &[(String, SurveyField)]) -> Result<Vec<Participant>> {
    let file = File::open(path)?;
    parse_survey_reader(file, extra)
}

/// Reader-generic variant of [`parse_survey`], used directly by tests.
pub fn parse_survey_reader<R: Read>(
    reader: R,
    extra: &[(String, SurveyField)],
) -> Result<Vec<Participant>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let columns = ColumnMap::from_headers(csv_reader.headers()?.iter(), extra);

    let mut participants = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Rows are numbered as in the file, counting the header line.
        participants.push(participant_from_record(index + 2, &record, &columns)?);
    }
    Ok(participants)
}

fn participant_from_record(
    row: usize,
    record: &csv::StringRecord,
    columns: &ColumnMap,
) -> Result<Participant> {
    let mut participant = Participant::default();

    for (column, cell) in record.iter().enumerate() {
        let Some(field) = columns.field_at(column) else {
            continue;
        };
        match field {
            SurveyField::Name => participant.name = cell.to_string(),
            SurveyField::Email => participant.email = cell.to_string(),
            SurveyField::FavoriteColor => participant.favorite_color = cell.to_string(),
            SurveyField::Address => participant.address = cell.to_string(),
            SurveyField::Restrictions => participant.restrictions = cell.to_string(),
            SurveyField::FunctionalOrFrivolous => {
                participant.functional_or_frivolous = cell.to_string()
            }
            SurveyField::KeepsakeOrConsumable => {
                participant.keepsake_or_consumable = cell.to_string()
            }
            SurveyField::ShirtSize => participant.shirt_size = cell.to_string(),
            SurveyField::InterviewResponse => participant.interview_response = cell.to_string(),
            SurveyField::MessageToRecipient => {
                participant.message_to_recipient = cell.to_string()
            }
            SurveyField::MessageToOrganizer => {
                participant.message_to_organizer = cell.to_string()
            }
            SurveyField::RevealReceiving => participant.reveal_receiving = parse_opt_in(cell),
            SurveyField::RevealGiving => participant.reveal_giving = parse_opt_in(cell),
        }
    }

    if participant.name.is_empty() {
        return Err(Error::MissingRequiredField { row, field: "name" });
    }
    if participant.email.is_empty() {
        return Err(Error::MissingRequiredField {
            row,
            field: "email",
        });
    }
    Ok(participant)
}
