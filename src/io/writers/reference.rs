//! Organizer reference table.
//!
//! One CSV row per participant with every field, organizer-only ones
//! included, plus the resolved recipient name. Never distributed to
//! participants.

use crate::core::errors::{Error, Result};
use crate::core::{Assignment, Participant, ALL_FIELDS};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Default reference filename, stamped so consecutive runs stay side by side.
pub fn timestamped_filename(now: DateTime<Utc>) -> String {
    format!("reference_{}.csv", now.format("%Y%m%d%H%M%S"))
}

pub fn write_reference_table(
    path: &Path,
    participants: &[Participant],
    assignment: &Assignment,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = ALL_FIELDS.iter().map(|field| field.key()).collect();
    header.push("recipient_name");
    writer.write_record(&header)?;

    for (giver, recipient) in assignment.pairs() {
        let mut record: Vec<String> = ALL_FIELDS
            .iter()
            .map(|field| participants[giver].field(*field))
            .collect();
        record.push(participants[recipient].name.clone());
        writer.write_record(&record)?;
    }

    writer
        .flush()
        .map_err(|source| Error::output_write(path, source))
}
