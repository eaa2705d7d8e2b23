//! Organizer digest.
//!
//! Collects every message-to-organizer into a single text file, in survey
//! row order, so the organizer reads them in one sitting instead of combing
//! through the reference table.

use crate::core::errors::Result;
use crate::core::Participant;
use crate::io;
use std::path::Path;

pub const DIGEST_FILENAME: &str = "organizer_digest.txt";

const LEADING_BANNER: &str = "=== Messages for the organizer ===";
const TRAILING_BANNER: &str = "=== End of messages ===";

pub fn render_digest(participants: &[Participant]) -> String {
    let mut out = String::new();
    out.push_str(LEADING_BANNER);
    out.push('\n');
    for participant in participants {
        out.push_str(&participant.name);
        out.push_str(": ");
        out.push_str(&participant.message_to_organizer);
        out.push('\n');
    }
    out.push_str(TRAILING_BANNER);
    out.push('\n');
    out
}

pub fn write_digest(dir: &Path, participants: &[Participant]) -> Result<()> {
    io::write_file(&dir.join(DIGEST_FILENAME), &render_digest(participants))
}
