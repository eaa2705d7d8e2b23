//! Per-participant hand-outs.
//!
//! One redacted text file per giver describing their recipient, named by the
//! giver's email (falling back to name) so the organizer can mail them out
//! without opening any.

use crate::core::errors::Result;
use crate::core::{Assignment, Participant};
use crate::disclosure::{knows_recipient_identity, visible_fields};
use crate::io;
use std::path::Path;

const IDENTITY_SHOWN_BANNER: &str =
    "Your recipient opted to be known. Their name and contact details are below.";
const IDENTITY_HIDDEN_BANNER: &str = "Your recipient's identity is hidden. \
     Message the organizer to learn the address when it is time to send your gift.";
const ADDRESS_REVEALED_BANNER: &str = "Your recipient's identity is still a secret, \
     but it is shipping season: their address is included below.";

/// Banner line explaining what this hand-out does and does not reveal.
pub fn disclosure_banner(identity_shown: bool, reveal_addresses: bool) -> &'static str {
    match (identity_shown, reveal_addresses) {
        (true, _) => IDENTITY_SHOWN_BANNER,
        (false, true) => ADDRESS_REVEALED_BANNER,
        (false, false) => IDENTITY_HIDDEN_BANNER,
    }
}

/// Render one giver's hand-out: banner, then the policy-approved recipient
/// fields under their captions. A field with an empty caption prints bare.
pub fn render_recipient(
    giver: &Participant,
    recipient: &Participant,
    reveal_addresses: bool,
) -> String {
    let identity_shown = knows_recipient_identity(giver, recipient);

    let mut out = String::new();
    out.push_str(disclosure_banner(identity_shown, reveal_addresses));
    out.push_str("\n\n");

    for field in visible_fields(giver, recipient, reveal_addresses) {
        let value = recipient.field(field);
        let caption = field.caption();
        if caption.is_empty() {
            out.push_str(&value);
        } else {
            out.push_str(caption);
            out.push_str(": ");
            out.push_str(&value);
        }
        out.push('\n');
    }
    out
}

pub fn write_recipient_files(
    dir: &Path,
    participants: &[Participant],
    assignment: &Assignment,
    reveal_addresses: bool,
) -> Result<()> {
    for (giver_index, recipient_index) in assignment.pairs() {
        let giver = &participants[giver_index];
        let recipient = &participants[recipient_index];
        let content = render_recipient(giver, recipient, reveal_addresses);
        io::write_file(&dir.join(giver.output_name()), &content)?;
    }
    Ok(())
}
