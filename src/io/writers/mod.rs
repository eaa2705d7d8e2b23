pub mod digest;
pub mod recipient;
pub mod reference;

pub use digest::{render_digest, write_digest, DIGEST_FILENAME};
pub use recipient::{disclosure_banner, render_recipient, write_recipient_files};
pub use reference::{timestamped_filename, write_reference_table};
