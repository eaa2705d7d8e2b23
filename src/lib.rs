// Export modules for library usage
pub mod assignment;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod disclosure;
pub mod io;
pub mod survey;

// Re-export commonly used types
pub use crate::assignment::{assign_ring, fingerprint};
pub use crate::config::PollyannaConfig;
pub use crate::core::{errors::Error, Assignment, Participant, SurveyField, ALL_FIELDS};
pub use crate::disclosure::{knows_recipient_identity, visible_fields};
pub use crate::io::writers::{render_digest, render_recipient, disclosure_banner};
pub use crate::survey::{parse_survey, parse_survey_reader, ColumnMap, COLUMN_PREFIXES};
