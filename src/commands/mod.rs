//! CLI command implementations for pollyanna operations.
//!
//! Available commands:
//! - **assign**: Parse a survey export, link everyone into a gift ring, and
//!   write the reference table, organizer digest, and per-participant
//!   hand-outs
//! - **init**: Initialize a new pollyanna configuration file

pub mod assign;
pub mod init;

pub use assign::{run_assignment, AssignConfig};
pub use init::init_config;
