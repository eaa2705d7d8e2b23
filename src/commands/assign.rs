use crate::assignment::assign_ring;
use crate::config::PollyannaConfig;
use crate::io::{self, writers};
use crate::survey::parse_survey;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

pub struct AssignConfig {
    pub input: PathBuf,
    pub reveal_addresses: bool,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Run the whole pipeline: parse, link the ring, write every output.
///
/// Parsing and assignment happen before anything is written, so a bad survey
/// row aborts with no partial output on disk.
pub fn run_assignment(config: AssignConfig) -> Result<()> {
    let settings = PollyannaConfig::load_or_default(config.config.as_deref())?;

    let participants = parse_survey(&config.input, &settings.extra_column_prefixes())
        .with_context(|| format!("failed to parse survey {}", config.input.display()))?;
    log::info!(
        "parsed {} participants from {}",
        participants.len(),
        config.input.display()
    );

    let assignment = assign_ring(&participants)?;
    log::info!(
        "linked {} participants into a single gift ring",
        assignment.len()
    );
    if config.reveal_addresses {
        log::warn!("address reveal override is on; every hand-out will carry an address");
    }

    let output_dir = config
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.output.directory));
    io::ensure_dir(&output_dir)?;

    let reference_name = if settings.output.reference_filename.is_empty() {
        writers::timestamped_filename(Utc::now())
    } else {
        settings.output.reference_filename.clone()
    };
    writers::write_reference_table(&output_dir.join(&reference_name), &participants, &assignment)?;
    writers::write_digest(&output_dir, &participants)?;
    writers::write_recipient_files(
        &output_dir,
        &participants,
        &assignment,
        config.reveal_addresses,
    )?;

    log::info!(
        "wrote {} files to {}",
        participants.len() + 2,
        output_dir.display()
    );
    Ok(())
}
