use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".pollyanna.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Pollyanna Configuration

[output]
directory = "output"
# Fixed reference filename; leave unset for the timestamped default.
# reference_filename = "reference.csv"

# Extra survey column mappings, checked before the built-in table.
# `field` is one of: name, email, favorite_color, address, restrictions,
# functional_or_frivolous, keepsake_or_consumable, shirt_size,
# interview_response, message_to_recipient, message_to_organizer,
# reveal_receiving, reveal_giving
#
# [[survey.columns]]
# prefix = "Mailing address"
# field = "address"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .pollyanna.toml configuration file");

    Ok(())
}
