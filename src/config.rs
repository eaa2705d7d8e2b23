//! Run configuration loaded from an optional `.pollyanna.toml`.
//!
//! Configuration never changes pipeline semantics: it only extends the
//! survey column vocabulary and adjusts output naming. CLI flags win over
//! config values.

use crate::core::errors::{Error, Result};
use crate::core::SurveyField;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = ".pollyanna.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PollyannaConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub survey: SurveyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the run writes into (created if absent)
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Fixed reference table filename; empty selects the timestamped default
    #[serde(default)]
    pub reference_filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            reference_filename: String::new(),
        }
    }
}

fn default_output_directory() -> String {
    "output".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Extra (prefix, field) pairs, checked before the built-in table
    #[serde(default)]
    pub columns: Vec<ColumnMapping>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub prefix: String,
    pub field: String,
}

impl PollyannaConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: PollyannaConfig =
            toml::from_str(&raw).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` when given, else `.pollyanna.toml` when present in the
    /// working directory, else defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<()> {
        for mapping in &self.survey.columns {
            if SurveyField::from_key(&mapping.field).is_none() {
                return Err(Error::Config(format!(
                    "unknown survey field `{}` in column mapping for prefix `{}`",
                    mapping.field, mapping.prefix
                )));
            }
        }
        Ok(())
    }

    /// The configured column mappings, resolved to fields.
    pub fn extra_column_prefixes(&self) -> Vec<(String, SurveyField)> {
        self.survey
            .columns
            .iter()
            .filter_map(|mapping| {
                SurveyField::from_key(&mapping.field)
                    .map(|field| (mapping.prefix.clone(), field))
            })
            .collect()
    }
}
