//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pollyanna operations
#[derive(Debug, Error)]
pub enum Error {
    /// A survey row lacks one of the required identity values
    #[error("survey row {row}: missing required field `{field}`")]
    MissingRequiredField { row: usize, field: &'static str },

    /// Too few participants to form a gift ring
    #[error("cannot build a gift ring from {count} participant(s); at least 2 are required")]
    DegenerateAssignment { count: usize },

    /// Filesystem failure while writing an output file
    #[error("failed to write output file {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an output-write error with path context
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
