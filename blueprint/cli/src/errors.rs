//! Error types for the blueprint CLI.

use std::path::PathBuf;

use blueprint_define::DuplicateEndpointError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to read an input document
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input document is not valid JSON for the expected shape
    #[error("Failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Duplicate(#[from] DuplicateEndpointError),

    /// Failed to render output
    #[error("Failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),
}
