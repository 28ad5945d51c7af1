use thiserror::Error;

/// Error types for assessment, settings and device loading operations
#[derive(Error, Debug)]
pub enum NetGuardError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("Settings Error ({key}): {reason}")]
    Settings { key: String, reason: String },

    #[error("I/O Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Device Source Error: {0}")]
    SourceError(String),
}
