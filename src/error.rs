//! Error types for offering extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading reference data or decoding messages
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to read a reference data file
    #[error("Failed to read reference data from {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A mapping line did not have the `key,CanonicalName` shape
    #[error("Malformed mapping line {line} in {file}: {details}")]
    ConfigFormat {
        file: String,
        line: usize,
        details: String,
    },

    /// A location pattern failed to compile
    #[error("Invalid location pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    /// Failed to decode message content
    #[error("Failed to decode content: {0}")]
    Decode(String),

    /// Invalid message timestamp
    #[error("Invalid message timestamp: {0}")]
    Timestamp(String),
}

/// Result type for offering extraction operations
pub type Result<T> = std::result::Result<T, ScrapeError>;
