//! Error types for note extraction, report writing, and the CLI surface.

use std::path::PathBuf;
use thiserror::Error;

/// Failures at the archive/JSON boundary. Any of these aborts the whole
/// extraction; no partial record list is produced.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error(
        "Cannot find {entry} in {} (XMind 8 documents store content.xml and are not supported)",
        .path.display()
    )]
    ManifestMissing { path: PathBuf, entry: &'static str },

    #[error("Failed to open {} as a zip archive: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Manifest {entry} is {size} bytes uncompressed, above the {limit} byte limit")]
    ManifestTooLarge {
        entry: &'static str,
        size: u64,
        limit: u64,
    },

    #[error("Failed to read {entry}: {source}")]
    Io {
        entry: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {entry}: {source}")]
    Decode {
        entry: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Report output errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error surfaced by the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    Prompt(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
