//! Error types for the reply fetcher.
//!
//! Two families exist. [`ReplyFetchError`] aborts the whole run and maps to a
//! non-zero exit status. [`UpstreamError`] describes a single failed search page;
//! it is logged and treated as the end of pagination, never surfaced to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that stop a run before or after the network phase.
#[derive(Debug, Error)]
pub enum ReplyFetchError {
    /// Missing CLI argument or no resolvable bearer credential.
    #[error("{0}")]
    Usage(String),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize reply records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A search page that could not be used. Ends pagination without failing the run.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Twitter API returned status {status}")]
    Status { status: u16, body: String },

    #[error("Twitter API reported errors: {}", .0.join("; "))]
    Api(Vec<String>),

    #[error("Request to Twitter API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not decode Twitter API response: {0}")]
    Decode(#[source] serde_json::Error),
}
