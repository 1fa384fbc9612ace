//! Error types for the sources crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors a data source can report while fetching people
#[derive(Error, Debug)]
pub enum ReaderError {
    /// The backing file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file was read but did not contain a list of people
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The source refused or failed the request
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    /// The fetch future panicked before producing a result
    #[error("Data source panicked: {0}")]
    Panicked(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ReaderError>;
