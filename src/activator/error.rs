//! Error types for the activation state layer

use crate::cache::CacheError;
use std::path::PathBuf;

/// Result type for activator operations
pub type ActivatorResult<T> = Result<T, ActivatorError>;

/// Errors raised by the status store and activator
#[derive(Debug, thiserror::Error)]
pub enum ActivatorError {
    /// Statuses file create/read/write/delete failure
    #[error("Failed to {action} statuses file {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The statuses file exists but does not deserialize into a status map
    #[error("Statuses file {} is corrupt: {source}", .path.display())]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Cache backend failure; surfaced, never masked by a silent
    /// fallback to file reads
    #[error("Cache backend error: {0}")]
    Cache(#[from] CacheError),
}
