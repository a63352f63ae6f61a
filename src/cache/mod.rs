//! Cache service boundary used by the activator
//!
//! The activator depends only on the `Cache` trait; backends provide
//! get/put/forget with a time-to-live on writes. Expired entries behave
//! as absent. Backend failures surface as `CacheError` so callers can
//! fail loudly instead of silently falling back to file reads.

mod file;
mod memory;

pub use file::FileCache;
pub use memory::MemoryCache;

use std::time::Duration;

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors raised by cache backends
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Failed to access cache entry: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode cache entry: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Key-value cache with per-entry expiry
///
/// Payloads are opaque strings; the caller owns their encoding.
pub trait Cache {
    /// Fetch the live payload under `key`, if any
    fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store `value` under `key` for at most `ttl`
    fn put(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Drop the entry under `key`; absent entries are a no-op
    fn forget(&self, key: &str) -> CacheResult<()>;
}
