//! File-backed cache backend
//!
//! One JSON file per key under a cache directory, carrying the payload
//! and an absolute expiry timestamp. Entries are visible to every
//! process pointed at the same directory, which is what makes cache
//! eviction by one writer observable to other readers.

use super::{Cache, CacheResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    expires_at: DateTime<Utc>,
    payload: String,
}

/// Cache backend storing entries under a directory on the local
/// filesystem
#[derive(Debug)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Entry path for a key; keys are hashed so arbitrary strings map to
    /// valid file names
    fn entry_path(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        self.dir.join(format!("{:x}.json", hasher.finalize()))
    }
}

impl Cache for FileCache {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let entry: CacheEntry = serde_json::from_str(&content)?;

        if entry.expires_at <= Utc::now() {
            std::fs::remove_file(&path)?;
            return Ok(None);
        }

        Ok(Some(entry.payload))
    }

    fn put(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let entry = CacheEntry {
            expires_at: Utc::now() + chrono::Duration::milliseconds(ttl.as_millis() as i64),
            payload: value.to_string(),
        };
        std::fs::write(self.entry_path(key), serde_json::to_string(&entry)?)?;

        Ok(())
    }

    fn forget(&self, key: &str) -> CacheResult<()> {
        let path = self.entry_path(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}
