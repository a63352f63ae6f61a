//! In-process cache backend
//!
//! Entries live in a shared map and vanish with the process. Cloning a
//! `MemoryCache` yields another handle onto the same entries, the way a
//! real cache service is shared between components.

use super::{Cache, CacheResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

struct Entry {
    expires_at: Instant,
    payload: String,
}

#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        // A poisoned lock only means another holder panicked mid-write;
        // the map itself is still usable.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut entries = self.entries();

        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.payload.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.entries().insert(
            key.to_string(),
            Entry {
                expires_at: Instant::now() + ttl,
                payload: value.to_string(),
            },
        );
        Ok(())
    }

    fn forget(&self, key: &str) -> CacheResult<()> {
        self.entries().remove(key);
        Ok(())
    }
}
