//! FileActivator - the public surface for module activation state
//!
//! Owns the authoritative in-memory status map for the process, persists
//! every change through the status store, and keeps the shared cache
//! coherent by evicting its entry on each mutation. Readers in other
//! processes either hit the statuses file directly or go through the
//! cache with a bounded staleness window.

use crate::activator::error::ActivatorResult;
use crate::activator::status::{ModuleStatus, StatusFile, StatusMap};
use crate::activator::store::StatusStore;
use crate::cache::{Cache, CacheError};
use std::path::Path;
use std::time::Duration;

/// Cache wiring for the activator
#[derive(Debug, Clone)]
pub struct ActivatorOptions {
    /// Bypass the cache entirely when false
    pub cache_enabled: bool,

    /// Cache namespace for the status map snapshot
    pub cache_key: String,

    /// How long a cached read-through entry survives
    pub cache_ttl: Duration,
}

/// Tracks which modules are installed and enabled, backed by a status
/// file and an injected cache service
#[derive(Debug)]
pub struct FileActivator<C: Cache> {
    store: StatusStore,
    cache: C,
    options: ActivatorOptions,
    statuses: StatusMap,
}

impl<C: Cache> FileActivator<C> {
    /// Create an activator and populate its map via the cache-or-file
    /// read path
    pub fn new(store: StatusStore, cache: C, options: ActivatorOptions) -> ActivatorResult<Self> {
        let mut activator = Self {
            store,
            cache,
            options,
            statuses: StatusMap::new(),
        };
        activator.statuses = activator.modules_statuses()?;
        Ok(activator)
    }

    /// Path of the durable statuses file
    pub fn statuses_file_path(&self) -> &Path {
        self.store.file_path()
    }

    /// All tracked statuses
    pub fn statuses(&self) -> &StatusMap {
        &self.statuses
    }

    /// True when the module's enabled flag matches `status`; untracked
    /// modules count as disabled
    pub fn has_status(&self, name: &str, status: bool) -> bool {
        match self.statuses.get(name) {
            Some(module) => module.enabled == status,
            None => !status,
        }
    }

    /// True when the module's installed flag matches `status`; untracked
    /// modules count as not installed
    pub fn has_install(&self, name: &str, status: bool) -> bool {
        match self.statuses.get(name) {
            Some(module) => module.installed == status,
            None => !status,
        }
    }

    /// Enable a module
    ///
    /// Enabling only takes effect while the module is installed;
    /// otherwise the stored flag stays false.
    pub fn enable(&mut self, name: &str) -> ActivatorResult<()> {
        let installed = self.has_install(name, true);
        self.set_active_by_name(name, true, installed)
    }

    /// Disable a module, preserving its install flag
    pub fn disable(&mut self, name: &str) -> ActivatorResult<()> {
        let installed = self.has_install(name, true);
        self.set_active_by_name(name, false, installed)
    }

    /// Install a module; installation implies activation
    pub fn install(&mut self, name: &str) -> ActivatorResult<()> {
        self.set_install_by_name(name, true)
    }

    /// Uninstall a module; uninstallation implies deactivation
    pub fn uninstall(&mut self, name: &str) -> ActivatorResult<()> {
        self.set_install_by_name(name, false)
    }

    /// Set the active flag, keeping the current install flag
    pub fn set_active(&mut self, name: &str, active: bool) -> ActivatorResult<()> {
        let installed = self.has_install(name, true);
        self.set_active_by_name(name, active, installed)
    }

    /// Set the install flag; the active flag follows it
    pub fn set_install(&mut self, name: &str, active: bool) -> ActivatorResult<()> {
        self.set_install_by_name(name, active)
    }

    /// Store a status by module name
    ///
    /// The primitive all enable/disable paths funnel through. A module
    /// only ends up enabled when it is requested active and installed in
    /// the same call; requesting active on an uninstalled module stores
    /// `enabled = false` without erroring.
    pub fn set_active_by_name(
        &mut self,
        name: &str,
        active: bool,
        install: bool,
    ) -> ActivatorResult<()> {
        let status = ModuleStatus::new(name, active && install, install);
        self.statuses.insert(name.to_string(), status);
        self.flush_cache()
    }

    /// Store a status where both flags follow `active`
    pub fn set_install_by_name(&mut self, name: &str, active: bool) -> ActivatorResult<()> {
        let status = ModuleStatus::new(name, active, active);
        self.statuses.insert(name.to_string(), status);
        self.flush_cache()
    }

    /// Remove a module's tracking entry; unknown names are a no-op
    pub fn delete(&mut self, name: &str) -> ActivatorResult<()> {
        if self.statuses.remove(name).is_none() {
            return Ok(());
        }
        self.flush_cache()
    }

    /// Drop the durable file, the in-memory map, and the cache entry
    ///
    /// The file is not recreated; the next load sees the first-run state.
    pub fn reset(&mut self) -> ActivatorResult<()> {
        self.store.delete()?;
        self.statuses.clear();
        self.cache.forget(&self.options.cache_key)?;
        Ok(())
    }

    /// Read the status map, through the cache when enabled
    ///
    /// The single path by which the in-memory map is populated; called
    /// once at construction.
    fn modules_statuses(&self) -> ActivatorResult<StatusMap> {
        if !self.options.cache_enabled {
            return self.store.load();
        }

        if let Some(payload) = self.cache.get(&self.options.cache_key)? {
            let file: StatusFile = serde_json::from_str(&payload).map_err(CacheError::from)?;
            return Ok(file.into_map());
        }

        let map = self.store.load()?;
        let payload =
            serde_json::to_string(&StatusFile::from_map(&map)).map_err(CacheError::from)?;
        self.cache
            .put(&self.options.cache_key, &payload, self.options.cache_ttl)?;

        Ok(map)
    }

    /// Persist the map, then evict the shared cache entry so readers in
    /// any process reload from the file
    fn flush_cache(&self) -> ActivatorResult<()> {
        self.store.save(&self.statuses)?;
        self.cache.forget(&self.options.cache_key)?;
        Ok(())
    }
}
