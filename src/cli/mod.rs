//! Command implementations for the modctl binary
//!
//! Each command drives the activator and owns all user-facing messaging;
//! the activator core never prints.

pub mod disable;
pub mod enable;
pub mod install;
pub mod remove;
pub mod reset;
pub mod status;
pub mod uninstall;

use crate::activator::{ActivatorOptions, FileActivator, StatusStore};
use crate::cache::FileCache;
use crate::config::Config;
use crate::Result;
use std::env;

/// Activator wired for CLI use: file-backed store and cache resolved
/// against the current working directory
pub fn open_activator() -> Result<FileActivator<FileCache>> {
    let project_root = env::current_dir()?;
    let config = Config::load(&project_root)?;

    let store = StatusStore::new(config.statuses_file(&project_root));
    let cache = FileCache::new(config.cache_dir(&project_root));
    let options = ActivatorOptions {
        cache_enabled: config.cache.enabled,
        cache_key: config.cache.key.clone(),
        cache_ttl: config.cache_ttl(),
    };

    Ok(FileActivator::new(store, cache, options)?)
}
