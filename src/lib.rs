// Modctl - Module activation state manager
// Tracks which modules of a host application are installed and enabled,
// behind a durable status file and a read-through cache

pub mod activator;
pub mod cache;
pub mod cli;
pub mod config;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use activator::{
    ActivatorError, ActivatorOptions, ActivatorResult, FileActivator, ModuleStatus, StatusMap,
    StatusStore,
};
pub use cache::{Cache, CacheError, FileCache, MemoryCache};
pub use config::Config;
