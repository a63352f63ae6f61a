//! Project configuration for the modctl CLI
//!
//! Read from `modctl.toml` at the project root when present. Every field
//! has a default, so the file is optional and may be partial.

use crate::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub statuses: StatusesConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

/// Where the module statuses live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusesConfig {
    /// Statuses file path, relative to the project root
    #[serde(default = "default_statuses_file")]
    pub file: PathBuf,
}

/// Cache wiring for the status map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Bypass the cache entirely when false
    #[serde(default)]
    pub enabled: bool,

    /// Cache namespace for the status map snapshot
    #[serde(default = "default_cache_key")]
    pub key: String,

    /// Entry lifetime in seconds
    #[serde(default = "default_cache_lifetime")]
    pub lifetime: u64,

    /// Cache directory, relative to the project root
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,
}

fn default_statuses_file() -> PathBuf {
    PathBuf::from(".modctl/modules_statuses.json")
}

fn default_cache_key() -> String {
    "modctl-statuses".to_string()
}

fn default_cache_lifetime() -> u64 {
    60
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".modctl/cache")
}

impl Default for StatusesConfig {
    fn default() -> Self {
        Self {
            file: default_statuses_file(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            key: default_cache_key(),
            lifetime: default_cache_lifetime(),
            dir: default_cache_dir(),
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "modctl.toml";

    /// Load configuration from `modctl.toml` under `project_root`,
    /// falling back to defaults when the file is absent
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(Self::FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Absolute statuses file path for a project root
    pub fn statuses_file(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.statuses.file)
    }

    /// Absolute cache directory for a project root
    pub fn cache_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.cache.dir)
    }

    /// Cache entry lifetime as a duration
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.lifetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();

        let config = Config::load(temp.path()).unwrap();

        assert_eq!(
            config.statuses.file,
            PathBuf::from(".modctl/modules_statuses.json")
        );
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.key, "modctl-statuses");
        assert_eq!(config.cache.lifetime, 60);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_the_rest() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("modctl.toml"),
            "[cache]\nenabled = true\nlifetime = 5\n",
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap();

        assert!(config.cache.enabled);
        assert_eq!(config.cache.lifetime, 5);
        assert_eq!(config.cache.key, "modctl-statuses");
        assert_eq!(
            config.statuses.file,
            PathBuf::from(".modctl/modules_statuses.json")
        );
    }

    #[test]
    fn test_full_file_overrides_everything() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("modctl.toml"),
            r#"
[statuses]
file = "state/modules.json"

[cache]
enabled = true
key = "my-app-modules"
lifetime = 120
dir = "state/cache"
"#,
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap();

        assert_eq!(
            config.statuses_file(temp.path()),
            temp.path().join("state/modules.json")
        );
        assert_eq!(config.cache_dir(temp.path()), temp.path().join("state/cache"));
        assert_eq!(config.cache.key, "my-app-modules");
        assert_eq!(config.cache_ttl(), Duration::from_secs(120));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("modctl.toml"), "not [ valid toml").unwrap();

        assert!(Config::load(temp.path()).is_err());
    }
}
