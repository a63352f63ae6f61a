//! StatusStore - durable persistence of the module status map

use crate::activator::error::{ActivatorError, ActivatorResult};
use crate::activator::status::{StatusFile, StatusMap};
use std::path::{Path, PathBuf};

/// Persists the status map as a single versioned JSON snapshot
///
/// Every save rewrites the whole file, so a reader never observes a
/// half-updated structure. The containing directory is bootstrapped on
/// first load.
#[derive(Debug)]
pub struct StatusStore {
    path: PathBuf,
}

impl StatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file where statuses are stored
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Load the status map from disk
    ///
    /// Creates the containing directory if it is missing. A missing file
    /// is the expected first-run state and yields an empty map.
    pub fn load(&self) -> ActivatorResult<StatusMap> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| ActivatorError::Io {
                action: "create directory for",
                path: self.path.clone(),
                source,
            })?;
        }

        if !self.path.exists() {
            return Ok(StatusMap::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| ActivatorError::Io {
            action: "read",
            path: self.path.clone(),
            source,
        })?;

        let file: StatusFile =
            serde_json::from_str(&content).map_err(|source| ActivatorError::CorruptState {
                path: self.path.clone(),
                source,
            })?;

        Ok(file.into_map())
    }

    /// Overwrite the file with a complete snapshot of the map
    pub fn save(&self, map: &StatusMap) -> ActivatorResult<()> {
        let file = StatusFile::from_map(map);
        let content =
            serde_json::to_string_pretty(&file).map_err(|source| ActivatorError::CorruptState {
                path: self.path.clone(),
                source,
            })?;

        std::fs::write(&self.path, content).map_err(|source| ActivatorError::Io {
            action: "write",
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove the statuses file; a missing file is a successful no-op
    pub fn delete(&self) -> ActivatorResult<()> {
        if !self.path.exists() {
            return Ok(());
        }

        std::fs::remove_file(&self.path).map_err(|source| ActivatorError::Io {
            action: "delete",
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activator::status::ModuleStatus;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> StatusStore {
        StatusStore::new(temp.path().join(".modctl/modules_statuses.json"))
    }

    #[test]
    fn test_first_run_returns_empty_map_and_creates_directory() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let map = store.load().unwrap();

        assert!(map.is_empty());
        assert!(temp.path().join(".modctl").is_dir());
        assert!(!store.exists());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.load().unwrap();

        let mut map = StatusMap::new();
        map.insert("Blog".to_string(), ModuleStatus::new("Blog", true, true));
        map.insert("Shop".to_string(), ModuleStatus::new("Shop", false, true));
        store.save(&map).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), map);
    }

    #[test]
    fn test_saved_file_is_versioned_json() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.load().unwrap();

        let mut map = StatusMap::new();
        map.insert("Blog".to_string(), ModuleStatus::new("Blog", true, true));
        store.save(&map).unwrap();

        let content = std::fs::read_to_string(store.file_path()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(doc["version"], 1);
        assert_eq!(doc["modules"][0]["name"], "Blog");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.load().unwrap();
        std::fs::write(store.file_path(), "not json at all {{{").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ActivatorError::CorruptState { .. }));
    }

    #[test]
    fn test_delete_missing_file_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.delete().unwrap();
        assert!(!store.exists());
    }

    #[test]
    fn test_delete_removes_file() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.load().unwrap();
        store.save(&StatusMap::new()).unwrap();
        assert!(store.exists());

        store.delete().unwrap();
        assert!(!store.exists());
    }
}
