//! Module status value types and the on-disk document shape

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activation and installation state of a single module
///
/// A module can only be enabled while it is installed; the constructor
/// enforces that, so a `ModuleStatus` never carries the impossible
/// `enabled && !installed` combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStatus {
    /// Module name (unique, case-sensitive)
    pub name: String,

    /// Whether the module is currently in active use
    pub enabled: bool,

    /// Whether the module's assets/registration exist
    pub installed: bool,
}

impl ModuleStatus {
    /// Create a status record; `enabled` is forced to false unless the
    /// module is also installed.
    pub fn new(name: impl Into<String>, enabled: bool, installed: bool) -> Self {
        Self {
            name: name.into(),
            enabled: enabled && installed,
            installed,
        }
    }
}

/// Mapping from module name to its status
///
/// Ordered so the serialized statuses file stays stable across saves.
pub type StatusMap = BTreeMap<String, ModuleStatus>;

/// On-disk document wrapping the status map
///
/// Versioned and human-inspectable on purpose: the file is the single
/// durable source of truth and gets rewritten as a whole on every change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusFile {
    pub version: u32,
    pub modules: Vec<ModuleStatus>,
}

impl StatusFile {
    pub const VERSION: u32 = 1;

    /// Snapshot a status map into the document shape
    pub fn from_map(map: &StatusMap) -> Self {
        Self {
            version: Self::VERSION,
            modules: map.values().cloned().collect(),
        }
    }

    /// Rebuild the map, normalizing each record through the constructor
    /// so hand-edited files cannot smuggle in an enabled-but-uninstalled
    /// entry.
    pub fn into_map(self) -> StatusMap {
        self.modules
            .into_iter()
            .map(|m| {
                let status = ModuleStatus::new(m.name.clone(), m.enabled, m.installed);
                (m.name, status)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_requires_installed() {
        let status = ModuleStatus::new("Blog", true, false);
        assert!(!status.enabled);
        assert!(!status.installed);

        let status = ModuleStatus::new("Blog", true, true);
        assert!(status.enabled);
        assert!(status.installed);
    }

    #[test]
    fn test_disabled_but_installed_is_valid() {
        let status = ModuleStatus::new("Blog", false, true);
        assert!(!status.enabled);
        assert!(status.installed);
    }

    #[test]
    fn test_status_file_round_trip() {
        let mut map = StatusMap::new();
        map.insert("Blog".to_string(), ModuleStatus::new("Blog", true, true));
        map.insert("Shop".to_string(), ModuleStatus::new("Shop", false, true));

        let file = StatusFile::from_map(&map);
        assert_eq!(file.version, StatusFile::VERSION);
        assert_eq!(file.modules.len(), 2);

        let rebuilt = file.into_map();
        assert_eq!(rebuilt, map);
    }

    #[test]
    fn test_into_map_normalizes_invalid_records() {
        // Simulates a hand-edited file claiming enabled without installed
        let file = StatusFile {
            version: StatusFile::VERSION,
            modules: vec![ModuleStatus {
                name: "Blog".to_string(),
                enabled: true,
                installed: false,
            }],
        };

        let map = file.into_map();
        let status = map.get("Blog").unwrap();
        assert!(!status.enabled);
        assert!(!status.installed);
    }
}
