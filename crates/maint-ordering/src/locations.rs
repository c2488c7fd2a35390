//! Subsystems whose initialization code does not live in a directory
//! named after them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// Built-in override locations, relative to `src/`.
const BUILTIN_LOCATIONS: &[(&str, &str)] = &[
    ("btrack", "feature/control"),
    ("network", "lib/net"),
    ("ocirc_event", "core/or"),
    ("orconn_event", "core/or"),
    ("relay", "feature/relay"),
    ("threads", "lib/thread"),
    ("tortls", "lib/tls"),
    ("winprocess", "lib/process"),
];

/// Mapping from subsystem name to the toposort path that stands in for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationOverrides {
    locations: BTreeMap<String, String>,
}

/// On-disk form of an override file:
///
/// ```toml
/// [locations]
/// btrack = "feature/control"
/// ```
#[derive(Debug, Default, Deserialize)]
struct OverrideFile {
    #[serde(default)]
    locations: BTreeMap<String, String>,
}

impl LocationOverrides {
    /// The overrides Tor ships with.
    pub fn builtin() -> Self {
        Self {
            locations: BUILTIN_LOCATIONS
                .iter()
                .map(|(name, path)| (name.to_string(), path.to_string()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            locations: BTreeMap::new(),
        }
    }

    /// Built-in overrides with the entries of a TOML file layered on top.
    pub fn load(path: &Path) -> Result<Self> {
        let mut overrides = Self::builtin();
        overrides.merge_file(path)?;
        Ok(overrides)
    }

    /// Merge a TOML override file over the current entries.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content =
            std::fs::read_to_string(path).map_err(|e| maint_fs::Error::io(path, e))?;
        let file: OverrideFile = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), entries = file.locations.len(), "Loaded location overrides");
        self.locations.extend(file.locations);
        Ok(())
    }

    pub fn insert(&mut self, name: impl Into<String>, location: impl Into<String>) {
        self.locations.insert(name.into(), location.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.locations.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl Default for LocationOverrides {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_contains_known_subsystems() {
        let overrides = LocationOverrides::builtin();
        assert_eq!(overrides.len(), 8);
        assert_eq!(overrides.get("threads"), Some("lib/thread"));
        assert_eq!(overrides.get("orconn_event"), Some("core/or"));
        assert_eq!(overrides.get("mainloop"), None);
    }

    #[test]
    fn test_file_entries_override_builtins() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("locations.toml");
        fs::write(
            &path,
            "[locations]\nthreads = \"lib/evloop\"\nhs = \"feature/hs\"\n",
        )
        .unwrap();

        let overrides = LocationOverrides::load(&path).unwrap();
        assert_eq!(overrides.get("threads"), Some("lib/evloop"));
        assert_eq!(overrides.get("hs"), Some("feature/hs"));
        assert_eq!(overrides.get("tortls"), Some("lib/tls"));
    }

    #[test]
    fn test_file_without_table_adds_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("locations.toml");
        fs::write(&path, "# nothing to override\n").unwrap();

        assert_eq!(
            LocationOverrides::load(&path).unwrap(),
            LocationOverrides::builtin()
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("locations.toml");
        fs::write(&path, "[locations\n").unwrap();

        assert!(matches!(
            LocationOverrides::load(&path),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_fs_error() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            LocationOverrides::load(&temp.path().join("absent.toml")),
            Err(Error::Fs(_))
        ));
    }
}
