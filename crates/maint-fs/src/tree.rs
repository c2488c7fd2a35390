//! Source tree root resolution

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// The root of a source checkout. All tool paths are resolved against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTree {
    root: PathBuf,
}

impl SourceTree {
    /// Environment variable naming the source root, as set by the build system.
    pub const ROOT_ENV: &'static str = "abs_top_srcdir";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Pick the root from an explicit path, then `env_value`, then `.`.
    ///
    /// An empty environment value counts as unset.
    pub fn resolve(explicit: Option<PathBuf>, env_value: Option<OsString>) -> Self {
        explicit
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
            .map(Self::new)
            .unwrap_or_default()
    }

    /// [`SourceTree::resolve`] against the process's `abs_top_srcdir`.
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        Self::resolve(explicit, std::env::var_os(Self::ROOT_ENV))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a tree-relative path onto the root.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

impl Default for SourceTree {
    fn default() -> Self {
        Self::new(".")
    }
}
