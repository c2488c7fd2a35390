//! [`TestTree`] builder for maintenance tool test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use maint_fs::{SourceFile, SourceTree};
use tempfile::TempDir;

/// A temporary source checkout with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use maint_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.init_tor_sources("0.4.9.1-dev", "0.4.9.0-dev");
/// tree.assert_file_contains("src/win32/orconfig.h", "0.4.9.0-dev");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A [`SourceTree`] rooted at this directory.
    pub fn source_tree(&self) -> SourceTree {
        SourceTree::new(self.root())
    }

    /// Absolute path of `path` (relative to the root).
    pub fn path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root().join(path)
    }

    /// Write `content` to `path`, creating parent directories.
    pub fn write(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> PathBuf {
        let full_path = self.path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Write a `<level> <name>` listing.
    pub fn write_listing(&self, path: impl AsRef<Path>, entries: &[(i64, &str)]) -> PathBuf {
        let content: String = entries
            .iter()
            .map(|(level, name)| format!("{level} {name}\n"))
            .collect();
        self.write(path, content)
    }

    pub fn read(&self, path: impl AsRef<Path>) -> String {
        let full_path = self.path(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    pub fn read_bytes(&self, path: impl AsRef<Path>) -> Vec<u8> {
        let full_path = self.path(path);
        fs::read(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Lay out the three files the version updater touches.
    ///
    /// `configure.ac` declares `version`; the release date line and both
    /// Windows files still record `previous`.
    pub fn init_tor_sources(&self, version: &str, previous: &str) {
        self.write(
            SourceFile::ConfigureAc,
            format!(
                "AC_PREREQ([2.63])\n\
                 AC_INIT([tor], [{version}])\n\
                 AC_CONFIG_SRCDIR([src/app/main/tor_main.c])\n\
                 \n\
                 # The \"for\" clause records which version the date belongs to.\n\
                 AC_DEFINE(APPROX_RELEASE_DATE, [\"2024-01-15\"], # for {previous}\n\
                 AC_DEFINE_UNQUOTED([APPROX_RELEASE_DATE], [\"2024-01-15\"], [Approximate date])\n"
            ),
        );
        self.write(
            SourceFile::NsisInstaller,
            format!(
                "!include \"MUI.nsh\"\n\
                 !include \"LogicLib.nsh\"\n\
                 !define VERSION \"{previous}\"\n\
                 !define INSTALLER \"tor-${{VERSION}}-win32.exe\"\n"
            ),
        );
        self.write(
            SourceFile::Win32Orconfig,
            format!(
                "/* orconfig.h for Windows -- This file is dual-licensed. */\n\
                 #define HAVE_STDINT_H\n\
                 #define VERSION \"{previous}\"\n\
                 #define USING_TWOS_COMPLEMENT\n"
            ),
        );
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: impl AsRef<Path>) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: impl AsRef<Path>, content: &str) {
        let file_content = self.read(&path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            self.path(&path).display(),
            content,
            file_content
        );
    }

    /// Assert that no `.tmp` staging file is left anywhere under the root.
    pub fn assert_no_temp_files(&self) {
        let mut pending = vec![self.root().to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir).unwrap().filter_map(|e| e.ok()) {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                } else {
                    assert!(
                        !path.to_string_lossy().ends_with(".tmp"),
                        "Staging file left behind: {}",
                        path.display()
                    );
                }
            }
        }
    }
}
