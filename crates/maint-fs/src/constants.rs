//! Well-known files inside the Tor source tree.

use std::path::Path;

/// Files the maintenance tools read or rewrite, relative to the source root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFile {
    /// `configure.ac`, the source of truth for the version
    ConfigureAc,
    /// The NSIS installer script template for Windows builds
    NsisInstaller,
    /// The hand-maintained Windows `orconfig.h`
    Win32Orconfig,
}

impl SourceFile {
    /// Get the path relative to the source root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigureAc => "configure.ac",
            Self::NsisInstaller => "contrib/win32build/tor-mingw.nsi.in",
            Self::Win32Orconfig => "src/win32/orconfig.h",
        }
    }
}

impl AsRef<Path> for SourceFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
