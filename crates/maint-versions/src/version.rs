//! Extraction of the version from `configure.ac`

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use maint_fs::{LineReader, TextEncoding};
use regex::Regex;

use crate::{Error, Result};

/// Matches `AC_INIT([tor], [<version>])` anywhere on a line.
static AC_INIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"AC_INIT\(\[tor\],\s*\[([^\]]*)\]\)").expect("Invalid AC_INIT regex")
});

/// The version declared by `AC_INIT`, e.g. `0.4.9.1-dev`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Return the version from the first line carrying an `AC_INIT` for tor.
pub fn find_version<I, S>(lines: I) -> Option<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().find_map(|line| {
        AC_INIT_REGEX
            .captures(line.as_ref())
            .map(|caps| Version::new(&caps[1]))
    })
}

/// Stream `configure.ac` until the version line is found.
pub fn read_version(path: &Path) -> Result<Version> {
    let mut reader = LineReader::open(path, TextEncoding::Utf8)?;
    while let Some(line) = reader.read_line()? {
        if let Some(version) = find_version([&line]) {
            tracing::debug!(%version, line = reader.line_number(), "Found version");
            return Ok(version);
        }
    }
    Err(Error::VersionNotFound {
        path: path.to_path_buf(),
    })
}
