//! Parsing of `<level> <name>` listings

use std::path::Path;
use std::str::FromStr;

use maint_fs::{LineReader, TextEncoding};

use crate::{Error, Result};

/// One line of a subsystem list or toposort listing.
///
/// In a subsystem list `name` is a subsystem name (`"threads"`); in a
/// toposort it is a source directory (`"src/lib/thread"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEntry {
    pub level: i64,
    pub name: String,
}

impl LevelEntry {
    pub fn new(level: i64, name: impl Into<String>) -> Self {
        Self {
            level,
            name: name.into(),
        }
    }
}

impl FromStr for LevelEntry {
    type Err = &'static str;

    /// Parse `<level> <name...>`. Surrounding whitespace is ignored and the
    /// name is everything after the first run of whitespace.
    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let (level, name) = line
            .trim()
            .split_once(char::is_whitespace)
            .ok_or("expected `<level> <name>`")?;
        let name = name.trim_start();
        if name.is_empty() {
            return Err("expected `<level> <name>`");
        }
        let level = level.parse().map_err(|_| "level is not an integer")?;
        Ok(Self::new(level, name))
    }
}

fn parse_line(origin: &Path, line_no: usize, text: &str) -> Result<LevelEntry> {
    text.parse().map_err(|reason| Error::MalformedLine {
        path: origin.to_path_buf(),
        line: line_no,
        text: text.trim_end_matches(['\r', '\n']).to_string(),
        reason,
    })
}

/// Parse an in-memory listing. `origin` only labels errors.
pub fn parse_listing(origin: &Path, text: &str) -> Result<Vec<LevelEntry>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| parse_line(origin, idx + 1, line))
        .collect()
}

/// Read and parse a listing file, preserving line order.
pub fn read_listing(path: &Path) -> Result<Vec<LevelEntry>> {
    let mut reader = LineReader::open(path, TextEncoding::Utf8)?;
    let mut entries = Vec::new();
    while let Some(line) = reader.read_line()? {
        entries.push(parse_line(path, reader.line_number(), &line)?);
    }
    tracing::debug!(path = %path.display(), entries = entries.len(), "Read listing");
    Ok(entries)
}
