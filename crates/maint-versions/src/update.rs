//! Streaming rewrite of a single file

use std::path::{Path, PathBuf};

use maint_fs::{Disposition, LineReader, LineSink, StagedFile};

use crate::{ReplacementRule, Result};

/// Line counts from one rewrite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Lines that matched the rule's pattern.
    pub matched: usize,
    /// Matched lines whose replacement differs from the original.
    pub changed: usize,
}

impl RewriteSummary {
    pub fn found(&self) -> bool {
        self.matched > 0
    }

    pub fn has_changed(&self) -> bool {
        self.changed > 0
    }
}

/// Copy every line to `sink`, replacing those that match `rule`.
pub fn rewrite_lines<I, S>(lines: I, sink: &mut S, rule: &ReplacementRule) -> Result<RewriteSummary>
where
    I: IntoIterator<Item = maint_fs::Result<String>>,
    S: LineSink + ?Sized,
{
    let mut summary = RewriteSummary::default();

    for line in lines {
        let line = line?;
        match rule.rewrite(&line) {
            Some(replaced) => {
                summary.matched += 1;
                if replaced != line {
                    tracing::debug!(old = line.trim_end(), new = replaced.trim_end(), "Rewriting line");
                    summary.changed += 1;
                }
                sink.write_line(&replaced)?;
            }
            None => sink.write_line(&line)?,
        }
    }

    Ok(summary)
}

/// Whether a file was rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Updated,
    Unchanged,
}

/// Result of applying a rule to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdate {
    pub path: PathBuf,
    pub status: FileStatus,
    pub matched_lines: usize,
}

impl FileUpdate {
    /// False when no line matched, i.e. the version could not be placed.
    pub fn pattern_found(&self) -> bool {
        self.matched_lines > 0
    }
}

/// Apply `rule` to the file at `path`.
///
/// The file is streamed into `<path>.tmp`, which replaces the original only
/// if some line changed; otherwise it is deleted and the original keeps its
/// exact bytes.
pub fn update_file(path: &Path, rule: &ReplacementRule) -> Result<FileUpdate> {
    let reader = LineReader::open(path, rule.encoding())?;
    let mut staged = StagedFile::create(path, rule.encoding())?;

    let summary = rewrite_lines(reader, &mut staged, rule)?;
    if !summary.found() {
        tracing::warn!(path = %path.display(), pattern = rule.pattern(), "No line matched");
    }

    let status = match staged.finish(summary.has_changed())? {
        Disposition::Replaced => FileStatus::Updated,
        Disposition::Unchanged => FileStatus::Unchanged,
    };
    tracing::info!(path = %path.display(), ?status, changed = summary.changed, "Processed file");

    Ok(FileUpdate {
        path: path.to_path_buf(),
        status,
        matched_lines: summary.matched,
    })
}
