//! Line streaming and staged rewrites
//!
//! A rewrite streams the original file through [`LineReader`] into a
//! [`StagedFile`] next to it (`<name>.tmp`). Once every line is written the
//! staged copy is either renamed over the original or deleted, so the
//! original is never left half-written.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result, TextEncoding};

/// Reads a text file one line at a time, terminators included.
#[derive(Debug)]
pub struct LineReader {
    path: PathBuf,
    reader: BufReader<File>,
    encoding: TextEncoding,
    line: usize,
}

impl LineReader {
    pub fn open(path: impl Into<PathBuf>, encoding: TextEncoding) -> Result<Self> {
        let path = path.into();
        let file = File::open(&path).map_err(|e| Error::io(&path, e))?;
        Ok(Self {
            path,
            reader: BufReader::new(file),
            encoding,
            line: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Read the next line, keeping its `\n` (or `\r\n`) terminator.
    ///
    /// Returns `Ok(None)` at end of file.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io(&self.path, e))?;
        if read == 0 {
            return Ok(None);
        }
        self.line += 1;

        self.encoding
            .decode(buf)
            .map(Some)
            .ok_or_else(|| Error::Decode {
                path: self.path.clone(),
                line: self.line,
                encoding: self.encoding,
            })
    }
}

impl Iterator for LineReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

/// Destination for rewritten lines.
pub trait LineSink {
    /// Write one line exactly as given; the caller supplies any terminator.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_owned());
        Ok(())
    }
}

/// What happened to the original file when a [`StagedFile`] was finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The staged copy was renamed over the original.
    Replaced,
    /// The staged copy was deleted and the original left as it was.
    Unchanged,
}

/// Path of the staging file used for `target`: the same name plus `.tmp`.
pub fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// A sibling `.tmp` copy of a file being rewritten.
///
/// The staging file is held under an exclusive advisory lock while it is
/// written. Dropping a `StagedFile` without calling [`StagedFile::finish`]
/// (for instance when an error aborts the rewrite) removes the staging file.
#[derive(Debug)]
pub struct StagedFile {
    target: PathBuf,
    temp_path: PathBuf,
    writer: Option<BufWriter<File>>,
    encoding: TextEncoding,
    settled: bool,
}

impl StagedFile {
    pub fn create(target: impl Into<PathBuf>, encoding: TextEncoding) -> Result<Self> {
        let target = target.into();
        let temp_path = temp_path_for(&target);

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::io(&temp_path, e))?;

        FileExt::lock_exclusive(&file).map_err(|_| Error::LockFailed {
            path: temp_path.clone(),
        })?;

        Ok(Self {
            target,
            temp_path,
            writer: Some(BufWriter::new(file)),
            encoding,
            settled: false,
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Replace the target with the staged copy if `changed`, otherwise
    /// delete the staged copy.
    pub fn finish(mut self, changed: bool) -> Result<Disposition> {
        let disposition = if changed {
            self.commit()?;
            Disposition::Replaced
        } else {
            self.discard()?;
            Disposition::Unchanged
        };
        self.settled = true;
        tracing::debug!(target_path = %self.target.display(), ?disposition, "Staged file finished");
        Ok(disposition)
    }

    fn commit(&mut self) -> Result<()> {
        let Some(writer) = self.writer.take() else {
            return Ok(());
        };
        let file = writer
            .into_inner()
            .map_err(|e| Error::io(&self.temp_path, e.into_error()))?;

        // Flush to disk before the rename makes the new content visible
        file.sync_all()
            .map_err(|e| Error::io(&self.temp_path, e))?;

        FileExt::unlock(&file).map_err(|_| Error::LockFailed {
            path: self.temp_path.clone(),
        })?;
        drop(file);

        fs::rename(&self.temp_path, &self.target).map_err(|e| Error::io(&self.target, e))
    }

    fn discard(&mut self) -> Result<()> {
        drop(self.writer.take());
        fs::remove_file(&self.temp_path).map_err(|e| Error::io(&self.temp_path, e))
    }
}

impl LineSink for StagedFile {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let bytes = self.encoding.encode(line).map_err(|ch| Error::Encode {
            path: self.target.clone(),
            ch,
            encoding: self.encoding,
        })?;
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| Error::io(&self.temp_path, std::io::ErrorKind::BrokenPipe.into()))?;
        writer
            .write_all(&bytes)
            .map_err(|e| Error::io(&self.temp_path, e))
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.settled {
            drop(self.writer.take());
            if let Err(e) = fs::remove_file(&self.temp_path) {
                tracing::warn!("Failed to remove {}: {}", self.temp_path.display(), e);
            }
        }
    }
}
