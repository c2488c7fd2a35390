//! Error types for maint-fs

use std::path::PathBuf;

use crate::TextEncoding;

/// Result type for maint-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in maint-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: not valid {encoding} text")]
    Decode {
        path: PathBuf,
        line: usize,
        encoding: TextEncoding,
    },

    #[error("{path}: character {ch:?} cannot be written as {encoding}")]
    Encode {
        path: PathBuf,
        ch: char,
        encoding: TextEncoding,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
