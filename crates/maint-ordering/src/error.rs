//! Error types for maint-ordering

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] maint_fs::Error),

    #[error("{path}:{line}: {reason}: {text:?}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        text: String,
        reason: &'static str,
    },

    #[error("Failed to parse location overrides at {path}: {message}")]
    Config { path: PathBuf, message: String },
}
