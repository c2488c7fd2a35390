//! Error types for maint-versions

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] maint_fs::Error),

    #[error("Invalid replacement pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("No version found in {path}")]
    VersionNotFound { path: PathBuf },
}
