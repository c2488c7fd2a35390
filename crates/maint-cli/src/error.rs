//! Error types for maint-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from maint-ordering
    #[error(transparent)]
    Ordering(#[from] maint_ordering::Error),

    /// Error from maint-versions
    #[error(transparent)]
    Versions(#[from] maint_versions::Error),
}
