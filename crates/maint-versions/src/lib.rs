//! Version propagation
//!
//! `configure.ac` is the single source of truth for Tor's version. A few
//! files repeat it and cannot be generated by autoconf (the Windows build
//! files in particular). This crate reads the version and rewrites the
//! matching line of each of those files, leaving a file untouched when
//! nothing about it would change.

pub mod error;
pub mod rule;
pub mod sync;
pub mod targets;
pub mod update;
pub mod version;

pub use error::{Error, Result};
pub use rule::{Replacement, ReplacementRule};
pub use sync::VersionSync;
pub use targets::Target;
pub use update::{FileStatus, FileUpdate, RewriteSummary, rewrite_lines, update_file};
pub use version::{Version, find_version, read_version};
