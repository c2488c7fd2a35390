//! Filesystem layer for the maintenance tools
//!
//! Resolves paths inside the source tree, streams text files line by line
//! in a chosen encoding, and stages rewrites in a sibling `.tmp` file that
//! is either renamed over the original or discarded.

pub mod constants;
pub mod encoding;
pub mod error;
pub mod io;
pub mod tree;

pub use constants::SourceFile;
pub use encoding::TextEncoding;
pub use error::{Error, Result};
pub use io::{Disposition, LineReader, LineSink, StagedFile};
pub use tree::SourceTree;
