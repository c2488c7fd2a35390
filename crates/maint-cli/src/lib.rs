//! Command-line front ends for the maintenance tools
//!
//! Two binaries share this crate:
//!
//! - `check-subsys-ordering` checks the subsystem initialization order
//!   against the include toposort;
//! - `update-versions` pushes the `configure.ac` version into the files
//!   that repeat it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

pub use error::{CliError, Result};
