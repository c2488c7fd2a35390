//! Subsystem ordering checks
//!
//! Tor reports the order in which it initializes its subsystems, each with
//! a self-declared level (`tor --dbg-dump-subsystem-list`). The include
//! analyzer separately ranks every source directory by dependency depth
//! (`practracker.includes --toposort`). This crate checks that the two
//! agree:
//!
//! 1. declared levels never decrease along the initialization order;
//! 2. the toposort levels of subsystems that can be located never decrease
//!    along the same order.

pub mod check;
pub mod error;
pub mod listing;
pub mod locations;

pub use check::{Finding, OrderingChecker, OrderingReport, TopoLevel, check_files, check_level_order};
pub use error::{Error, Result};
pub use listing::{LevelEntry, parse_listing, read_listing};
pub use locations::LocationOverrides;
