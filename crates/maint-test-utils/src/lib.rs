//! Shared test utilities for the maint-tools workspace.
//!
//! This crate provides standardised fixtures so the library and CLI test
//! suites build source trees the same way. It is a dev-dependency only —
//! never published.
//!
//! # Modules
//!
//! - [`tree`] — [`TestTree`] builder for temporary source checkouts

pub mod tree;

pub use tree::TestTree;
