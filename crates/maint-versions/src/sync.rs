//! Version synchronization over a source tree

use chrono::{NaiveDate, Utc};
use maint_fs::{SourceFile, SourceTree};

use crate::targets::tor_targets;
use crate::{FileUpdate, Result, Target, Version, read_version, update_file};

/// Reads the version from a source tree and pushes it into the targets.
///
/// Targets are updated one at a time. An error stops the run, and targets
/// already updated stay updated.
#[derive(Debug, Clone)]
pub struct VersionSync {
    tree: SourceTree,
    today: NaiveDate,
}

impl VersionSync {
    pub fn new(tree: SourceTree, today: NaiveDate) -> Self {
        Self { tree, today }
    }

    /// Stamp release dates with the current UTC date.
    pub fn today_utc(tree: SourceTree) -> Self {
        Self::new(tree, Utc::now().date_naive())
    }

    pub fn tree(&self) -> &SourceTree {
        &self.tree
    }

    pub fn find_version(&self) -> Result<Version> {
        read_version(&self.tree.path(SourceFile::ConfigureAc))
    }

    pub fn targets(&self, version: &Version) -> Result<Vec<Target>> {
        tor_targets(version, self.today)
    }

    pub fn update(&self, target: &Target) -> Result<FileUpdate> {
        update_file(&self.tree.path(target.file), &target.rule)
    }

    /// Find the version and update every target.
    pub fn run(&self) -> Result<(Version, Vec<FileUpdate>)> {
        let version = self.find_version()?;
        let updates = self
            .targets(&version)?
            .iter()
            .map(|target| self.update(target))
            .collect::<Result<Vec<_>>>()?;
        Ok((version, updates))
    }
}
