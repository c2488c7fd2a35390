//! Ordering checks over a subsystem list and a toposort listing
//!
//! Each check returns the findings it produced rather than bumping a shared
//! counter; [`OrderingChecker::check`] concatenates them into an
//! [`OrderingReport`] in the order they should be shown.

use std::fmt;
use std::path::Path;

use crate::{LevelEntry, LocationOverrides, Result, read_listing};

/// Outcome of looking a subsystem up in the toposort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopoLevel {
    Found(i64),
    /// No override is known and no toposort path ends with `/<name>`.
    NoPath,
    /// An override is known, but neither it nor a suffix match appears in
    /// the toposort.
    NotInSorting { location: String },
}

impl TopoLevel {
    pub fn level(&self) -> Option<i64> {
        match self {
            Self::Found(level) => Some(*level),
            _ => None,
        }
    }
}

/// A single diagnostic from the ordering checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// A subsystem declares a lower level than the one initialized before it.
    LevelDecrease { subsystem: String },
    /// The subsystem could not be located in the toposort.
    NoPath { subsystem: String },
    /// The subsystem's override location is missing from the toposort.
    NotInSorting { subsystem: String, location: String },
    /// A subsystem's toposort level is lower than that of the last located
    /// subsystem before it.
    TopologyMismatch { subsystem: String },
}

impl Finding {
    /// Whether this finding makes the ordering inconsistent. Lookup misses
    /// are reported but do not count.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            Self::LevelDecrease { .. } | Self::TopologyMismatch { .. }
        )
    }

    pub fn subsystem(&self) -> &str {
        match self {
            Self::LevelDecrease { subsystem }
            | Self::NoPath { subsystem }
            | Self::NotInSorting { subsystem, .. }
            | Self::TopologyMismatch { subsystem } => subsystem,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelDecrease { subsystem } => {
                write!(f, "Levels are decreasing, starting with {subsystem}")
            }
            Self::NoPath { subsystem } => write!(f, "No path found for {subsystem}"),
            Self::NotInSorting {
                subsystem,
                location,
            } => write!(
                f,
                "No topological level found for {subsystem} in {location}"
            ),
            Self::TopologyMismatch { subsystem } => write!(
                f,
                "Topological levels are mismatched with system levels, starting with {subsystem}"
            ),
        }
    }
}

/// Accumulated findings of one or more checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderingReport {
    findings: Vec<Finding>,
}

impl OrderingReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    /// All findings, in reporting order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Number of findings that count as violations.
    pub fn violations(&self) -> usize {
        self.findings.iter().filter(|f| f.is_violation()).count()
    }

    pub fn is_consistent(&self) -> bool {
        self.violations() == 0
    }
}

/// Declared levels must not decrease along the initialization order.
///
/// Every decreasing consecutive pair is reported against its second entry.
pub fn check_level_order(subsystems: &[LevelEntry]) -> Vec<Finding> {
    subsystems
        .windows(2)
        .filter(|pair| pair[0].level > pair[1].level)
        .map(|pair| Finding::LevelDecrease {
            subsystem: pair[1].name.clone(),
        })
        .collect()
}

/// Checks a subsystem list against a toposort listing.
#[derive(Debug, Clone, Copy)]
pub struct OrderingChecker<'a> {
    sorting: &'a [LevelEntry],
    overrides: &'a LocationOverrides,
}

impl<'a> OrderingChecker<'a> {
    pub fn new(sorting: &'a [LevelEntry], overrides: &'a LocationOverrides) -> Self {
        Self { sorting, overrides }
    }

    /// Find the toposort level of `subsystem`.
    ///
    /// The first toposort entry (in file order) whose path ends with
    /// `/<subsystem>` or equals the subsystem's override location wins.
    pub fn topological_level(&self, subsystem: &str) -> TopoLevel {
        let location = self.overrides.get(subsystem);
        let suffix = format!("/{subsystem}");

        let found = self
            .sorting
            .iter()
            .find(|entry| entry.name.ends_with(&suffix) || Some(entry.name.as_str()) == location);

        match (found, location) {
            (Some(entry), _) => {
                tracing::debug!(subsystem, path = %entry.name, level = entry.level, "Located subsystem");
                TopoLevel::Found(entry.level)
            }
            (None, Some(location)) => TopoLevel::NotInSorting {
                location: location.to_string(),
            },
            (None, None) => TopoLevel::NoPath,
        }
    }

    /// Toposort levels of locatable subsystems must not decrease along the
    /// initialization order.
    ///
    /// Subsystems that cannot be located are reported and skipped; the
    /// comparison resumes against the last subsystem that was located.
    pub fn check_topological_order(&self, subsystems: &[LevelEntry]) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut last_level: Option<i64> = None;

        for entry in subsystems {
            match self.topological_level(&entry.name) {
                TopoLevel::Found(level) => {
                    if last_level.is_some_and(|last| last > level) {
                        findings.push(Finding::TopologyMismatch {
                            subsystem: entry.name.clone(),
                        });
                    }
                    last_level = Some(level);
                }
                TopoLevel::NoPath => findings.push(Finding::NoPath {
                    subsystem: entry.name.clone(),
                }),
                TopoLevel::NotInSorting { location } => findings.push(Finding::NotInSorting {
                    subsystem: entry.name.clone(),
                    location,
                }),
            }
        }

        findings
    }

    /// Run both checks: declared levels first, then toposort levels.
    pub fn check(&self, subsystems: &[LevelEntry]) -> OrderingReport {
        let mut report = OrderingReport::new();
        report.extend(check_level_order(subsystems));
        report.extend(self.check_topological_order(subsystems));
        tracing::info!(
            subsystems = subsystems.len(),
            violations = report.violations(),
            "Ordering check complete"
        );
        report
    }
}

/// Read both listings from disk and check them.
pub fn check_files(
    subsystems_path: &Path,
    toposort_path: &Path,
    overrides: &LocationOverrides,
) -> Result<OrderingReport> {
    let subsystems = read_listing(subsystems_path)?;
    let sorting = read_listing(toposort_path)?;
    Ok(OrderingChecker::new(&sorting, overrides).check(&subsystems))
}
