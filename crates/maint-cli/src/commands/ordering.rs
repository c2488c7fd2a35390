//! `check-subsys-ordering` implementation

use maint_ordering::{LocationOverrides, check_files};

use crate::Result;
use crate::cli::CheckOrderingCli;

/// Run the ordering check, printing each finding to stderr.
///
/// Returns whether the ordering is consistent.
pub fn run_check_ordering(cli: &CheckOrderingCli) -> Result<bool> {
    let overrides = match &cli.locations {
        Some(path) => LocationOverrides::load(path)?,
        None => LocationOverrides::builtin(),
    };

    let report = check_files(&cli.subsys_list, &cli.toposort, &overrides)?;
    for finding in report.findings() {
        eprintln!("{finding}");
    }

    Ok(report.is_consistent())
}
