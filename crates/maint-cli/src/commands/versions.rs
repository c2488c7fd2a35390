//! `update-versions` implementation

use maint_versions::{FileStatus, VersionSync};

use crate::Result;
use crate::cli::UpdateVersionsCli;
use crate::output::{self, Notifier};

/// Find the version in `configure.ac` and update every target file.
///
/// Stops at the first error; files already updated are kept.
pub fn run_update_versions(cli: &UpdateVersionsCli) -> Result<()> {
    let notifier = Notifier::new(cli.quiet);
    let sync = VersionSync::today_utc(cli.source_tree());

    let version = sync.find_version()?;
    notifier.note(format_args!("The version is {version}"));

    for target in sync.targets(&version)? {
        let update = sync.update(&target)?;
        if !update.pattern_found() {
            output::warn(format_args!(
                "didn't find any version line to replace in {}",
                update.path.display()
            ));
        }
        match update.status {
            FileStatus::Updated => notifier.note(format_args!("Updating {}", update.path.display())),
            FileStatus::Unchanged => {
                notifier.note(format_args!("No change in {}", update.path.display()))
            }
        }
    }

    Ok(())
}
