//! The files that repeat Tor's version, and how each is rewritten.

use chrono::NaiveDate;
use maint_fs::{SourceFile, TextEncoding};

use crate::{ReplacementRule, Result, Version};

/// `AC_DEFINE(APPROX_RELEASE_DATE, ["<date>"], # for <version>`
const RELEASE_DATE_PATTERN: &str = r"AC_DEFINE\(APPROX_RELEASE_DATE.* for (.*)";
const NSIS_VERSION_PATTERN: &str = r"!define VERSION .*";
const ORCONFIG_VERSION_PATTERN: &str = r"#define VERSION .*";

/// A file in the source tree together with the rule that updates it.
#[derive(Debug)]
pub struct Target {
    pub file: SourceFile,
    pub rule: ReplacementRule,
}

/// Rewrites the approximate release date in `configure.ac`.
///
/// The line records the version the date was set for. The date moves to
/// `today` only when that version differs from `version`; otherwise the
/// line is reproduced as is.
pub fn release_date_rule(version: &Version, today: NaiveDate) -> Result<ReplacementRule> {
    let version = version.clone();
    let today = today.format("%Y-%m-%d").to_string();

    ReplacementRule::derived(RELEASE_DATE_PATTERN, move |caps| {
        if caps[1] != *version.as_str() {
            format!("AC_DEFINE(APPROX_RELEASE_DATE, [\"{today}\"], # for {version}")
        } else {
            caps[0].to_string()
        }
    })
}

/// Rewrites `!define VERSION` in the NSIS installer template.
pub fn nsis_version_rule(version: &Version) -> Result<ReplacementRule> {
    Ok(
        ReplacementRule::literal(NSIS_VERSION_PATTERN, format!("!define VERSION \"{version}\""))?
            .with_encoding(TextEncoding::Latin1),
    )
}

/// Rewrites `#define VERSION` in the Windows `orconfig.h`.
pub fn orconfig_version_rule(version: &Version) -> Result<ReplacementRule> {
    ReplacementRule::literal(
        ORCONFIG_VERSION_PATTERN,
        format!("#define VERSION \"{version}\""),
    )
}

/// Every target, in the order they are processed.
pub fn tor_targets(version: &Version, today: NaiveDate) -> Result<Vec<Target>> {
    Ok(vec![
        Target {
            file: SourceFile::ConfigureAc,
            rule: release_date_rule(version, today)?,
        },
        Target {
            file: SourceFile::NsisInstaller,
            rule: nsis_version_rule(version)?,
        },
        Target {
            file: SourceFile::Win32Orconfig,
            rule: orconfig_version_rule(version)?,
        },
    ])
}
