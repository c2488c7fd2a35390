//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use maint_fs::SourceTree;

/// Check that the subsystem initialization order agrees with the include
/// toposort
#[derive(Parser, Debug)]
#[command(name = "check-subsys-ordering")]
#[command(version, about, long_about = None)]
pub struct CheckOrderingCli {
    /// The output of `tor --dbg-dump-subsystem-list`
    pub subsys_list: PathBuf,

    /// The output of `practracker.includes --toposort`
    pub toposort: PathBuf,

    /// TOML file with extra `[locations]` subsystem overrides
    #[arg(long, value_name = "FILE")]
    pub locations: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Update the version number in various files from configure.ac
#[derive(Parser, Debug)]
#[command(name = "update-versions")]
#[command(about, long_about = None)]
pub struct UpdateVersionsCli {
    /// Only output warnings or errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// The location of the Tor working tree [default: $abs_top_srcdir, then .]
    #[arg(long, value_name = "DIR")]
    pub srcdir: Option<PathBuf>,
}

impl UpdateVersionsCli {
    /// The tree to update: `--srcdir`, else a non-empty `abs_top_srcdir`, else `.`.
    pub fn source_tree(&self) -> SourceTree {
        SourceTree::from_env(self.srcdir.clone())
    }
}
