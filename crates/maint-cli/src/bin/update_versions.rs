//! Update the version number in various files from configure.ac.
//!
//! # Environment Variables
//!
//! - `abs_top_srcdir`: the location of the Tor working tree (default `.`)
//! - `RUST_LOG`: log filter for diagnostics on stderr

use clap::Parser;
use clap::error::ErrorKind;
use maint_cli::cli::UpdateVersionsCli;
use maint_cli::{commands, logging, output};

fn main() {
    let cli = match UpdateVersionsCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage mistakes exit 1, not clap's usual 2
            let code = match e.kind() {
                ErrorKind::DisplayHelp => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    logging::init(cli.verbose);

    if let Err(e) = commands::run_update_versions(&cli) {
        output::error(e);
        std::process::exit(1);
    }
}
