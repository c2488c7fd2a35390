//! Check that Tor's subsystem initialization order agrees with the
//! include toposort.
//!
//! Exits 0 when consistent and 1 when any violation is found or an input
//! cannot be read.

use clap::Parser;
use colored::Colorize;
use maint_cli::cli::CheckOrderingCli;
use maint_cli::{commands, logging};

fn main() {
    let cli = CheckOrderingCli::parse();
    logging::init(cli.verbose);

    match commands::run_check_ordering(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}
