//! User-facing notices, warnings and errors

use std::fmt::Display;

use colored::Colorize;

/// Prints notices to stdout unless quiet.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    quiet: bool,
}

impl Notifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn note(&self, message: impl Display) {
        if !self.quiet {
            println!("{message}");
        }
    }
}

pub fn warn(message: impl Display) {
    eprintln!("{}: {}", "WARNING".yellow().bold(), message);
}

pub fn error(message: impl Display) {
    eprintln!("{}: {}", "ERROR".red().bold(), message);
}
