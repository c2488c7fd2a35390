//! Tracing setup shared by the binaries
//!
//! Logs always go to stderr. Without `--verbose` a subscriber is installed
//! only when `RUST_LOG` is set, so normal output stays limited to the
//! tools' own notices and diagnostics.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let filter = if verbose {
        Some(EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().ok()
    };

    if let Some(filter) = filter {
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
        if installed.is_ok() {
            tracing::debug!("Verbose logging enabled");
        }
    }
}
