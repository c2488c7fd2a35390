//! Command implementations

mod ordering;
mod versions;

pub use ordering::run_check_ordering;
pub use versions::run_update_versions;
