//! Command implementations for addon-cli

pub mod extract;
pub mod manage;
pub mod missing;
pub mod scan;

pub use extract::run_extract;
pub use manage::run_manage;
pub use missing::run_missing;
pub use scan::run_scan;
