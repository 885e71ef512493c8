//! Filesystem layer for Bedrock Addon Manager
//!
//! Provides world layout constants, normalized paths, atomic writes and
//! advisory lock files used by the ledger and the extractor.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::WorldPath;
pub use error::{Error, Result};
pub use io::LockGuard;
pub use path::NormalizedPath;
