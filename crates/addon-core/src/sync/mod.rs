//! Pack directory synchronization

mod report;
mod synchronizer;

pub use report::{FolderOutcome, FolderResult, ScanReport};
pub use synchronizer::{PackSynchronizer, SyncOptions};

pub(crate) use synchronizer::{PackFolder, pack_folders};
