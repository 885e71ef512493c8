//! Pack scanning and ledger synchronization for Bedrock Addon Manager
//!
//! A Bedrock world lists the packs it loads in two JSON ledgers,
//! `world_resource_packs.json` and `world_behavior_packs.json`. This crate
//! keeps those ledgers in step with the pack folders installed next to
//! them:
//!
//! - **Manifest reader**: pulls `header.uuid` and `header.version` out of
//!   each folder's `manifest.json`
//! - **Ledger**: the persisted list of `{pack_id, version}` records
//! - **PackSynchronizer**: adds new packs, refreshes versions, skips
//!   duplicates and removes orphaned entries, then rewrites the ledger
//!   atomically
//!
//! # Example
//!
//! ```no_run
//! use addon_core::{PackCategory, SyncOptions, World};
//!
//! let world = World::new("/path/to/world");
//! let report = world.sync(PackCategory::Resource, &SyncOptions::default())?;
//! println!("{} packs registered", report.total);
//! # Ok::<(), addon_core::Error>(())
//! ```

pub mod audit;
pub mod category;
pub mod error;
pub mod ledger;
pub mod manifest;
pub mod sync;
pub mod world;

pub use audit::{find_folders_without_manifest, list_pack_folders};
pub use category::PackCategory;
pub use error::{Error, ManifestError, Result};
pub use ledger::{Ledger, PackEntry, PackVersion, Upsert};
pub use manifest::read_manifest;
pub use sync::{FolderOutcome, FolderResult, PackSynchronizer, ScanReport, SyncOptions};
pub use world::World;
