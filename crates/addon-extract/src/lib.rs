//! Unpacks Bedrock add-on archives into a world's pack folders
//!
//! `.mcaddon` bundles and `.mcpack` files dropped into
//! `downloaded_addons/` are unzipped, classified as behavior or resource
//! packs from their folder names, and moved into `behavior_packs/` or
//! `resource_packs/`. Anything the naming heuristic cannot place, and any
//! name collision, is resolved through a [`PackDecider`].

pub mod archive;
pub mod classify;
pub mod config;
pub mod decider;
pub mod error;
pub mod extractor;
pub mod mover;

pub use archive::ArchiveKind;
pub use classify::{PackKind, classify_folder_name};
pub use config::ExtractConfig;
pub use decider::{AmbiguityPolicy, ConflictAction, ConflictPolicy, FixedDecider, PackDecider};
pub use error::{Error, Result};
pub use extractor::{ExtractionStats, Extractor};
pub use mover::{Placement, place_folder, unique_folder_name};
