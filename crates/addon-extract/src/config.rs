//! Extraction settings
//!
//! Read from the `[extract]` table of `addons.toml`.

use serde::{Deserialize, Serialize};

use crate::decider::{AmbiguityPolicy, ConflictPolicy};

/// Settings controlling where archives are read from and how
/// undecidable cases are handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Directory under the world root holding downloaded archives
    pub downloads_dir: String,
    /// Scratch directory under the world root used while unpacking
    pub temp_dir: String,
    pub on_conflict: ConflictPolicy,
    pub on_ambiguous: AmbiguityPolicy,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            downloads_dir: addon_fs::WorldPath::DownloadedAddons.as_str().to_string(),
            temp_dir: addon_fs::WorldPath::Temp.as_str().to_string(),
            on_conflict: ConflictPolicy::default(),
            on_ambiguous: AmbiguityPolicy::default(),
        }
    }
}
