//! `addons.toml` settings

use std::path::Path;

use addon_extract::ExtractConfig;
use addon_fs::{ConfigStore, NormalizedPath, WorldPath};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Contents of the optional settings file in the world root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub extract: ExtractConfig,
}

impl Settings {
    /// Load settings from `explicit`, or from `addons.toml` in the world
    /// root. A missing default file yields defaults; a missing explicit
    /// file is an error.
    pub fn load(world_root: &NormalizedPath, explicit: Option<&Path>) -> Result<Self> {
        let store = ConfigStore::new();
        match explicit {
            Some(path) => Ok(store.load(&NormalizedPath::new(path))?),
            None => Ok(store.load_or_default(&world_root.join(WorldPath::ConfigFile))?),
        }
    }
}
