//! Constants for the Bedrock world folder layout.

use std::path::Path;

/// Well-known entries under a world root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldPath {
    /// The `resource_packs` directory
    ResourcePacks,
    /// The `behavior_packs` directory
    BehaviorPacks,
    /// The `world_resource_packs.json` ledger
    ResourceLedger,
    /// The `world_behavior_packs.json` ledger
    BehaviorLedger,
    /// The `downloaded_addons` directory holding `.mcaddon`/`.mcpack` archives
    DownloadedAddons,
    /// Scratch directory used while unpacking archives
    Temp,
    /// Optional `addons.toml` settings file
    ConfigFile,
    /// The per-pack declaration file name
    Manifest,
}

impl WorldPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResourcePacks => "resource_packs",
            Self::BehaviorPacks => "behavior_packs",
            Self::ResourceLedger => "world_resource_packs.json",
            Self::BehaviorLedger => "world_behavior_packs.json",
            Self::DownloadedAddons => "downloaded_addons",
            Self::Temp => "temp",
            Self::ConfigFile => "addons.toml",
            Self::Manifest => "manifest.json",
        }
    }
}

impl AsRef<Path> for WorldPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for WorldPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for WorldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
