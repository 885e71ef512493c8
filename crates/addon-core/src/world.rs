//! A Bedrock world folder and its two pack categories

use addon_fs::NormalizedPath;

use crate::category::PackCategory;
use crate::sync::{PackSynchronizer, ScanReport, SyncOptions};
use crate::{Result, audit};

/// A world root containing `resource_packs/`, `behavior_packs/` and the
/// matching `world_*_packs.json` ledgers.
#[derive(Debug, Clone)]
pub struct World {
    root: NormalizedPath,
}

impl World {
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Directory holding the pack folders of `category`.
    pub fn pack_root(&self, category: PackCategory) -> NormalizedPath {
        self.root.join(category.pack_dir())
    }

    /// Ledger file of `category`.
    pub fn ledger_path(&self, category: PackCategory) -> NormalizedPath {
        self.root.join(category.ledger_file())
    }

    /// Synchronize one category's ledger with its pack folders.
    pub fn sync(&self, category: PackCategory, options: &SyncOptions) -> Result<ScanReport> {
        let span = tracing::info_span!("sync", category = %category);
        let _enter = span.enter();
        PackSynchronizer::new(options.clone())
            .sync(&self.pack_root(category), &self.ledger_path(category))
    }

    /// Synchronize every category independently.
    ///
    /// A fatal error in one category does not prevent the others from
    /// running; each result is returned alongside its category.
    pub fn sync_all(&self, options: &SyncOptions) -> Vec<(PackCategory, Result<ScanReport>)> {
        PackCategory::ALL
            .into_iter()
            .map(|category| (category, self.sync(category, options)))
            .collect()
    }

    /// Folders of `category` that lack a `manifest.json`.
    pub fn folders_without_manifest(&self, category: PackCategory) -> Result<Vec<String>> {
        audit::find_folders_without_manifest(&self.pack_root(category))
    }

    /// Currently installed folders of `category`.
    pub fn installed_folders(&self, category: PackCategory) -> Result<Vec<String>> {
        audit::list_pack_folders(&self.pack_root(category))
    }
}
