//! Archive extraction run over a world's download folder

use std::fs;
use std::path::{Path, PathBuf};

use addon_core::{PackCategory, World};

use crate::archive::{self, ArchiveKind};
use crate::classify::classify_folder_name;
use crate::config::ExtractConfig;
use crate::decider::PackDecider;
use crate::mover::{Placement, place_folder};
use crate::{Error, Result};

/// Totals for one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub mcaddons_processed: usize,
    pub mcpacks_processed: usize,
    pub behavior_moved: usize,
    pub resource_moved: usize,
    pub skipped: usize,
    pub errors: usize,
    /// Human-readable log of every placement, e.g. `Dragons BP -> behavior_packs/Dragons BP`
    pub moves: Vec<String>,
    /// Archives that failed, with the reason
    pub failures: Vec<String>,
}

impl ExtractionStats {
    pub fn archives_processed(&self) -> usize {
        self.mcaddons_processed + self.mcpacks_processed
    }

    pub fn packs_moved(&self) -> usize {
        self.behavior_moved + self.resource_moved
    }

    fn record_moved(&mut self, category: PackCategory) {
        match category {
            PackCategory::Behavior => self.behavior_moved += 1,
            PackCategory::Resource => self.resource_moved += 1,
        }
    }

    fn record_failure(&mut self, archive: &Path, error: &Error) {
        tracing::error!(archive = %archive.display(), %error, "extraction failed");
        self.errors += 1;
        self.failures.push(format!("{}: {error}", display_name(archive)));
    }
}

/// Unpacks every `.mcaddon` and `.mcpack` in the download folder and
/// routes the contained packs into `resource_packs/` or `behavior_packs/`.
///
/// The extractor only produces folders; ledgers are left to the
/// synchronizer.
pub struct Extractor<'a> {
    world: &'a World,
    config: ExtractConfig,
}

impl<'a> Extractor<'a> {
    pub fn new(world: &'a World, config: ExtractConfig) -> Self {
        Self { world, config }
    }

    pub fn downloads_dir(&self) -> PathBuf {
        self.world.root().join(&self.config.downloads_dir).to_native()
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.world.root().join(&self.config.temp_dir).to_native()
    }

    /// Archives waiting in the download folder: `.mcaddon` files first,
    /// then `.mcpack`, each group sorted by path.
    pub fn find_archives(&self) -> Result<Vec<(ArchiveKind, PathBuf)>> {
        let downloads = self.downloads_dir();
        if !downloads.is_dir() {
            return Ok(Vec::new());
        }

        let mut archives = Vec::new();
        for entry in fs::read_dir(&downloads).map_err(|e| Error::io(&downloads, e))? {
            let path = entry.map_err(|e| Error::io(&downloads, e))?.path();
            if !path.is_file() {
                continue;
            }
            if let Some(kind) = ArchiveKind::from_path(&path) {
                archives.push((kind, path));
            }
        }
        archives.sort();
        Ok(archives)
    }

    /// Run extraction for every archive found.
    ///
    /// Per-archive failures are counted in [`ExtractionStats::errors`] and
    /// do not stop the run. Only failing to set up the scratch directory
    /// is returned as an error.
    pub fn run(&self, decider: &mut dyn PackDecider) -> Result<ExtractionStats> {
        let mut stats = ExtractionStats::default();

        let archives = self.find_archives()?;
        if archives.is_empty() {
            tracing::info!(downloads = %self.downloads_dir().display(), "no archives to extract");
            return Ok(stats);
        }

        for category in PackCategory::ALL {
            let root = self.world.pack_root(category).to_native();
            fs::create_dir_all(&root).map_err(|e| Error::io(&root, e))?;
        }

        let temp_root = self.temp_dir();
        fs::create_dir_all(&temp_root).map_err(|e| Error::io(&temp_root, e))?;
        let scratch = tempfile::Builder::new()
            .prefix("extract-")
            .tempdir_in(&temp_root)
            .map_err(|e| Error::io(&temp_root, e))?;

        for (index, (kind, path)) in archives.iter().enumerate() {
            // One directory per archive keeps same-named archives apart
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("archive_{index}"));
            let extract_dir = scratch.path().join(index.to_string()).join(&stem);

            tracing::info!(archive = %path.display(), kind = kind.extension(), "extracting");
            let result = match kind {
                ArchiveKind::McAddon => self.process_mcaddon(path, &extract_dir, decider, &mut stats),
                ArchiveKind::McPack => self.process_mcpack(path, &extract_dir, decider, &mut stats),
            };

            match kind {
                ArchiveKind::McAddon => stats.mcaddons_processed += 1,
                ArchiveKind::McPack => stats.mcpacks_processed += 1,
            }
            match result {
                Ok(()) => {}
                Err(Error::Prompt { message }) => return Err(Error::Prompt { message }),
                Err(error) => stats.record_failure(path, &error),
            }
        }

        if let Err(e) = scratch.close() {
            tracing::warn!(error = %e, "could not delete scratch folder");
        }
        // Only removes the temp folder if nothing else lives in it
        if fs::remove_dir(&temp_root).is_err() {
            tracing::debug!(temp = %temp_root.display(), "temp folder kept, not empty");
        }

        Ok(stats)
    }

    fn process_mcaddon(
        &self,
        archive_path: &Path,
        extract_dir: &Path,
        decider: &mut dyn PackDecider,
        stats: &mut ExtractionStats,
    ) -> Result<()> {
        archive::unpack(archive_path, extract_dir)?;
        let folders = archive::addon_folders(extract_dir)?;
        if folders.is_empty() {
            return Err(Error::EmptyArchive {
                path: archive_path.to_path_buf(),
            });
        }
        for folder in folders {
            self.route_folder(&folder, decider, stats)?;
        }
        Ok(())
    }

    fn process_mcpack(
        &self,
        archive_path: &Path,
        extract_dir: &Path,
        decider: &mut dyn PackDecider,
        stats: &mut ExtractionStats,
    ) -> Result<()> {
        archive::unpack(archive_path, extract_dir)?;
        let folder = archive::pack_folder(extract_dir)?;
        self.route_folder(&folder, decider, stats)
    }

    /// Classify one unpacked folder and move it into its pack directory.
    fn route_folder(
        &self,
        folder: &Path,
        decider: &mut dyn PackDecider,
        stats: &mut ExtractionStats,
    ) -> Result<()> {
        let name = display_name(folder);

        let category = match classify_folder_name(&name).category() {
            Some(category) => Some(category),
            None => decider.choose_category(&name)?,
        };
        let Some(category) = category else {
            tracing::info!(folder = %name, "skipped, pack type not chosen");
            stats.skipped += 1;
            return Ok(());
        };

        let dest_dir = self.world.pack_root(category).to_native();
        match place_folder(folder, &dest_dir, &name, decider)? {
            Placement::Moved { name: final_name } => {
                let line = format!("{name} -> {}/{final_name}", category.pack_dir());
                tracing::info!(%line, "pack installed");
                stats.moves.push(line);
                stats.record_moved(category);
            }
            Placement::KeptExisting => {
                tracing::info!(folder = %name, "kept existing folder");
                stats.skipped += 1;
            }
        }
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
