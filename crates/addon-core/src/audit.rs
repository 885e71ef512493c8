//! Read-only reports over installed pack folders

use addon_fs::{NormalizedPath, WorldPath};

use crate::Result;
use crate::sync::{PackFolder, pack_folders};

/// Sorted names of pack folders under `pack_root` that have no
/// `manifest.json`. Minecraft ignores these folders.
///
/// A missing `pack_root` yields an empty list.
pub fn find_folders_without_manifest(pack_root: &NormalizedPath) -> Result<Vec<String>> {
    Ok(installed(pack_root)?
        .into_iter()
        .filter(|folder| !folder.path.join(WorldPath::Manifest).is_file())
        .map(|folder| folder.name)
        .collect())
}

/// Sorted names of all pack folders under `pack_root`.
pub fn list_pack_folders(pack_root: &NormalizedPath) -> Result<Vec<String>> {
    Ok(installed(pack_root)?
        .into_iter()
        .map(|folder| folder.name)
        .collect())
}

fn installed(pack_root: &NormalizedPath) -> Result<Vec<PackFolder>> {
    if !pack_root.is_dir() {
        return Ok(Vec::new());
    }
    pack_folders(pack_root)
}
