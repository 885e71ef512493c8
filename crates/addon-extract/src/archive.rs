//! Zip unpacking for `.mcaddon` and `.mcpack` archives

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::{Error, Result};

/// Folder created by macOS archivers; never a pack.
const MACOS_METADATA_DIR: &str = "__MACOSX";

/// Kinds of archive Bedrock distributes add-ons in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArchiveKind {
    /// Bundle of several pack folders (usually one behavior, one resource)
    McAddon,
    /// A single pack, either at the archive root or in one subfolder
    McPack,
}

impl ArchiveKind {
    /// Detect the archive kind from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "mcaddon" => Some(Self::McAddon),
            "mcpack" => Some(Self::McPack),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::McAddon => "mcaddon",
            Self::McPack => "mcpack",
        }
    }
}

/// Extract every entry of `archive` under `dest`.
///
/// Entries whose names would escape `dest` (absolute paths, `..`) are
/// skipped.
pub fn unpack(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).map_err(|e| Error::io(archive, e))?;
    let mut zip = ZipArchive::new(file).map_err(|e| Error::InvalidArchive {
        path: archive.to_path_buf(),
        message: e.to_string(),
    })?;

    fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))?;

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(|e| Error::InvalidArchive {
            path: archive.to_path_buf(),
            message: e.to_string(),
        })?;

        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            tracing::warn!(archive = %archive.display(), entry = entry.name(), "skipping unsafe entry");
            continue;
        };
        let out_path = dest.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| Error::io(&out_path, e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let mut out = File::create(&out_path).map_err(|e| Error::io(&out_path, e))?;
        io::copy(&mut entry, &mut out).map_err(|e| Error::io(&out_path, e))?;
    }

    Ok(())
}

/// Top-level directories of an unpacked `.mcaddon`, sorted by name.
pub fn addon_folders(extract_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut folders: Vec<PathBuf> = read_children(extract_dir)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect();
    folders.sort();
    Ok(folders)
}

/// The pack folder inside an unpacked `.mcpack`.
///
/// Packs zipped together with their enclosing folder unpack to a single
/// subdirectory, which is returned. Packs zipped from inside the folder
/// unpack flat, in which case `extract_dir` itself is the pack.
pub fn pack_folder(extract_dir: &Path) -> Result<PathBuf> {
    let children = read_children(extract_dir)?;
    match children.as_slice() {
        [only] if only.is_dir() => Ok(only.clone()),
        _ => Ok(extract_dir.to_path_buf()),
    }
}

fn read_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        if entry.file_name() == MACOS_METADATA_DIR {
            continue;
        }
        children.push(entry.path());
    }
    Ok(children)
}
