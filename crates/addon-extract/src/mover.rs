//! Installing unpacked folders into a pack directory

use std::fs;
use std::path::Path;

use addon_fs::NormalizedPath;

use crate::decider::{ConflictAction, PackDecider};
use crate::{Error, Result};

/// Where a folder ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Installed under `name` in the destination directory
    Moved { name: String },
    /// An installed folder of the same name was kept
    KeptExisting,
}

/// First free `<base>_<n>` name in `dir`, starting at 1.
pub fn unique_folder_name(dir: &Path, base: &str) -> String {
    (1..)
        .map(|n| format!("{base}_{n}"))
        .find(|candidate| !dir.join(candidate).exists())
        .unwrap_or_else(|| base.to_string())
}

/// Move `source` into `dest_dir` as `name`, asking `decider` what to do
/// if that name is taken. Never merges into an existing folder.
pub fn place_folder(
    source: &Path,
    dest_dir: &Path,
    name: &str,
    decider: &mut dyn PackDecider,
) -> Result<Placement> {
    fs::create_dir_all(dest_dir).map_err(|e| Error::io(dest_dir, e))?;

    let mut final_name = name.to_string();
    let mut dest = dest_dir.join(name);

    if dest.exists() {
        match decider.resolve_conflict(name, &NormalizedPath::new(dest_dir))? {
            ConflictAction::Skip => return Ok(Placement::KeptExisting),
            ConflictAction::Overwrite => {
                tracing::info!(folder = %dest.display(), "overwriting installed folder");
                fs::remove_dir_all(&dest).map_err(|e| Error::io(&dest, e))?;
            }
            ConflictAction::Rename => {
                final_name = unique_folder_name(dest_dir, name);
                dest = dest_dir.join(&final_name);
            }
        }
    }

    move_dir(source, &dest)?;
    Ok(Placement::Moved { name: final_name })
}

/// Rename a directory, copying and deleting when the rename crosses
/// filesystems.
pub fn move_dir(source: &Path, dest: &Path) -> Result<()> {
    if fs::rename(source, dest).is_ok() {
        return Ok(());
    }
    tracing::debug!(from = %source.display(), to = %dest.display(), "rename failed, copying");
    copy_dir(source, dest)?;
    fs::remove_dir_all(source).map_err(|e| Error::io(source, e))
}

fn copy_dir(source: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))?;
    for entry in fs::read_dir(source).map_err(|e| Error::io(source, e))? {
        let entry = entry.map_err(|e| Error::io(source, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if from.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| Error::io(&from, e))?;
        }
    }
    Ok(())
}
