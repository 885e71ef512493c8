//! Directory synchronizer
//!
//! Reconciles the pack folders under one pack directory with that
//! category's ledger file.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use addon_fs::{LockGuard, NormalizedPath};

use crate::ledger::{Ledger, Upsert};
use crate::manifest::read_manifest;
use crate::error::ManifestError;
use crate::{Error, Result};

use super::report::{FolderOutcome, ScanReport};

/// Options for a synchronization pass
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Compute the report without writing the ledger.
    pub dry_run: bool,
}

/// Synchronizes one pack directory with one ledger file.
///
/// Holds no state between calls; the ledger on disk is the only store.
#[derive(Debug, Clone, Default)]
pub struct PackSynchronizer {
    options: SyncOptions,
}

impl PackSynchronizer {
    pub fn new(options: SyncOptions) -> Self {
        Self { options }
    }

    /// Scan `pack_root` and rewrite the ledger at `ledger_path`.
    ///
    /// Folders are visited in byte order of their names, so when two
    /// folders declare the same identifier the one sorting first wins.
    /// Manifest problems are reported per folder and never abort the scan;
    /// only ledger and directory I/O failures are returned as errors.
    ///
    /// A missing `pack_root` leaves the ledger untouched and sets
    /// [`ScanReport::pack_root_missing`].
    pub fn sync(&self, pack_root: &NormalizedPath, ledger_path: &NormalizedPath) -> Result<ScanReport> {
        let mut report = ScanReport::new();
        report.dry_run = self.options.dry_run;

        if !pack_root.is_dir() {
            tracing::warn!(pack_root = %pack_root, "pack directory not found, skipping");
            report.pack_root_missing = true;
            return Ok(report);
        }

        let _lock = if self.options.dry_run {
            None
        } else {
            Some(LockGuard::acquire(ledger_path)?)
        };

        report.ledger_created = !ledger_path.is_file();
        let mut ledger = Ledger::load(ledger_path)?;
        let mut seen: HashSet<String> = HashSet::new();

        for PackFolder { name: folder, path } in pack_folders(pack_root)? {
            let outcome = match read_manifest(&path) {
                Err(ManifestError::Missing { .. }) => {
                    tracing::warn!(folder = %folder, "no manifest.json found");
                    FolderOutcome::MissingManifest
                }
                Err(err) => {
                    tracing::warn!(folder = %folder, error = %err, "skipping pack");
                    FolderOutcome::Malformed {
                        reason: err.reason(),
                    }
                }
                Ok(entry) if seen.contains(&entry.pack_id) => {
                    tracing::warn!(folder = %folder, pack_id = %entry.pack_id, "duplicate pack_id");
                    FolderOutcome::Duplicate {
                        pack_id: entry.pack_id,
                    }
                }
                Ok(entry) => {
                    seen.insert(entry.pack_id.clone());
                    let pack_id = entry.pack_id.clone();
                    let version = entry.version.clone();
                    match ledger.upsert(entry) {
                        Upsert::Added => FolderOutcome::Added { pack_id, version },
                        Upsert::Updated { previous } => FolderOutcome::Updated {
                            pack_id,
                            previous,
                            version,
                        },
                        Upsert::Unchanged => FolderOutcome::Unchanged { pack_id, version },
                    }
                }
            };
            tracing::debug!(folder = %folder, ?outcome, "folder scanned");
            report.record(folder, outcome);
        }

        for orphan in ledger.retain_seen(&seen) {
            tracing::info!(pack_id = %orphan.pack_id, "removing orphaned entry");
            report.record_removed(orphan.pack_id);
        }

        report.total = ledger.len();

        if !self.options.dry_run {
            ledger.save(ledger_path)?;
        }

        Ok(report)
    }
}

/// An immediate subdirectory of a pack root
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PackFolder {
    /// Folder name for reports; lossy if the name is not UTF-8
    pub name: String,
    /// Native path as returned by the directory listing
    pub path: PathBuf,
}

/// Immediate subdirectories of `pack_root`, sorted by the bytes of their
/// names.
///
/// Paths come straight from the directory listing so that names with
/// backslashes or invalid UTF-8 still resolve. Symlinks to directories
/// count as pack folders; plain files are ignored.
pub(crate) fn pack_folders(pack_root: &NormalizedPath) -> Result<Vec<PackFolder>> {
    let native = pack_root.to_native();
    let read_dir = fs::read_dir(&native).map_err(|source| Error::PackRootUnreadable {
        path: native.clone(),
        source,
    })?;

    let mut folders = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| Error::PackRootUnreadable {
            path: native.clone(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            folders.push((entry.file_name(), path));
        }
    }
    folders.sort();

    Ok(folders
        .into_iter()
        .map(|(name, path)| PackFolder {
            name: name.to_string_lossy().into_owned(),
            path,
        })
        .collect())
}
