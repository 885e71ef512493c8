//! World pack ledgers
//!
//! A ledger is the JSON array Minecraft reads to decide which packs a
//! world loads (`world_resource_packs.json`, `world_behavior_packs.json`).
//! It is loaded at the start of a scan, mutated in memory and written back
//! in one atomic replace at the end.

mod entry;

pub use entry::{PackEntry, PackVersion};

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;

use addon_fs::{NormalizedPath, io};

use crate::{Error, Result};

/// Result of inserting a freshly scanned entry into the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert {
    /// The pack was not in the ledger and has been appended
    Added,
    /// The pack was present with a different version, now overwritten
    Updated { previous: PackVersion },
    /// The pack was present with the same version
    Unchanged,
}

/// An ordered list of pack entries with unique identifiers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: Vec<PackEntry>,
}

impl Ledger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a ledger from a JSON file.
    ///
    /// A missing file yields an empty ledger. Any other read failure, or
    /// content that is not an array of `{pack_id, version}` objects, is an
    /// error. Repeated identifiers in a hand-edited file are collapsed to
    /// their first occurrence.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let native = path.to_native();
        let content = match fs::read_to_string(&native) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(ledger = %path, "ledger does not exist, starting empty");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(Error::LedgerIo {
                    path: native,
                    source,
                });
            }
        };

        let content = content.trim_start_matches('\u{feff}');
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let entries: Vec<PackEntry> =
            serde_json::from_str(content).map_err(|e| Error::LedgerParse {
                path: native.clone(),
                message: e.to_string(),
            })?;

        let mut ledger = Self::new();
        for entry in entries {
            if ledger.contains(&entry.pack_id) {
                tracing::warn!(ledger = %path, pack_id = %entry.pack_id, "dropping repeated ledger entry");
                continue;
            }
            ledger.entries.push(entry);
        }
        Ok(ledger)
    }

    /// Save the ledger atomically as a pretty-printed JSON array.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        let content = self.to_json()?;
        io::write_text(path, &content)?;
        tracing::info!(ledger = %path, entries = self.entries.len(), "ledger written");
        Ok(())
    }

    /// Serialized form written to disk, with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut content = serde_json::to_string_pretty(&self.entries)?;
        content.push('\n');
        Ok(content)
    }

    pub fn entries(&self) -> &[PackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, pack_id: &str) -> bool {
        self.get(pack_id).is_some()
    }

    pub fn get(&self, pack_id: &str) -> Option<&PackEntry> {
        self.entries.iter().find(|e| e.pack_id == pack_id)
    }

    /// Insert or refresh an entry read from a pack folder.
    ///
    /// The folder is authoritative for the version; unknown fields of an
    /// existing entry are kept.
    pub fn upsert(&mut self, entry: PackEntry) -> Upsert {
        match self.entries.iter_mut().find(|e| e.pack_id == entry.pack_id) {
            Some(existing) if existing.version == entry.version => Upsert::Unchanged,
            Some(existing) => {
                let previous = std::mem::replace(&mut existing.version, entry.version);
                Upsert::Updated { previous }
            }
            None => {
                self.entries.push(entry);
                Upsert::Added
            }
        }
    }

    /// Drop every entry whose identifier is not in `seen`.
    ///
    /// Returns the removed entries in ledger order.
    pub fn retain_seen(&mut self, seen: &HashSet<String>) -> Vec<PackEntry> {
        let (kept, removed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| seen.contains(&e.pack_id));
        self.entries = kept;
        removed
    }
}

impl FromIterator<PackEntry> for Ledger {
    fn from_iter<I: IntoIterator<Item = PackEntry>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for entry in iter {
            ledger.upsert(entry);
        }
        ledger
    }
}
