//! Scan reports

use serde::{Deserialize, Serialize};

use crate::ledger::PackVersion;

/// What happened to one pack folder during a scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FolderOutcome {
    /// New identifier, appended to the ledger
    Added { pack_id: String, version: PackVersion },
    /// Known identifier whose version changed
    Updated {
        pack_id: String,
        previous: PackVersion,
        version: PackVersion,
    },
    /// Known identifier, same version
    Unchanged { pack_id: String, version: PackVersion },
    /// Identifier already claimed by an earlier folder in this scan
    Duplicate { pack_id: String },
    /// No `manifest.json` in the folder
    MissingManifest,
    /// `manifest.json` present but unusable
    Malformed { reason: String },
}

impl FolderOutcome {
    /// Whether the folder contributed an entry to the ledger.
    pub fn is_processed(&self) -> bool {
        matches!(
            self,
            Self::Added { .. } | Self::Updated { .. } | Self::Unchanged { .. }
        )
    }
}

/// Outcome for a named folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderResult {
    pub folder: String,
    #[serde(flatten)]
    pub outcome: FolderOutcome,
}

/// Summary of one category's synchronization.
///
/// Derived only; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Folders that produced a ledger entry
    pub processed: usize,
    /// Folders repeating an identifier seen earlier in the scan
    pub duplicates: usize,
    /// Folders without a usable manifest
    pub skipped: usize,
    /// Ledger entries dropped because no folder backs them any more
    pub removed: usize,
    /// Entries in the ledger after the scan
    pub total: usize,
    /// Per-folder outcomes, in scan order
    pub folders: Vec<FolderResult>,
    /// Identifiers of removed orphan entries
    pub removed_ids: Vec<String>,
    /// The ledger file did not exist before this scan
    pub ledger_created: bool,
    /// The pack directory does not exist; nothing was scanned or written
    pub pack_root_missing: bool,
    /// The ledger was not written
    pub dry_run: bool,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a folder outcome and bump the matching counter.
    pub fn record(&mut self, folder: impl Into<String>, outcome: FolderOutcome) {
        match &outcome {
            o if o.is_processed() => self.processed += 1,
            FolderOutcome::Duplicate { .. } => self.duplicates += 1,
            _ => self.skipped += 1,
        }
        self.folders.push(FolderResult {
            folder: folder.into(),
            outcome,
        });
    }

    /// Record an orphan entry removed from the ledger.
    pub fn record_removed(&mut self, pack_id: impl Into<String>) {
        self.removed += 1;
        self.removed_ids.push(pack_id.into());
    }

    /// Folders with no `manifest.json`.
    pub fn missing_manifest(&self) -> Vec<&str> {
        self.folders
            .iter()
            .filter(|f| matches!(f.outcome, FolderOutcome::MissingManifest))
            .map(|f| f.folder.as_str())
            .collect()
    }

    /// Folders whose manifest could not be used, with the reason.
    pub fn malformed(&self) -> Vec<(&str, &str)> {
        self.folders
            .iter()
            .filter_map(|f| match &f.outcome {
                FolderOutcome::Malformed { reason } => Some((f.folder.as_str(), reason.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Folders skipped as duplicates, with the identifier they repeat.
    pub fn duplicate_folders(&self) -> Vec<(&str, &str)> {
        self.folders
            .iter()
            .filter_map(|f| match &f.outcome {
                FolderOutcome::Duplicate { pack_id } => Some((f.folder.as_str(), pack_id.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Identifiers appended to the ledger by this scan.
    pub fn added_ids(&self) -> Vec<&str> {
        self.folders
            .iter()
            .filter_map(|f| match &f.outcome {
                FolderOutcome::Added { pack_id, .. } => Some(pack_id.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Identifiers whose version changed, with the old and new version.
    pub fn updated(&self) -> Vec<(&str, &PackVersion, &PackVersion)> {
        self.folders
            .iter()
            .filter_map(|f| match &f.outcome {
                FolderOutcome::Updated {
                    pack_id,
                    previous,
                    version,
                } => Some((pack_id.as_str(), previous, version)),
                _ => None,
            })
            .collect()
    }

    /// Whether the scan changed the ledger content.
    pub fn has_changes(&self) -> bool {
        self.removed > 0
            || self.folders.iter().any(|f| {
                matches!(
                    f.outcome,
                    FolderOutcome::Added { .. } | FolderOutcome::Updated { .. }
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_updates_counters() {
        let mut report = ScanReport::new();
        report.record(
            "A",
            FolderOutcome::Added {
                pack_id: "a".into(),
                version: PackVersion::from([1, 0, 0]),
            },
        );
        report.record(
            "A2",
            FolderOutcome::Updated {
                pack_id: "b".into(),
                previous: PackVersion::from([1, 0, 0]),
                version: PackVersion::from([1, 1, 0]),
            },
        );
        report.record("B", FolderOutcome::Duplicate { pack_id: "a".into() });
        report.record("C", FolderOutcome::MissingManifest);
        report.record(
            "D",
            FolderOutcome::Malformed {
                reason: "invalid JSON".into(),
            },
        );
        report.record_removed("z");

        assert_eq!(report.processed, 2);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.removed, 1);
        assert_eq!(report.missing_manifest(), vec!["C"]);
        assert_eq!(report.malformed(), vec![("D", "invalid JSON")]);
        assert_eq!(report.duplicate_folders(), vec![("B", "a")]);
        assert_eq!(
            report.updated(),
            vec![("b", &PackVersion::from([1, 0, 0]), &PackVersion::from([1, 1, 0]))]
        );
        assert!(report.has_changes());
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let result = FolderResult {
            folder: "Cool RP".into(),
            outcome: FolderOutcome::MissingManifest,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["folder"], "Cool RP");
        assert_eq!(value["outcome"], "missing_manifest");
    }
}
