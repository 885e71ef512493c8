//! Scan command: synchronize ledgers with pack folders

use std::collections::BTreeMap;

use colored::Colorize;

use addon_core::{FolderOutcome, PackCategory, ScanReport, SyncOptions, World};

use crate::error::{CliError, Result};

const RULE: &str = "--------------------------------------------------";

/// Run the scan command
///
/// Synchronizes the selected categories (both by default). A fatal error
/// in one category is printed and the other category still runs; the
/// command fails if any category failed.
pub fn run_scan(world: &World, category: Option<PackCategory>, dry_run: bool, json: bool) -> Result<()> {
    let options = SyncOptions { dry_run };
    let categories: Vec<PackCategory> = match category {
        Some(category) => vec![category],
        None => PackCategory::ALL.to_vec(),
    };

    let mut reports = BTreeMap::new();
    let mut failed = Vec::new();

    for category in categories {
        if !json {
            println!(
                "{} Scanning {} packs in {}",
                "=>".blue().bold(),
                category,
                world.pack_root(category).as_str().cyan()
            );
        }
        match world.sync(category, &options) {
            Ok(report) => {
                if !json {
                    print_report(world, category, &report);
                }
                reports.insert(category.as_str(), report);
            }
            Err(e) => {
                eprintln!(
                    "{} {} packs not synced: {}",
                    "ERROR".red().bold(),
                    category,
                    e
                );
                failed.push(category);
            }
        }
        if !json {
            println!();
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if failed.is_empty() {
        Ok(())
    } else {
        let names: Vec<&str> = failed.iter().map(|c| c.as_str()).collect();
        Err(CliError::user(format!(
            "Synchronization failed for: {}",
            names.join(", ")
        )))
    }
}

/// Print the per-folder lines and summary for one category.
pub fn print_report(world: &World, category: PackCategory, report: &ScanReport) {
    if report.pack_root_missing {
        println!(
            "   {} {} not found, ledger left unchanged",
            "WARNING".yellow().bold(),
            category.pack_dir()
        );
        return;
    }

    for result in &report.folders {
        let folder = result.folder.as_str();
        match &result.outcome {
            FolderOutcome::Added { pack_id, version } => {
                println!("   {} {}: {} v{}", "[ADDED]".green(), folder, pack_id, version)
            }
            FolderOutcome::Updated {
                pack_id,
                previous,
                version,
            } => println!(
                "   {} {}: {} v{} -> v{}",
                "[UPDATED]".green(),
                folder,
                pack_id,
                previous,
                version
            ),
            FolderOutcome::Unchanged { pack_id, version } => {
                println!("   {} {}: {} v{}", "[OK]".green(), folder, pack_id, version)
            }
            FolderOutcome::Duplicate { pack_id } => println!(
                "   {} {}: pack_id {} already exists",
                "[DUPLICATE]".yellow(),
                folder,
                pack_id
            ),
            FolderOutcome::MissingManifest => println!(
                "   {} {}: No manifest.json found",
                "[SKIP]".yellow(),
                folder
            ),
            FolderOutcome::Malformed { reason } => {
                println!("   {} {}: {}", "[ERROR]".red(), folder, reason)
            }
        }
    }

    if !report.removed_ids.is_empty() {
        println!();
        println!("Removed orphaned entries:");
        for pack_id in &report.removed_ids {
            println!("   {} {}", "[REMOVED]".red(), pack_id);
        }
    }

    let ledger = category.ledger_file();
    println!("{}", RULE.dimmed());
    println!("{}", format!("{} Packs Summary:", capitalize(category.as_str())).bold());
    println!("  Processed: {} packs", report.processed);
    println!("  Duplicates: {}", report.duplicates);
    println!("  Skipped: {}", report.skipped);
    println!("  Removed: {} orphaned entries", report.removed);
    println!("  Total in output: {}", report.total);
    if report.dry_run {
        println!("  {} {} not written (dry run)", "Preview:".cyan(), ledger);
    } else if report.ledger_created {
        println!("  Created: {}", world.ledger_path(category).as_str());
    } else {
        println!("  Updated: {}", world.ledger_path(category).as_str());
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addon_test_utils::TestWorld;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("resource"), "Resource");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_scan_with_temp_world() {
        let temp = TestWorld::new();
        temp.add_pack("behavior_packs", "Mobs BP", "uuid-mobs", &[1, 0, 0]);
        let world = World::new(temp.root());

        run_scan(&world, None, false, false).unwrap();

        assert_eq!(
            temp.read_ledger("world_behavior_packs.json"),
            vec![("uuid-mobs".to_string(), vec![1, 0, 0])]
        );
        assert_eq!(temp.read_file("world_resource_packs.json").trim(), "[]");
    }

    #[test]
    fn test_scan_fails_when_a_category_fails() {
        let temp = TestWorld::new();
        temp.write_file("world_resource_packs.json", "garbage");
        let world = World::new(temp.root());

        let result = run_scan(&world, None, false, true);

        assert!(matches!(result, Err(CliError::User { .. })));
        temp.assert_exists("world_behavior_packs.json");
    }

    #[test]
    fn test_scan_dry_run_single_category() {
        let temp = TestWorld::new();
        temp.add_pack("resource_packs", "Faithful RP", "uuid-f", &[1, 0, 0]);
        let world = World::new(temp.root());

        run_scan(&world, Some(PackCategory::Resource), true, false).unwrap();

        temp.assert_missing("world_resource_packs.json");
        temp.assert_missing("world_behavior_packs.json");
    }
}
