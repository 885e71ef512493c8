//! Manage command: the full extract, sync and audit workflow

use colored::Colorize;

use addon_core::{PackCategory, SyncOptions, World};
use addon_extract::ExtractConfig;

use crate::error::{CliError, Result};

use super::extract::extract_archives;
use super::missing::report_missing_manifests;
use super::scan::print_report;

const BANNER: &str = "==================================================";

/// Run the manage command
///
/// Extraction problems are reported and the workflow continues; the
/// command fails only when a ledger could not be synchronized.
pub fn run_manage(
    world: &World,
    config: &ExtractConfig,
    non_interactive: bool,
    skip_extract: bool,
) -> Result<()> {
    println!("{}", BANNER.dimmed());
    println!("{}", "Bedrock Addon Manager".green().bold());
    println!("World: {}", world.root().as_str().cyan());
    println!("{}", BANNER.dimmed());
    println!();

    let mut extract_errors = 0;
    if skip_extract {
        println!("{} Extraction skipped", "=>".blue().bold());
    } else {
        let stats = extract_archives(world, config, non_interactive)?;
        extract_errors = stats.errors;
    }
    println!();

    let mut failed = Vec::new();
    let mut totals = Vec::new();
    for (category, result) in world.sync_all(&SyncOptions::default()) {
        println!("{} Syncing {} packs", "=>".blue().bold(), category);
        match result {
            Ok(report) => {
                print_report(world, category, &report);
                totals.push((category, report.total));
            }
            Err(e) => {
                eprintln!("{} {} packs not synced: {}", "ERROR".red().bold(), category, e);
                failed.push(category);
            }
        }
        println!();
    }

    let missing = report_missing_manifests(world)?;
    println!();

    print_installed(world)?;

    println!("{}", BANNER.dimmed());
    println!("{}", "Summary:".bold());
    for (category, total) in &totals {
        println!("  {} ledger entries: {}", category.ledger_file(), total);
    }
    println!("  Folders without manifest.json: {}", missing);
    if extract_errors > 0 {
        println!("  {} {}", "Extraction errors:".red(), extract_errors);
    }
    println!("{}", BANNER.dimmed());

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

fn print_installed(world: &World) -> Result<()> {
    println!("{}", "Installed packs:".bold());
    for category in [PackCategory::Behavior, PackCategory::Resource] {
        let folders = world.installed_folders(category)?;
        println!("{}/ ({}):", category.pack_dir(), folders.len());
        if folders.is_empty() {
            println!("   (none)");
        }
        for folder in folders {
            println!("   {}", folder);
        }
    }
    Ok(())
}
