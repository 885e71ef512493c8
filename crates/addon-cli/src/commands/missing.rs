//! Report pack folders Minecraft will ignore

use colored::Colorize;

use addon_core::{PackCategory, World};

use crate::error::Result;

/// Run the missing command
pub fn run_missing(world: &World) -> Result<()> {
    report_missing_manifests(world)?;
    Ok(())
}

/// Print folders without `manifest.json`, behavior packs first, and return
/// the total count.
pub fn report_missing_manifests(world: &World) -> Result<usize> {
    let mut total = 0;
    let mut sections = Vec::new();
    for category in [PackCategory::Behavior, PackCategory::Resource] {
        let folders = world.folders_without_manifest(category)?;
        total += folders.len();
        sections.push((category, folders));
    }

    if total == 0 {
        println!(
            "{} All pack folders have manifest.json",
            "OK".green().bold()
        );
        return Ok(0);
    }

    println!(
        "{} Folders missing manifest.json (won't work in-game):",
        "MISSING".yellow().bold()
    );
    for (category, folders) in sections {
        if folders.is_empty() {
            continue;
        }
        println!();
        println!("{}/ ({} folder(s)):", category.pack_dir(), folders.len());
        for folder in folders {
            println!("   {} {}", "[!]".yellow(), folder);
        }
    }
    println!();
    println!("Total: {} folder(s) without manifest.json", total);
    println!("These folders will NOT be recognized by Minecraft.");

    Ok(total)
}
