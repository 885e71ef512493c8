//! Extract command: unpack downloaded archives into pack folders

use std::io::IsTerminal;

use colored::Colorize;

use addon_core::World;
use addon_extract::{ExtractConfig, ExtractionStats, Extractor, FixedDecider, PackDecider};

use crate::error::{CliError, Result};
use crate::interactive::InteractiveDecider;

/// Run the extract command
pub fn run_extract(world: &World, config: &ExtractConfig, non_interactive: bool) -> Result<()> {
    let stats = extract_archives(world, config, non_interactive)?;
    if stats.errors > 0 {
        return Err(CliError::user(format!(
            "{} archive(s) could not be extracted",
            stats.errors
        )));
    }
    Ok(())
}

/// Extract every archive and print the summary. Per-archive failures are
/// reported in the returned stats, not as an error.
pub fn extract_archives(
    world: &World,
    config: &ExtractConfig,
    non_interactive: bool,
) -> Result<ExtractionStats> {
    let extractor = Extractor::new(world, config.clone());

    println!(
        "{} Extracting archives from {}",
        "=>".blue().bold(),
        extractor.downloads_dir().display().to_string().cyan()
    );

    let mut decider = decider_for(config, non_interactive);
    let stats = extractor.run(decider.as_mut())?;
    print_stats(&stats);
    Ok(stats)
}

/// Prompting needs a terminal; without one the configured policies apply.
fn decider_for(config: &ExtractConfig, non_interactive: bool) -> Box<dyn PackDecider> {
    if non_interactive || !std::io::stdin().is_terminal() {
        tracing::debug!("using non-interactive extraction policies");
        Box::new(FixedDecider::new(config.on_ambiguous, config.on_conflict))
    } else {
        Box::new(InteractiveDecider::new(config.on_ambiguous, config.on_conflict))
    }
}

fn print_stats(stats: &ExtractionStats) {
    if stats.archives_processed() == 0 && stats.errors == 0 {
        println!("   No .mcaddon or .mcpack files found");
        return;
    }

    for line in &stats.moves {
        println!("   {} {}", "[MOVED]".green(), line);
    }
    for failure in &stats.failures {
        println!("   {} {}", "[ERROR]".red(), failure);
    }

    println!();
    println!("{}", "Extraction Summary:".bold());
    println!("  .mcaddon files processed: {}", stats.mcaddons_processed);
    println!("  .mcpack files processed: {}", stats.mcpacks_processed);
    println!("  Behavior packs moved: {}", stats.behavior_moved);
    println!("  Resource packs moved: {}", stats.resource_moved);
    println!("  Skipped: {}", stats.skipped);
    if stats.errors > 0 {
        println!("  {} {}", "Errors:".red(), stats.errors);
    } else {
        println!("  Errors: 0");
    }
}
