//! Bedrock Addon Manager CLI
//!
//! Keeps a Bedrock world's pack ledgers in sync with its installed pack
//! folders and unpacks downloaded add-on archives.

mod cli;
mod commands;
mod error;
mod interactive;
mod logging;
mod settings;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use addon_core::World;
use cli::{Cli, Commands};
use error::Result;
use settings::Settings;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(&cli.world, cli.config.as_deref(), cmd),
        None => {
            // No command provided - show help hint
            println!("{} Bedrock Addon Manager", "addons".green().bold());
            println!();
            println!("Run {} for available commands.", "addons --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(world_root: &Path, config: Option<&Path>, cmd: Commands) -> Result<()> {
    let world = World::new(world_root);
    tracing::debug!(world = %world.root(), ?cmd, "running command");

    match cmd {
        Commands::Scan {
            category,
            dry_run,
            json,
        } => commands::run_scan(&world, category, dry_run, json),
        Commands::Extract { non_interactive } => {
            let settings = Settings::load(world.root(), config)?;
            commands::run_extract(&world, &settings.extract, non_interactive)
        }
        Commands::Manage {
            non_interactive,
            skip_extract,
        } => {
            let settings = Settings::load(world.root(), config)?;
            commands::run_manage(&world, &settings.extract, non_interactive, skip_extract)
        }
        Commands::Missing => commands::run_missing(&world),
    }
}
