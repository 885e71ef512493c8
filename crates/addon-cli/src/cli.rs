//! CLI argument parsing using clap derive

use std::path::PathBuf;

use addon_core::PackCategory;
use clap::{Parser, Subcommand};

/// Bedrock Addon Manager - keep a world's pack ledgers in sync with its pack folders
#[derive(Parser, Debug)]
#[command(name = "addons")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// World folder containing resource_packs/ and behavior_packs/
    #[arg(short, long, global = true, env = "ADDONS_WORLD", default_value = ".")]
    pub world: PathBuf,

    /// Settings file (defaults to addons.toml in the world folder)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sync world_*_packs.json with the installed pack folders
    ///
    /// Examples:
    ///   addons scan                      # Both categories
    ///   addons scan --category behavior  # Only behavior packs
    ///   addons scan --dry-run --json     # Preview as JSON
    Scan {
        /// Only scan one category (resource or behavior)
        #[arg(long)]
        category: Option<PackCategory>,

        /// Report what would change without writing ledgers
        #[arg(long)]
        dry_run: bool,

        /// Output reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Unpack .mcaddon/.mcpack files from downloaded_addons/ into pack folders
    Extract {
        /// Never prompt; use the configured policies (prompt falls back to
        /// rename for conflicts and skip for unknown pack types)
        #[arg(long)]
        non_interactive: bool,
    },

    /// Extract archives, sync both ledgers and report broken pack folders
    Manage {
        /// Never prompt during extraction
        #[arg(long)]
        non_interactive: bool,

        /// Skip the extraction step
        #[arg(long)]
        skip_extract: bool,
    },

    /// List pack folders that have no manifest.json
    Missing,
}
