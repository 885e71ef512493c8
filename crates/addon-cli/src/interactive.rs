//! Interactive prompts for extraction decisions
//!
//! Uses dialoguer for terminal-based selection.

use addon_core::PackCategory;
use addon_extract::{
    AmbiguityPolicy, ConflictAction, ConflictPolicy, FixedDecider, PackDecider,
};
use addon_fs::NormalizedPath;
use colored::Colorize;
use dialoguer::Select;

/// Choices offered for a folder whose pack type is unknown
const CATEGORY_CHOICES: &[&str] = &["behavior_packs", "resource_packs", "Skip this pack"];

/// Choices offered when the destination folder already exists
const CONFLICT_CHOICES: &[&str] = &[
    "Rename new folder",
    "Skip (keep existing)",
    "Overwrite existing folder",
];

/// Asks the user on the terminal when a policy is `prompt`, otherwise
/// applies the configured policy.
pub struct InteractiveDecider {
    on_ambiguous: AmbiguityPolicy,
    on_conflict: ConflictPolicy,
    fallback: FixedDecider,
}

impl InteractiveDecider {
    pub fn new(on_ambiguous: AmbiguityPolicy, on_conflict: ConflictPolicy) -> Self {
        Self {
            on_ambiguous,
            on_conflict,
            fallback: FixedDecider::new(on_ambiguous, on_conflict),
        }
    }
}

fn prompt_error(e: dialoguer::Error) -> addon_extract::Error {
    addon_extract::Error::Prompt {
        message: e.to_string(),
    }
}

impl PackDecider for InteractiveDecider {
    fn choose_category(&mut self, folder: &str) -> addon_extract::Result<Option<PackCategory>> {
        if self.on_ambiguous != AmbiguityPolicy::Prompt {
            return self.fallback.choose_category(folder);
        }

        println!();
        println!(
            "  {} Cannot auto-detect pack type for: {}",
            "?".yellow().bold(),
            folder.cyan()
        );
        let choice = Select::new()
            .with_prompt("  Select destination")
            .items(CATEGORY_CHOICES)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        Ok(category_for_choice(choice))
    }

    fn resolve_conflict(
        &mut self,
        folder: &str,
        destination: &NormalizedPath,
    ) -> addon_extract::Result<ConflictAction> {
        if self.on_conflict != ConflictPolicy::Prompt {
            return self.fallback.resolve_conflict(folder, destination);
        }

        println!();
        println!(
            "  {} Conflict: '{}' already exists in {}",
            "!".yellow().bold(),
            folder.cyan(),
            destination.file_name().unwrap_or(destination.as_str())
        );
        let choice = Select::new()
            .with_prompt("  Choose action")
            .items(CONFLICT_CHOICES)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        Ok(conflict_for_choice(choice))
    }
}

fn category_for_choice(index: usize) -> Option<PackCategory> {
    match index {
        0 => Some(PackCategory::Behavior),
        1 => Some(PackCategory::Resource),
        _ => None,
    }
}

fn conflict_for_choice(index: usize) -> ConflictAction {
    match index {
        0 => ConflictAction::Rename,
        1 => ConflictAction::Skip,
        _ => ConflictAction::Overwrite,
    }
}
