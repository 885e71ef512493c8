//! Decisions the extractor cannot make on its own

use std::fmt;

use addon_core::PackCategory;
use addon_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

use crate::Result;

/// What to do when a folder with the same name is already installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAction {
    /// Delete the installed folder and move the new one in
    Overwrite,
    /// Keep the installed folder, drop the new one
    Skip,
    /// Install the new folder under a fresh `<name>_<n>` name
    Rename,
}

impl fmt::Display for ConflictAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Overwrite => "overwrite",
            Self::Skip => "skip",
            Self::Rename => "rename",
        })
    }
}

/// Resolves ambiguous pack types and name collisions.
///
/// The CLI implements this with terminal prompts; [`FixedDecider`]
/// answers from configured policies.
pub trait PackDecider {
    /// Pick a category for a folder whose name gave no hint.
    /// `None` skips the folder.
    fn choose_category(&mut self, folder: &str) -> Result<Option<PackCategory>>;

    /// Decide how to install `folder` when `destination` already has a
    /// folder of that name.
    fn resolve_conflict(&mut self, folder: &str, destination: &NormalizedPath) -> Result<ConflictAction>;
}

/// Configured handling of name collisions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    #[default]
    Prompt,
    Rename,
    Skip,
    Overwrite,
}

impl ConflictPolicy {
    /// The fixed action for this policy; `Prompt` falls back to renaming.
    pub fn action(self) -> ConflictAction {
        match self {
            Self::Prompt | Self::Rename => ConflictAction::Rename,
            Self::Skip => ConflictAction::Skip,
            Self::Overwrite => ConflictAction::Overwrite,
        }
    }
}

/// Configured handling of folders whose type cannot be detected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguityPolicy {
    #[default]
    Prompt,
    Skip,
    Resource,
    Behavior,
}

impl AmbiguityPolicy {
    /// The fixed choice for this policy; `Prompt` falls back to skipping.
    pub fn category(self) -> Option<PackCategory> {
        match self {
            Self::Prompt | Self::Skip => None,
            Self::Resource => Some(PackCategory::Resource),
            Self::Behavior => Some(PackCategory::Behavior),
        }
    }
}

/// Non-interactive decider answering from policies
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDecider {
    pub on_ambiguous: AmbiguityPolicy,
    pub on_conflict: ConflictPolicy,
}

impl FixedDecider {
    pub fn new(on_ambiguous: AmbiguityPolicy, on_conflict: ConflictPolicy) -> Self {
        Self {
            on_ambiguous,
            on_conflict,
        }
    }
}

impl PackDecider for FixedDecider {
    fn choose_category(&mut self, folder: &str) -> Result<Option<PackCategory>> {
        let choice = self.on_ambiguous.category();
        tracing::debug!(folder, ?choice, "ambiguous pack type resolved by policy");
        Ok(choice)
    }

    fn resolve_conflict(&mut self, folder: &str, destination: &NormalizedPath) -> Result<ConflictAction> {
        let action = self.on_conflict.action();
        tracing::debug!(folder, destination = %destination, %action, "conflict resolved by policy");
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_policies_fall_back_to_safe_choices() {
        let mut decider = FixedDecider::default();
        assert_eq!(decider.choose_category("Mystery").unwrap(), None);
        assert_eq!(
            decider
                .resolve_conflict("Mystery", &NormalizedPath::new("resource_packs"))
                .unwrap(),
            ConflictAction::Rename
        );
    }

    #[test]
    fn explicit_policies_are_applied() {
        let mut decider = FixedDecider::new(AmbiguityPolicy::Behavior, ConflictPolicy::Overwrite);
        assert_eq!(
            decider.choose_category("Mystery").unwrap(),
            Some(PackCategory::Behavior)
        );
        assert_eq!(
            decider
                .resolve_conflict("Mystery", &NormalizedPath::new("behavior_packs"))
                .unwrap(),
            ConflictAction::Overwrite
        );
    }
}
