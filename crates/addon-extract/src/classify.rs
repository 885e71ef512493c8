//! Pack type detection from folder names
//!
//! Detection is a naming heuristic and is not guaranteed to be right;
//! anything it cannot place is reported as [`PackKind::Ambiguous`] and
//! handed to a [`PackDecider`](crate::PackDecider).

use std::sync::LazyLock;

use addon_core::PackCategory;
use regex::Regex;

// Multi-letter tags may follow the name directly ("DragonsBP"); single
// letters need a separator ("Dragons B") so that names like "Crab" or
// "Super" are not misread.
static BEHAVIOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[\s_-]?(?:BP|BH|Behaviou?r\s*Pack)|(?:^|[\s_-])B)$")
        .expect("behavior pattern is valid")
});

static RESOURCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[\s_-]?(?:RP|RS|Resource\s*Pack)|(?:^|[\s_-])R)$")
        .expect("resource pattern is valid")
});

/// Result of classifying a folder name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackKind {
    Resource,
    Behavior,
    Ambiguous,
}

impl PackKind {
    /// The category this kind maps to, if it is not ambiguous.
    pub fn category(self) -> Option<PackCategory> {
        match self {
            Self::Resource => Some(PackCategory::Resource),
            Self::Behavior => Some(PackCategory::Behavior),
            Self::Ambiguous => None,
        }
    }
}

/// Classify a pack folder by its name suffix. Behavior tags are checked
/// first.
pub fn classify_folder_name(name: &str) -> PackKind {
    let name = name.trim();
    if BEHAVIOR_PATTERN.is_match(name) {
        PackKind::Behavior
    } else if RESOURCE_PATTERN.is_match(name) {
        PackKind::Resource
    } else {
        PackKind::Ambiguous
    }
}
