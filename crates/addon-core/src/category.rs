//! Pack categories and their on-disk locations

use std::fmt;
use std::str::FromStr;

use addon_fs::WorldPath;
use serde::{Deserialize, Serialize};

/// The two kinds of pack a Bedrock world loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackCategory {
    Resource,
    Behavior,
}

impl PackCategory {
    /// Both categories, in the order they are synchronized.
    pub const ALL: [PackCategory; 2] = [PackCategory::Resource, PackCategory::Behavior];

    /// Directory under the world root holding this category's pack folders.
    pub fn pack_dir(self) -> WorldPath {
        match self {
            Self::Resource => WorldPath::ResourcePacks,
            Self::Behavior => WorldPath::BehaviorPacks,
        }
    }

    /// Ledger file under the world root for this category.
    pub fn ledger_file(self) -> WorldPath {
        match self {
            Self::Resource => WorldPath::ResourceLedger,
            Self::Behavior => WorldPath::BehaviorLedger,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::Behavior => "behavior",
        }
    }
}

impl fmt::Display for PackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resource" | "rp" => Ok(Self::Resource),
            "behavior" | "behaviour" | "bp" => Ok(Self::Behavior),
            other => Err(format!(
                "unknown pack category '{other}' (expected resource or behavior)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_locations() {
        assert_eq!(PackCategory::Resource.pack_dir().as_str(), "resource_packs");
        assert_eq!(
            PackCategory::Behavior.ledger_file().as_str(),
            "world_behavior_packs.json"
        );
    }

    #[test]
    fn category_parses_aliases() {
        assert_eq!("BP".parse::<PackCategory>(), Ok(PackCategory::Behavior));
        assert_eq!("Resource".parse::<PackCategory>(), Ok(PackCategory::Resource));
        assert!("skin".parse::<PackCategory>().is_err());
    }
}
