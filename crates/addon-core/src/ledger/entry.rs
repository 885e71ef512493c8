//! Ledger records

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A pack version: a sequence of non-negative integers.
///
/// Bedrock uses three components, but any arity is accepted. Ordering is
/// component-wise, so `[1, 2]` sorts before `[1, 2, 0]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackVersion(Vec<u64>);

impl PackVersion {
    pub fn new(components: impl Into<Vec<u64>>) -> Self {
        Self(components.into())
    }
}

impl From<Vec<u64>> for PackVersion {
    fn from(components: Vec<u64>) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<[u64; N]> for PackVersion {
    fn from(components: [u64; N]) -> Self {
        Self(components.to_vec())
    }
}

impl fmt::Display for PackVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u64::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

/// One record in a world ledger file.
///
/// Fields other than `pack_id` and `version` are kept in `extra` so that
/// a rewrite does not drop data added by other tools (for example
/// `subpack` or `priority` keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackEntry {
    pub pack_id: String,
    pub version: PackVersion,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PackEntry {
    pub fn new(pack_id: impl Into<String>, version: impl Into<PackVersion>) -> Self {
        Self {
            pack_id: pack_id.into(),
            version: version.into(),
            extra: Map::new(),
        }
    }
}
