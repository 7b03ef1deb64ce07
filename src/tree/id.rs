//! Stable identity of dependency nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a node across successive snapshots.
///
/// Captions and properties are not part of identity: two nodes are the same
/// node exactly when their ids are equal. An empty `item_type` means the type
/// is unspecified, which [`NodeId::matches`] treats as a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeId {
    /// Reference category of the owning provider (e.g. "Assembly", "Package").
    pub provider_type: String,
    /// Item spec as reported by the build evaluation.
    pub item_spec: String,
    /// Item type from the catalog; empty when unspecified.
    #[serde(default)]
    pub item_type: String,
}

impl NodeId {
    /// Create a node id.
    pub fn new(
        provider_type: impl Into<String>,
        item_spec: impl Into<String>,
        item_type: impl Into<String>,
    ) -> Self {
        Self {
            provider_type: provider_type.into(),
            item_spec: item_spec.into(),
            item_type: item_type.into(),
        }
    }

    /// Loose lookup used by the reconciler.
    ///
    /// The item spec must match exactly; the item type only has to match when
    /// both sides specify one.
    pub fn matches(&self, item_spec: &str, item_type: &str) -> bool {
        self.item_spec == item_spec
            && (self.item_type.is_empty() || item_type.is_empty() || self.item_type == item_type)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.item_type.is_empty() {
            write!(f, "{}", self.item_spec)
        } else {
            write!(f, "{}/{}", self.item_type, self.item_spec)
        }
    }
}
