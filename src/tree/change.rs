//! The change-set produced by reconciliation.

use std::fmt;

use super::node::DependencyNode;

/// Net effect of one snapshot on a provider's tree.
///
/// Order within `added_nodes` is significant: unresolved additions come
/// first, each group in source order. Consumers must apply entries in the
/// order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependenciesChange {
    pub added_nodes: Vec<DependencyNode>,
    pub updated_nodes: Vec<DependencyNode>,
    pub removed_nodes: Vec<DependencyNode>,
}

impl DependenciesChange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.added_nodes.is_empty() && self.updated_nodes.is_empty() && self.removed_nodes.is_empty()
    }

    /// Total number of entries across all three lists.
    pub fn len(&self) -> usize {
        self.added_nodes.len() + self.updated_nodes.len() + self.removed_nodes.len()
    }
}

impl fmt::Display for DependenciesChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.added_nodes {
            writeln!(f, "+ {node}")?;
        }
        for node in &self.updated_nodes {
            writeln!(f, "~ {node}")?;
        }
        for node in &self.removed_nodes {
            writeln!(f, "- {node}")?;
        }
        Ok(())
    }
}
