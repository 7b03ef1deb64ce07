//! Node creation capability injected into providers.
//!
//! Each provider (one per reference category: assemblies, projects,
//! packages) decides how its nodes are built and which icons they use. The
//! reconciler only ever creates nodes through this trait.

use std::collections::BTreeMap;

use super::id::NodeId;
use super::node::DependencyNode;
use crate::constants::ROOT_ITEM_SPEC;

/// Creates nodes for one provider type.
pub trait NodeFactory {
    /// Tag identifying the reference category, e.g. `"Assembly"`.
    fn provider_type(&self) -> &str;

    /// Create a dependency node for a build item.
    fn create_node(
        &self,
        item_spec: &str,
        item_type: &str,
        priority: i32,
        properties: BTreeMap<String, String>,
        resolved: bool,
    ) -> DependencyNode {
        DependencyNode::new(
            NodeId::new(self.provider_type(), item_spec, item_type),
            priority,
            properties,
            resolved,
        )
    }

    /// Create the provider's root node. Called once per provider.
    fn create_root_node(&self) -> DependencyNode {
        DependencyNode::new(
            NodeId::new(self.provider_type(), ROOT_ITEM_SPEC, ""),
            0,
            BTreeMap::new(),
            true,
        )
    }

    /// Icon monikers used by this provider's nodes.
    fn icons(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Factory that builds plain nodes tagged with a fixed provider type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultNodeFactory {
    provider_type: String,
    root_caption: Option<String>,
}

impl DefaultNodeFactory {
    pub fn new(provider_type: impl Into<String>) -> Self {
        Self {
            provider_type: provider_type.into(),
            root_caption: None,
        }
    }

    /// Caption for the root node; defaults to the provider type.
    #[must_use]
    pub fn with_root_caption(mut self, caption: impl Into<String>) -> Self {
        self.root_caption = Some(caption.into());
        self
    }
}

impl NodeFactory for DefaultNodeFactory {
    fn provider_type(&self) -> &str {
        &self.provider_type
    }

    fn create_root_node(&self) -> DependencyNode {
        let caption = self.root_caption.clone().unwrap_or_else(|| self.provider_type.clone());
        DependencyNode::new(
            NodeId::new(&self.provider_type, ROOT_ITEM_SPEC, ""),
            0,
            BTreeMap::new(),
            true,
        )
        .with_caption(caption)
    }
}
