//! Dependency node value type.

use std::collections::BTreeMap;
use std::fmt;

use super::id::NodeId;
use crate::constants::ORIGINAL_ITEM_SPEC_PROPERTY;

/// One dependency in a provider's tree.
///
/// A node exclusively owns its children; there is no sharing between
/// parents and no cycles. The displayed [`caption`](Self::caption) starts as
/// the node's name (the item spec unless [`set_caption`](Self::set_caption)
/// says otherwise) and switches to the [`alias`](Self::alias) when the
/// duplicate caption resolver finds a sibling with the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    id: NodeId,
    name: String,
    caption: String,
    alias: String,
    priority: i32,
    properties: BTreeMap<String, String>,
    original_item_spec: Option<String>,
    resolved: bool,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Create a childless node named after its item spec.
    pub fn new(
        id: NodeId,
        priority: i32,
        properties: BTreeMap<String, String>,
        resolved: bool,
    ) -> Self {
        let name = id.item_spec.clone();
        let alias = derive_alias(&name, &id);
        let caption = if name.is_empty() {
            alias.clone()
        } else {
            name.clone()
        };
        let original_item_spec = properties.get(ORIGINAL_ITEM_SPEC_PROPERTY).cloned();

        Self {
            id,
            name,
            caption,
            alias,
            priority,
            properties,
            original_item_spec,
            resolved,
            children: Vec::new(),
        }
    }

    /// Read the original item spec from `property` instead of
    /// `OriginalItemSpec`.
    #[must_use]
    pub fn with_original_item_spec_property(mut self, property: &str) -> Self {
        self.original_item_spec = self.properties.get(property).cloned();
        self
    }

    /// Builder form of [`set_caption`](Self::set_caption).
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.set_caption(caption);
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Label shown to the user.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Natural label of the node, before any alias was applied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collision-free fallback label, `"{name} ({id})"`.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn resolved(&self) -> bool {
        self.resolved
    }

    /// Item spec of the unresolved item this node was resolved from.
    pub fn original_item_spec(&self) -> Option<&str> {
        self.original_item_spec.as_deref()
    }

    /// Whether the node links back to an unresolved item.
    pub fn has_original_item_spec(&self) -> bool {
        self.original_item_spec.is_some()
    }

    /// Whether the caption currently shows the alias.
    pub fn uses_alias(&self) -> bool {
        self.caption == self.alias
    }

    /// Rename the node.
    ///
    /// The caption becomes `name` and the alias is derived again from it. An
    /// empty name leaves the alias on display, so the caption is never empty.
    pub fn set_caption(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.alias = derive_alias(&self.name, &self.id);
        self.caption = if self.name.is_empty() {
            self.alias.clone()
        } else {
            self.name.clone()
        };
    }

    /// Show the alias instead of the name. Returns `true` if the caption changed.
    pub fn apply_alias(&mut self) -> bool {
        if self.uses_alias() {
            return false;
        }
        self.caption = self.alias.clone();
        true
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [DependencyNode] {
        &mut self.children
    }

    /// Attach a child, replacing an existing child with the same id in place.
    pub fn add_child(&mut self, child: DependencyNode) {
        match self.children.iter_mut().find(|c| c.id == child.id) {
            Some(existing) => *existing = child,
            None => self.children.push(child),
        }
    }

    /// Detach and return the child with the given id.
    pub fn remove_child(&mut self, id: &NodeId) -> Option<DependencyNode> {
        let index = self.child_position(id)?;
        Some(self.children.remove(index))
    }

    /// Loose lookup of a direct child (see [`NodeId::matches`]).
    pub fn find_child(&self, item_spec: &str, item_type: &str) -> Option<&DependencyNode> {
        self.children.iter().find(|c| c.id.matches(item_spec, item_type))
    }

    pub fn contains_child(&self, id: &NodeId) -> bool {
        self.child_position(id).is_some()
    }

    pub fn child_position(&self, id: &NodeId) -> Option<usize> {
        self.children.iter().position(|c| &c.id == id)
    }
}

impl fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.resolved {
            "resolved"
        } else {
            "unresolved"
        };
        write!(f, "{} [{}, {}]", self.caption, self.id, state)
    }
}

fn derive_alias(name: &str, id: &NodeId) -> String {
    format!("{name} ({id})")
}
