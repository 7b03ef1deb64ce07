//! Caption disambiguation among the root's children.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::tree::{DependenciesChange, DependencyNode, NodeId};

/// Make the captions of `root`'s children unique once `change` is applied,
/// then attach the added nodes.
///
/// # Collision Rules
///
/// - Participants are the existing children, minus those an added node
///   replaces, plus the added nodes.
/// - Names are compared exactly. The name is the caption before any alias
///   was applied, so an aliased node still collides with its twin.
/// - Every participant whose name is shared switches to its alias,
///   `"{name} ({type}/{spec})"`.
/// - Existing children whose caption changed are recorded in
///   `change.updated_nodes`. Added nodes are aliased in place.
///
/// Running this again with the same change finds nothing left to rename.
///
/// # Examples
///
/// ```rust
/// use deptree_cli::resolver::resolve_duplicates;
/// use deptree_cli::tree::{DefaultNodeFactory, DependenciesChange, NodeFactory};
///
/// let factory = DefaultNodeFactory::new("Assembly");
/// let mut root = factory.create_root_node();
/// root.add_child(factory.create_node("lib/a", "Reference", 0, Default::default(), true).with_caption("Xml"));
///
/// let mut change = DependenciesChange::new();
/// change
///     .added_nodes
///     .push(factory.create_node("lib/b", "Reference", 0, Default::default(), true).with_caption("Xml"));
///
/// resolve_duplicates(&mut change, &mut root);
/// assert_eq!(root.children().len(), 2);
/// assert_ne!(root.children()[0].caption(), root.children()[1].caption());
/// assert_eq!(change.updated_nodes.len(), 1);
/// ```
pub fn resolve_duplicates(change: &mut DependenciesChange, root: &mut DependencyNode) {
    let replaced: HashSet<NodeId> = change.added_nodes.iter().map(|node| node.id().clone()).collect();

    let mut name_counts: HashMap<String, usize> = HashMap::new();
    let participants = root
        .children()
        .iter()
        .filter(|child| !replaced.contains(child.id()))
        .chain(change.added_nodes.iter());
    for node in participants {
        *name_counts.entry(node.name().to_string()).or_default() += 1;
    }
    let collides = |name: &str| name_counts.get(name).is_some_and(|count| *count > 1);

    for child in root.children_mut() {
        if replaced.contains(child.id()) || !collides(child.name()) {
            continue;
        }
        if child.apply_alias() {
            debug!("Aliased existing node '{}' to '{}'", child.name(), child.caption());
            change.updated_nodes.push(child.clone());
        }
    }

    for node in &mut change.added_nodes {
        if collides(node.name()) && node.apply_alias() {
            debug!("Aliased added node '{}' to '{}'", node.name(), node.caption());
        }
    }

    for node in &change.added_nodes {
        root.add_child(node.clone());
    }
}
