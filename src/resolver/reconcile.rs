//! Per-rule diffing of an evaluation update against the current tree.
//!
//! # Processing Order
//!
//! 1. Rules whose difference reports no changes are skipped entirely, as are
//!    unregistered rules and rules missing from the catalog.
//! 2. Unresolved rules: removed keys that match a child of the root are
//!    reported removed; added keys present in `after` and not yet in the
//!    tree become unresolved nodes.
//! 3. Resolved rules, removals first: a child matching the removed key (or
//!    its original item spec) is reported removed. When the original item
//!    spec is still declared by an unresolved rule, a fresh unresolved node
//!    replaces it, so the reference stays visible while it cannot be
//!    resolved.
//! 4. Resolved rules, additions: the resolved item takes over the identity of
//!    its unresolved counterpart (item spec = original item spec, item type =
//!    unresolved item type), displacing any existing or pending unresolved
//!    node for it.
//!
//! Removed nodes are reported in the order they appear under the root.
//! Changed items produce no entries.

use tracing::{debug, trace};

use super::cross_reference::CrossReferenceIndex;
use crate::constants::DEFAULT_NODE_PRIORITY;
use crate::rules::{RuleKind, RuleNames};
use crate::snapshot::{Catalog, ItemProperties, ProjectUpdate, RuleChange};
use crate::tree::{DependenciesChange, DependencyNode, NodeFactory};

/// Diff `update` against the direct children of `root`.
///
/// Produces the nodes to add and remove so that the root's children reflect
/// the update. Added nodes come in processing order: unresolved additions,
/// unresolved replacements of lost resolutions, then resolved nodes.
/// `updated_nodes` is always empty here; it is filled by
/// [`resolve_duplicates`](super::resolve_duplicates).
///
/// # Arguments
///
/// * `update` - Per-rule before/after snapshots and their differences
/// * `catalog` - Rule name to item type mapping
/// * `rules` - Which rules carry resolved and unresolved references
/// * `factory` - Creates every node of the change
/// * `root` - Current provider root; only read
/// * `original_item_spec_property` - Property linking a resolved item to its
///   unresolved counterpart
///
/// # Error Handling
///
/// Never fails. Input that cannot be placed (uncataloged rules, keys missing
/// from `after`, resolved items nobody declared, removals of nodes that were
/// never materialized) is skipped and logged at trace level.
///
/// # Examples
///
/// ```rust
/// use deptree_cli::resolver::reconcile;
/// use deptree_cli::rules::RuleNames;
/// use deptree_cli::snapshot::{Catalog, ProjectUpdate, RuleChange};
/// use deptree_cli::tree::{DefaultNodeFactory, NodeFactory};
///
/// let factory = DefaultNodeFactory::new("Assembly");
/// let root = factory.create_root_node();
/// let rules = RuleNames::new().with_unresolved(["AssemblyReference"]);
/// let catalog = Catalog::new().with_rule("AssemblyReference", "Reference");
/// let update = ProjectUpdate::new().with_rule(
///     RuleChange::new("AssemblyReference")
///         .with_after_item("System.Xml", &[])
///         .with_added(&["System.Xml"]),
/// );
///
/// let change = reconcile(&update, &catalog, &rules, &factory, &root, "OriginalItemSpec");
/// assert_eq!(change.added_nodes.len(), 1);
/// assert!(!change.added_nodes[0].resolved());
/// assert!(root.children().is_empty());
/// ```
pub fn reconcile<F>(
    update: &ProjectUpdate,
    catalog: &Catalog,
    rules: &RuleNames,
    factory: &F,
    root: &DependencyNode,
    original_item_spec_property: &str,
) -> DependenciesChange
where
    F: NodeFactory + ?Sized,
{
    let mut pass = Pass {
        factory,
        root,
        index: CrossReferenceIndex::new(update, catalog, rules, original_item_spec_property),
        property_name: original_item_spec_property,
        change: DependenciesChange::new(),
    };

    let mut resolved = Vec::new();
    for (rule_name, change) in &update.project_changes {
        let kind = rules.kind(rule_name);
        if kind == RuleKind::Ignored {
            trace!("Ignoring rule '{rule_name}'");
            continue;
        }
        if !change.difference.any_changes {
            debug!("Rule '{rule_name}' reports no changes, skipping");
            continue;
        }
        let Some(item_type) = catalog.item_type(rule_name) else {
            debug!("Rule '{rule_name}' is not in the catalog, skipping");
            continue;
        };

        match kind {
            RuleKind::Unresolved => pass.process_unresolved(rule_name, item_type, change),
            RuleKind::Resolved => resolved.push((rule_name.as_str(), change)),
            RuleKind::Ignored => {}
        }
    }

    for &(rule_name, change) in &resolved {
        pass.process_resolved_removals(rule_name, change);
    }
    for &(rule_name, change) in &resolved {
        pass.process_resolved_additions(rule_name, change);
    }

    pass.finish()
}

struct Pass<'a, F: ?Sized> {
    factory: &'a F,
    root: &'a DependencyNode,
    index: CrossReferenceIndex<'a>,
    property_name: &'a str,
    change: DependenciesChange,
}

impl<F> Pass<'_, F>
where
    F: NodeFactory + ?Sized,
{
    fn process_unresolved(&mut self, rule_name: &str, item_type: &str, change: &RuleChange) {
        let root = self.root;
        debug!(
            "Processing unresolved rule '{rule_name}': {} added, {} removed",
            change.difference.added_items.len(),
            change.difference.removed_items.len()
        );

        for key in &change.difference.removed_items {
            match root.find_child(key, item_type) {
                Some(existing) => self.remove(existing),
                None => trace!("Removed item '{key}' is not in the tree"),
            }
        }

        for key in &change.difference.added_items {
            let Some(properties) = change.after.item(key) else {
                trace!("Added item '{key}' has no entry in the after snapshot of '{rule_name}'");
                continue;
            };
            if root.find_child(key, item_type).is_some() {
                trace!("Added item '{key}' is already in the tree");
                continue;
            }
            let node = self.create_node(key, item_type, properties, false);
            self.add(node);
        }
    }

    fn process_resolved_removals(&mut self, rule_name: &str, change: &RuleChange) {
        let root = self.root;
        debug!(
            "Processing removals of resolved rule '{rule_name}': {} removed",
            change.difference.removed_items.len()
        );

        for key in &change.difference.removed_items {
            let original =
                change.before.item(key).and_then(|properties| self.index.original_item_spec(properties));
            let unresolved = original.and_then(|original| self.index.unresolved_item_type(original));
            // resolved nodes carry the unresolved item type; without a counterpart match loosely
            let item_type = unresolved.map_or("", |unresolved| unresolved.item_type);

            let Some(existing) = root
                .find_child(key, item_type)
                .or_else(|| original.and_then(|original| root.find_child(original, item_type)))
            else {
                trace!("Removed resolved item '{key}' is not in the tree");
                continue;
            };
            self.remove(existing);

            match (original, unresolved) {
                (Some(original), Some(unresolved)) => {
                    let node =
                        self.create_node(original, unresolved.item_type, unresolved.properties, false);
                    self.add(node);
                }
                _ => trace!("Removed resolved item '{key}' has no declared counterpart to restore"),
            }
        }
    }

    fn process_resolved_additions(&mut self, rule_name: &str, change: &RuleChange) {
        let root = self.root;
        debug!(
            "Processing additions of resolved rule '{rule_name}': {} added",
            change.difference.added_items.len()
        );

        for key in &change.difference.added_items {
            let Some(properties) = change.after.item(key) else {
                trace!("Added item '{key}' has no entry in the after snapshot of '{rule_name}'");
                continue;
            };
            let Some(original) = self.index.original_item_spec(properties) else {
                trace!("Resolved item '{key}' has no original item spec");
                continue;
            };
            // transitive references are resolved too, but were never declared
            let Some(unresolved) = self.index.unresolved_item_type(original) else {
                trace!("Resolved item '{key}' has no unresolved counterpart '{original}'");
                continue;
            };

            if let Some(existing) = root.find_child(original, unresolved.item_type) {
                self.remove(existing);
            }
            self.change
                .added_nodes
                .retain(|pending| pending.resolved() || !pending.id().matches(original, unresolved.item_type));

            let node = self.create_node(original, unresolved.item_type, properties, true);
            self.add(node);
        }
    }

    fn create_node(
        &self,
        item_spec: &str,
        item_type: &str,
        properties: &ItemProperties,
        resolved: bool,
    ) -> DependencyNode {
        self.factory
            .create_node(item_spec, item_type, DEFAULT_NODE_PRIORITY, properties.clone(), resolved)
            .with_original_item_spec_property(self.property_name)
    }

    fn add(&mut self, node: DependencyNode) {
        if self.change.added_nodes.iter().any(|pending| pending.id() == node.id()) {
            trace!("Node '{}' is already pending addition", node.id());
            return;
        }
        self.change.added_nodes.push(node);
    }

    fn remove(&mut self, existing: &DependencyNode) {
        if self.change.removed_nodes.iter().any(|pending| pending.id() == existing.id()) {
            return;
        }
        self.change.removed_nodes.push(existing.clone());
    }

    fn finish(mut self) -> DependenciesChange {
        let root = self.root;
        self.change
            .removed_nodes
            .sort_by_key(|node| root.child_position(node.id()).unwrap_or(usize::MAX));

        debug!(
            "Reconciled update: {} added, {} removed",
            self.change.added_nodes.len(),
            self.change.removed_nodes.len()
        );
        self.change
    }
}
