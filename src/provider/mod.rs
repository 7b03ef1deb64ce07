//! Dependencies provider: one reference category's subtree and its update
//! pipeline.
//!
//! A provider owns the root node of its category (assemblies, projects,
//! packages, ...) and the rule names that feed it. Each evaluation update is
//! turned into a [`DependenciesChange`] and applied to the root:
//!
//! ```text
//! ProjectUpdate + Catalog
//!   -> reconcile            (process_dependencies_changes)
//!   -> detach removed nodes
//!   -> resolve duplicates   (process_duplicated_nodes, attaches added nodes)
//! ```
//!
//! Updates for one provider are serialized by `&mut self`; providers never
//! share subtrees, so separate providers can be driven independently.

use tracing::debug;

use crate::config::ProviderConfig;
use crate::constants::ORIGINAL_ITEM_SPEC_PROPERTY;
use crate::resolver::{reconcile, resolve_duplicates};
use crate::rules::RuleNames;
use crate::snapshot::{Catalog, ProjectUpdate};
use crate::tree::{DependenciesChange, DependencyNode, NodeFactory};

/// Maintains the dependency subtree of one provider type.
#[derive(Debug, Clone)]
pub struct DependenciesProvider<F: NodeFactory> {
    factory: F,
    root: DependencyNode,
    rules: RuleNames,
    original_item_spec_property: String,
    error_state: bool,
    visible_when_empty: bool,
}

impl<F: NodeFactory> DependenciesProvider<F> {
    /// Create a provider with an empty root and no registered rules.
    pub fn new(factory: F) -> Self {
        let root = factory.create_root_node();
        Self {
            factory,
            root,
            rules: RuleNames::new(),
            original_item_spec_property: ORIGINAL_ITEM_SPEC_PROPERTY.to_string(),
            error_state: false,
            visible_when_empty: false,
        }
    }

    /// Create a provider with the rule sets and flags of `config`.
    pub fn from_config(factory: F, config: &ProviderConfig) -> Self {
        let mut provider = Self::new(factory);
        provider.set_resolved_reference_rule_names(config.resolved_rules.iter().cloned());
        provider.set_unresolved_reference_rule_names(config.unresolved_rules.iter().cloned());
        provider.original_item_spec_property.clone_from(&config.original_item_spec_property);
        provider.visible_when_empty = config.visible_when_empty;
        provider
    }

    pub fn root(&self) -> &DependencyNode {
        &self.root
    }

    /// Replace the root node, children included.
    pub fn set_root_node(&mut self, root: DependencyNode) {
        self.root = root;
    }

    pub fn provider_type(&self) -> &str {
        self.factory.provider_type()
    }

    pub fn icons(&self) -> Vec<String> {
        self.factory.icons()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn rule_names(&self) -> &RuleNames {
        &self.rules
    }

    pub fn set_resolved_reference_rule_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.set_resolved(names);
    }

    pub fn set_unresolved_reference_rule_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.set_unresolved(names);
    }

    /// Property of a resolved item naming its unresolved counterpart.
    pub fn original_item_spec_property_name(&self) -> &str {
        &self.original_item_spec_property
    }

    pub fn is_in_error_state(&self) -> bool {
        self.error_state
    }

    pub fn set_error_state(&mut self, error_state: bool) {
        self.error_state = error_state;
    }

    pub fn should_be_visible_when_empty(&self) -> bool {
        self.visible_when_empty
    }

    /// Compute the change an update implies for the current tree.
    ///
    /// The tree itself is not modified.
    pub fn process_dependencies_changes(
        &self,
        update: &ProjectUpdate,
        catalog: &Catalog,
    ) -> DependenciesChange {
        reconcile(
            update,
            catalog,
            &self.rules,
            &self.factory,
            &self.root,
            &self.original_item_spec_property,
        )
    }

    /// Disambiguate captions for `change` and attach its added nodes.
    pub fn process_duplicated_nodes(&mut self, change: &mut DependenciesChange) {
        resolve_duplicates(change, &mut self.root);
    }

    /// Reconcile `update` and apply the result to the tree.
    ///
    /// # Steps
    ///
    /// 1. [`process_dependencies_changes`](Self::process_dependencies_changes)
    ///    computes the change against the current root.
    /// 2. Removed nodes are detached from the root.
    /// 3. [`process_duplicated_nodes`](Self::process_duplicated_nodes) aliases
    ///    colliding captions and attaches the added nodes, replacing children
    ///    with the same id in place.
    ///
    /// The returned change carries the added, updated and removed nodes in the
    /// order they were applied.
    ///
    /// # Error Handling
    ///
    /// Infallible. Items that cannot be placed are skipped during
    /// reconciliation and logged at trace level. The error state flag is left
    /// to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deptree_cli::provider::DependenciesProvider;
    /// use deptree_cli::snapshot::{Catalog, ProjectUpdate, RuleChange};
    /// use deptree_cli::tree::DefaultNodeFactory;
    ///
    /// let mut provider = DependenciesProvider::new(DefaultNodeFactory::new("Assembly"));
    /// provider.set_unresolved_reference_rule_names(["AssemblyReference"]);
    /// let catalog = Catalog::new().with_rule("AssemblyReference", "Reference");
    ///
    /// let update = ProjectUpdate::new().with_rule(
    ///     RuleChange::new("AssemblyReference")
    ///         .with_after_item("System.Xml", &[])
    ///         .with_added(&["System.Xml"]),
    /// );
    /// let change = provider.apply_update(&update, &catalog);
    ///
    /// assert_eq!(change.added_nodes.len(), 1);
    /// assert_eq!(provider.root().children()[0].caption(), "System.Xml");
    /// ```
    pub fn apply_update(&mut self, update: &ProjectUpdate, catalog: &Catalog) -> DependenciesChange {
        let mut change = self.process_dependencies_changes(update, catalog);

        for removed in &change.removed_nodes {
            self.root.remove_child(removed.id());
        }
        self.process_duplicated_nodes(&mut change);

        debug!(
            "Provider '{}' applied update: {} added, {} updated, {} removed, {} children",
            self.provider_type(),
            change.added_nodes.len(),
            change.updated_nodes.len(),
            change.removed_nodes.len(),
            self.root.children().len()
        );
        change
    }
}
