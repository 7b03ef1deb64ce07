//! deptree - dependency tree reconciliation for build evaluation snapshots
//!
//! A project's references come in two flavours: the unresolved ones it
//! declares, and the resolved ones the build turns them into. Each
//! evaluation pass yields a snapshot of both, rule by rule. This crate keeps
//! one tree per reference category (a *provider*) in step with those
//! snapshots:
//!
//! - declared references appear as unresolved nodes
//! - once resolved, a node is replaced by its resolved form under the same
//!   identity, linked through the `OriginalItemSpec` property
//! - resolved items nobody declared (transitive references) stay out
//! - siblings sharing a caption are disambiguated with their alias
//!
//! # Core Modules
//!
//! - [`tree`] - node identity, nodes, change-sets, the node factory and rendering
//! - [`snapshot`] - evaluation updates and rule catalogs, loaded from JSON
//! - [`rules`] - classification of rules as resolved, unresolved or ignored
//! - [`resolver`] - reconciliation and duplicate caption resolution
//! - [`provider`] - a provider's subtree and its update pipeline
//!
//! # Supporting Modules
//!
//! - [`config`] - provider configuration (TOML)
//! - [`core`] - error types and user-facing error reporting
//! - [`constants`] - shared property names and defaults
//! - [`cli`] - the `deptree` command-line interface
//!
//! # Example
//!
//! ```rust
//! use deptree_cli::constants::ORIGINAL_ITEM_SPEC_PROPERTY;
//! use deptree_cli::provider::DependenciesProvider;
//! use deptree_cli::snapshot::{Catalog, ProjectUpdate, RuleChange};
//! use deptree_cli::tree::DefaultNodeFactory;
//!
//! let mut provider = DependenciesProvider::new(DefaultNodeFactory::new("Assembly"));
//! provider.set_resolved_reference_rule_names(["ResolvedAssemblyReference"]);
//! provider.set_unresolved_reference_rule_names(["AssemblyReference"]);
//!
//! let catalog = Catalog::new()
//!     .with_rule("ResolvedAssemblyReference", "ResolvedReference")
//!     .with_rule("AssemblyReference", "Reference");
//!
//! let update = ProjectUpdate::new()
//!     .with_rule(
//!         RuleChange::new("AssemblyReference")
//!             .with_after_item("System.Xml", &[])
//!             .with_added(&["System.Xml"]),
//!     )
//!     .with_rule(
//!         RuleChange::new("ResolvedAssemblyReference")
//!             .with_after_item("System.Xml.dll", &[(ORIGINAL_ITEM_SPEC_PROPERTY, "System.Xml")])
//!             .with_added(&["System.Xml.dll"]),
//!     );
//!
//! let change = provider.apply_update(&update, &catalog);
//! assert_eq!(change.added_nodes.len(), 1);
//! assert!(provider.root().children()[0].resolved());
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod provider;
pub mod resolver;
pub mod rules;
pub mod snapshot;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
