//! Dependency tree data model.
//!
//! - [`NodeId`] - immutable identity of a node across snapshots
//! - [`DependencyNode`] - one dependency, owning its children
//! - [`DependenciesChange`] - added/updated/removed nodes for one snapshot
//! - [`NodeFactory`] - capability a provider injects to build its nodes
//! - [`render`] - tree and change-set output for the CLI

pub mod change;
pub mod factory;
pub mod id;
pub mod node;
pub mod render;

pub use change::DependenciesChange;
pub use factory::{DefaultNodeFactory, NodeFactory};
pub use id::NodeId;
pub use node::DependencyNode;
pub use render::{OutputFormat, change_to_json, node_to_json, render_change, render_tree};
