//! Turning evaluation updates into tree changes.
//!
//! Reconciliation runs in two steps:
//!
//! - [`reconcile`] diffs one [`ProjectUpdate`](crate::snapshot::ProjectUpdate)
//!   against the root's current children and produces a
//!   [`DependenciesChange`](crate::tree::DependenciesChange) without touching
//!   the tree. Resolved items are matched back to the unresolved items that
//!   declared them through a [`CrossReferenceIndex`].
//! - [`resolve_duplicates`] makes captions unique among the root's children
//!   once the change is applied, recording renamed existing nodes as updates,
//!   and attaches the added nodes.

pub mod cross_reference;
pub mod duplicates;
pub mod reconcile;

pub use cross_reference::{CrossReferenceIndex, UnresolvedMatch};
pub use duplicates::resolve_duplicates;
pub use reconcile::reconcile;
