//! Global constants used throughout the deptree codebase.
//!
//! Property names and defaults shared by the reconciler, the provider and
//! the CLI. Defining them centrally keeps the snapshot vocabulary in one
//! place.

/// Property that links a resolved item back to the unresolved item it
/// originated from.
///
/// Resolved build items carry the item spec of the declared (unresolved)
/// reference under this key. Providers may override the key through
/// [`ProviderConfig`](crate::config::ProviderConfig).
pub const ORIGINAL_ITEM_SPEC_PROPERTY: &str = "OriginalItemSpec";

/// Item spec used for a provider's root node.
pub const ROOT_ITEM_SPEC: &str = "RootNode";

/// Provider type used when a configuration does not name one.
pub const DEFAULT_PROVIDER_TYPE: &str = "Default";

/// Default priority assigned to nodes created by the reconciler.
pub const DEFAULT_NODE_PRIORITY: i32 = 0;
