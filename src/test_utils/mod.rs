//! Test utilities for deptree
//!
//! Logging setup, file fixtures and node builders shared by the unit tests
//! and the `tests/` suites (through the `test-utils` feature).
//!
//! # Example
//!
//! ```rust,no_run
//! use deptree_cli::test_utils::{init_test_logging, scenario_provider};
//! use deptree_cli::test_utils::fixtures::SnapshotFixture;
//! use deptree_cli::snapshot::ProjectUpdate;
//!
//! init_test_logging(None);
//! let provider = scenario_provider();
//! let update = ProjectUpdate::from_json(&SnapshotFixture::scenario().content).unwrap();
//! ```

pub mod fixtures;

pub use fixtures::{CatalogFixture, ProviderConfigFixture, SnapshotFixture};

use std::collections::BTreeMap;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::provider::DependenciesProvider;
use crate::snapshot::Catalog;
use crate::tree::{DefaultNodeFactory, DependencyNode, NodeFactory};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG` if set; with neither, no
/// subscriber is installed. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=deptree_cli=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Node of provider `MyProvider` with an optional caption override.
pub fn node(item_spec: &str, item_type: &str, caption: Option<&str>, resolved: bool) -> DependencyNode {
    let node = DefaultNodeFactory::new("MyProvider").create_node(
        item_spec,
        item_type,
        0,
        BTreeMap::new(),
        resolved,
    );
    match caption {
        Some(caption) => node.with_caption(caption),
        None => node,
    }
}

/// Catalog of the scenario fixtures.
pub fn scenario_catalog() -> Catalog {
    Catalog::new()
        .with_rule("rulenameResolved", "myResolvedItemType")
        .with_rule("rulenameUnresolved", "myUnresolvedItemType")
}

/// Provider registering the scenario rules, with an empty root.
pub fn scenario_provider() -> DependenciesProvider<DefaultNodeFactory> {
    let mut provider = DependenciesProvider::new(DefaultNodeFactory::new("MyProvider"));
    provider.set_resolved_reference_rule_names(["rulenameResolved"]);
    provider.set_unresolved_reference_rule_names(["rulenameUnresolved"]);
    provider
}

/// Root holding the two nodes the scenario update removes.
pub fn scenario_root() -> DependencyNode {
    let mut root = DefaultNodeFactory::new("MyProvider").create_root_node();
    root.add_child(node("item4", "myUnresolvedItemType", None, false));
    root.add_child(node("resolvedItemTobeRemoved", "myUnresolvedItemType", None, true));
    root
}
