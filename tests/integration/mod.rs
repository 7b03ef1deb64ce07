//! Integration test suite for deptree
//!
//! End-to-end tests running the `deptree` binary against fixture files in
//! temporary directories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **replay**: snapshot replay in every output format
//! - **classify**: rule classification output
//! - **error_scenarios**: user-facing errors and exit codes

mod error_scenarios;
mod replay;

use std::path::PathBuf;

use deptree_cli::test_utils::{CatalogFixture, ProviderConfigFixture};
use tempfile::TempDir;

/// Temp directory holding the scenario provider config and catalog.
pub struct Workspace {
    pub dir: TempDir,
    pub config: PathBuf,
    pub catalog: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = ProviderConfigFixture::scenario().write_to(dir.path()).unwrap();
        let catalog = CatalogFixture::scenario().write_to(dir.path()).unwrap();
        Self {
            dir,
            config,
            catalog,
        }
    }
}
