//! Loading snapshots and catalogs from JSON files.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use super::{Catalog, ProjectUpdate};
use crate::core::DeptreeError;

/// Read a project update from a JSON snapshot file.
pub fn load_update(path: &Path) -> Result<ProjectUpdate> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;

    let update = ProjectUpdate::from_json(&content).map_err(|e| DeptreeError::SnapshotParseError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;

    debug!(
        "Loaded snapshot {} with {} rule(s)",
        path.display(),
        update.project_changes.len()
    );
    Ok(update)
}

/// Read a rule catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let catalog = Catalog::from_json(&content).map_err(|e| DeptreeError::CatalogParseError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;

    debug!("Loaded catalog {} with {} rule(s)", path.display(), catalog.len());
    Ok(catalog)
}
