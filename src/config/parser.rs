//! Generic TOML configuration parsing.
//!
//! ```rust,no_run
//! use deptree_cli::config::parse_config;
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Deserialize)]
//! struct Settings {
//!     provider_type: String,
//! }
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings: Settings = parse_config(Path::new("provider.toml"))?;
//! println!("{}", settings.provider_type);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::DeptreeError;

/// Parse a TOML file into `T`.
///
/// Read failures keep the underlying I/O error as their cause, with the
/// file path as context. Syntax and shape errors become
/// [`DeptreeError::ConfigParseError`].
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content).map_err(|e| DeptreeError::ConfigParseError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(config)
}
