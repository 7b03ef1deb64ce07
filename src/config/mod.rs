//! Provider configuration.
//!
//! A provider is described by a small TOML file:
//!
//! ```toml
//! provider_type = "Assembly"
//! resolved_rules = ["ResolvedAssemblyReference"]
//! unresolved_rules = ["AssemblyReference"]
//! original_item_spec_property = "OriginalItemSpec"   # optional
//! visible_when_empty = false                          # optional
//! ```
//!
//! [`ProviderConfig::load`] parses and validates it in one step.

pub mod parser;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use crate::constants::{DEFAULT_PROVIDER_TYPE, ORIGINAL_ITEM_SPEC_PROPERTY};
use crate::core::DeptreeError;

pub use parser::parse_config;

/// Settings of one dependencies provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    #[serde(default = "default_provider_type")]
    pub provider_type: String,

    /// Rules whose items are resolved references.
    #[serde(default)]
    pub resolved_rules: Vec<String>,

    /// Rules whose items are declared, possibly unresolved, references.
    #[serde(default)]
    pub unresolved_rules: Vec<String>,

    #[serde(default = "default_original_item_spec_property")]
    pub original_item_spec_property: String,

    #[serde(default)]
    pub visible_when_empty: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: default_provider_type(),
            resolved_rules: Vec::new(),
            unresolved_rules: Vec::new(),
            original_item_spec_property: default_original_item_spec_property(),
            visible_when_empty: false,
        }
    }
}

impl ProviderConfig {
    /// Parse and validate a provider config file.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = parse_config(path)?;
        config.validate()?;
        debug!(
            "Loaded provider config {} ({}: {} resolved, {} unresolved rule(s))",
            path.display(),
            config.provider_type,
            config.resolved_rules.len(),
            config.unresolved_rules.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DeptreeError> {
        if self.provider_type.trim().is_empty() {
            return Err(DeptreeError::ConfigValidationError {
                reason: "provider_type must not be empty".to_string(),
            });
        }
        if self.original_item_spec_property.trim().is_empty() {
            return Err(DeptreeError::ConfigValidationError {
                reason: "original_item_spec_property must not be empty".to_string(),
            });
        }

        let resolved: BTreeSet<&str> = self.resolved_rules.iter().map(String::as_str).collect();
        if let Some(rule) = self.unresolved_rules.iter().find(|rule| resolved.contains(rule.as_str())) {
            return Err(DeptreeError::ConfigValidationError {
                reason: format!("rule '{rule}' is listed as both resolved and unresolved"),
            });
        }
        Ok(())
    }
}

fn default_provider_type() -> String {
    DEFAULT_PROVIDER_TYPE.to_string()
}

fn default_original_item_spec_property() -> String {
    ORIGINAL_ITEM_SPEC_PROPERTY.to_string()
}
