//! Project evaluation snapshots and rule catalogs.
//!
//! These are the read-only inputs of reconciliation, produced by the build
//! evaluation subsystem. The JSON shape mirrors the evaluation output:
//!
//! ```json
//! {
//!   "ProjectChanges": {
//!     "ResolvedAssemblyReference": {
//!       "Before": { "Items": { } },
//!       "After": {
//!         "Items": { "System.Xml.dll": { "OriginalItemSpec": "System.Xml" } },
//!         "RuleName": "ResolvedAssemblyReference"
//!       },
//!       "Difference": {
//!         "AddedItems": [ "System.Xml.dll" ],
//!         "ChangedItems": [ ],
//!         "RemovedItems": [ ],
//!         "AnyChanges": "true"
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! `AnyChanges` is accepted both as a JSON boolean and as the string
//! `"true"`/`"false"`; it is a plain `bool` once parsed.

pub mod io;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub use io::{load_catalog, load_update};

/// Property mapping of one build item.
pub type ItemProperties = BTreeMap<String, String>;

/// One evaluation update: the per-rule changes since the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectUpdate {
    #[serde(default)]
    pub project_changes: BTreeMap<String, RuleChange>,
}

impl ProjectUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an update from JSON, defaulting missing rule names to their key.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let mut update: Self = serde_json::from_str(content)?;
        for (rule_name, change) in &mut update.project_changes {
            for snapshot in [&mut change.before, &mut change.after] {
                if snapshot.rule_name.is_empty() {
                    snapshot.rule_name.clone_from(rule_name);
                }
            }
        }
        Ok(update)
    }

    /// Add or replace the change for `change.after.rule_name`.
    #[must_use]
    pub fn with_rule(mut self, change: RuleChange) -> Self {
        self.project_changes.insert(change.after.rule_name.clone(), change);
        self
    }

    pub fn rule(&self, rule_name: &str) -> Option<&RuleChange> {
        self.project_changes.get(rule_name)
    }
}

/// Before/after item snapshots of one rule plus their difference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleChange {
    #[serde(default)]
    pub before: RuleSnapshot,
    #[serde(default)]
    pub after: RuleSnapshot,
    #[serde(default)]
    pub difference: ItemDifference,
}

impl RuleChange {
    /// Empty change for `rule_name` with `any_changes` set.
    pub fn new(rule_name: impl Into<String>) -> Self {
        let rule_name = rule_name.into();
        Self {
            before: RuleSnapshot::new(rule_name.clone()),
            after: RuleSnapshot::new(rule_name),
            difference: ItemDifference {
                any_changes: true,
                ..ItemDifference::default()
            },
        }
    }

    #[must_use]
    pub fn with_before_item(mut self, key: &str, properties: &[(&str, &str)]) -> Self {
        self.before.items.insert(key.to_string(), to_properties(properties));
        self
    }

    #[must_use]
    pub fn with_after_item(mut self, key: &str, properties: &[(&str, &str)]) -> Self {
        self.after.items.insert(key.to_string(), to_properties(properties));
        self
    }

    #[must_use]
    pub fn with_added(mut self, keys: &[&str]) -> Self {
        self.difference.added_items.extend(keys.iter().map(|k| (*k).to_string()));
        self
    }

    #[must_use]
    pub fn with_removed(mut self, keys: &[&str]) -> Self {
        self.difference.removed_items.extend(keys.iter().map(|k| (*k).to_string()));
        self
    }

    #[must_use]
    pub fn with_changed(mut self, keys: &[&str]) -> Self {
        self.difference.changed_items.extend(keys.iter().map(|k| (*k).to_string()));
        self
    }

    #[must_use]
    pub fn with_any_changes(mut self, any_changes: bool) -> Self {
        self.difference.any_changes = any_changes;
        self
    }
}

/// Items produced by one rule at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleSnapshot {
    #[serde(default)]
    pub rule_name: String,
    #[serde(default)]
    pub items: BTreeMap<String, ItemProperties>,
}

impl RuleSnapshot {
    pub fn new(rule_name: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            items: BTreeMap::new(),
        }
    }

    pub fn item(&self, key: &str) -> Option<&ItemProperties> {
        self.items.get(key)
    }
}

/// Item keys that changed between `before` and `after`, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemDifference {
    #[serde(default)]
    pub added_items: Vec<String>,
    #[serde(default)]
    pub changed_items: Vec<String>,
    #[serde(default)]
    pub removed_items: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_any_changes")]
    pub any_changes: bool,
}

/// Rule name to item type mapping supplied with each update.
///
/// Rules absent from the catalog produce no usable item type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    rules: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    #[must_use]
    pub fn with_rule(mut self, rule_name: impl Into<String>, item_type: impl Into<String>) -> Self {
        self.rules.insert(rule_name.into(), item_type.into());
        self
    }

    pub fn item_type(&self, rule_name: &str) -> Option<&str> {
        self.rules.get(rule_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn to_properties(properties: &[(&str, &str)]) -> ItemProperties {
    properties.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

fn deserialize_any_changes<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(value) => Ok(value),
        BoolOrString::String(value) => match value.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(D::Error::custom(format!(
                "invalid AnyChanges value '{value}', expected true or false"
            ))),
        },
    }
}
