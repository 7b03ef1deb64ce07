//! Test fixtures for snapshots, catalogs and provider configs
//!
//! The scenario fixtures describe one evaluation pass of a provider that
//! registers `rulenameResolved` and `rulenameUnresolved`:
//!
//! - the unresolved rule adds `item1`, `item2`, `item3` and removes `item4`
//! - the resolved rule adds `item21` and `item22`, resolving `item1` and
//!   `item2`, plus an item without an original item spec
//! - the resolved rule loses `resolvedItemTobeRemoved`, whose declared item
//!   is still present
//! - an unregistered rule adds an item that must never show up

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot JSON file contents
#[derive(Clone, Debug)]
pub struct SnapshotFixture {
    pub content: String,
    pub name: String,
}

impl SnapshotFixture {
    /// Mixed resolved/unresolved update with every rule reporting changes
    pub fn scenario() -> Self {
        Self {
            name: "scenario".to_string(),
            content: scenario_json("true"),
        }
    }

    /// Same update with every rule reporting no changes
    pub fn unchanged() -> Self {
        Self {
            name: "unchanged".to_string(),
            content: scenario_json("false"),
        }
    }

    /// Follow-up update that drops `item3` from the unresolved rule
    pub fn remove_item3() -> Self {
        Self {
            name: "remove_item3".to_string(),
            content: r#"{
    "ProjectChanges": {
        "rulenameUnresolved": {
            "Before": { "Items": { "item3": { } } },
            "After": { "Items": { "item1": { }, "item2": { } } },
            "Difference": {
                "AddedItems": [ ],
                "ChangedItems": [ ],
                "RemovedItems": [ "item3" ],
                "AnyChanges": "true"
            }
        }
    }
}"#
            .to_string(),
        }
    }

    pub fn invalid_json() -> Self {
        Self {
            name: "invalid".to_string(),
            content: r#"{ "ProjectChanges": { "rulenameUnresolved": "#.to_string(),
        }
    }

    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(format!("{}.json", self.name));
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Catalog JSON file contents
#[derive(Clone, Debug)]
pub struct CatalogFixture {
    pub content: String,
}

impl CatalogFixture {
    pub fn scenario() -> Self {
        Self {
            content: r#"{
    "rulenameResolved": "myResolvedItemType",
    "rulenameUnresolved": "myUnresolvedItemType"
}"#
            .to_string(),
        }
    }

    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join("catalog.json");
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Provider config TOML file contents
#[derive(Clone, Debug)]
pub struct ProviderConfigFixture {
    pub content: String,
}

impl ProviderConfigFixture {
    pub fn scenario() -> Self {
        Self {
            content: r#"
provider_type = "MyProvider"
resolved_rules = ["rulenameResolved"]
unresolved_rules = ["rulenameUnresolved"]
"#
            .trim()
            .to_string(),
        }
    }

    /// A rule registered as both resolved and unresolved
    pub fn overlapping_rules() -> Self {
        Self {
            content: r#"
provider_type = "MyProvider"
resolved_rules = ["rulenameResolved"]
unresolved_rules = ["rulenameResolved"]
"#
            .trim()
            .to_string(),
        }
    }

    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join("provider.toml");
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}

fn scenario_json(any_changes: &str) -> String {
    r#"{
    "ProjectChanges": {
        "rulenameResolved": {
            "Before": {
                "Items": {
                    "resolvedItemTobeRemoved": {
                        "OriginalItemSpec": "unresolvedItemTobeAddedInsteadOfRemovedResolvedItem"
                    }
                },
                "RuleName": "rulenameResolved"
            },
            "After": {
                "Items": {
                    "item21": { "OriginalItemSpec": "item1" },
                    "item22": { "OriginalItemSpec": "item2" },
                    "itemWithoutOriginalItemSpec": { }
                },
                "RuleName": "rulenameResolved"
            },
            "Difference": {
                "AddedItems": [ "item21", "item22", "itemWithoutOriginalItemSpec", "itemWithoutPropertiesInAfter" ],
                "ChangedItems": [ ],
                "RemovedItems": [ "resolvedItemTobeRemoved" ],
                "AnyChanges": "ANY_CHANGES"
            }
        },
        "rulenameUnresolved": {
            "After": {
                "Items": {
                    "item1": { },
                    "item2": { },
                    "item3": { },
                    "unresolvedItemTobeAddedInsteadOfRemovedResolvedItem": { }
                },
                "RuleName": "rulenameUnresolved"
            },
            "Difference": {
                "AddedItems": [ "item1", "item2", "item3" ],
                "ChangedItems": [ ],
                "RemovedItems": [ "item4", "itemNotInRootNode", "itemWithoutPropertiesInAfter" ],
                "AnyChanges": "ANY_CHANGES"
            }
        },
        "rulenameUnknown": {
            "After": {
                "Items": { "shouldNotAppear": { } },
                "RuleName": "rulenameUnknown"
            },
            "Difference": {
                "AddedItems": [ "shouldNotAppear" ],
                "ChangedItems": [ ],
                "RemovedItems": [ ],
                "AnyChanges": "ANY_CHANGES"
            }
        }
    }
}"#
    .replace("ANY_CHANGES", any_changes)
}
