//! Links resolved build items back to the unresolved items they came from.
//!
//! A resolved item records the item spec of its declared reference in the
//! `OriginalItemSpec` property. The index built here answers "which
//! unresolved rule declares this item spec, and with which item type" across
//! every unresolved rule of an update. Resolved items whose original item
//! spec is not declared by any unresolved rule (transitive references the
//! project never asked for) have no match and stay out of the tree.

use tracing::trace;

use crate::rules::{RuleKind, RuleNames};
use crate::snapshot::{Catalog, ItemProperties, ProjectUpdate, RuleSnapshot};

/// Unresolved counterpart of a resolved item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnresolvedMatch<'a> {
    pub rule_name: &'a str,
    pub item_type: &'a str,
    /// Properties of the unresolved item in its rule's `after` snapshot.
    pub properties: &'a ItemProperties,
}

/// Lookup over the `after` snapshots of all unresolved rules in one update.
///
/// Rules are indexed whether or not their difference reports changes: a
/// resolved item may change while its unresolved declaration stays put.
/// Uncataloged unresolved rules are left out.
///
/// # Lookup Order
///
/// Rules are searched in name order and the first declaring rule wins.
/// Lookups are exact on the item spec.
#[derive(Debug)]
pub struct CrossReferenceIndex<'a> {
    snapshots: Vec<(&'a str, &'a str, &'a RuleSnapshot)>,
    property_name: &'a str,
}

impl<'a> CrossReferenceIndex<'a> {
    pub fn new(
        update: &'a ProjectUpdate,
        catalog: &'a Catalog,
        rules: &RuleNames,
        property_name: &'a str,
    ) -> Self {
        let snapshots = update
            .project_changes
            .iter()
            .filter(|(rule_name, _)| rules.kind(rule_name) == RuleKind::Unresolved)
            .filter_map(|(rule_name, change)| {
                let item_type = catalog.item_type(rule_name);
                if item_type.is_none() {
                    trace!("Unresolved rule '{rule_name}' is not in the catalog; not indexed");
                }
                item_type.map(|item_type| (rule_name.as_str(), item_type, &change.after))
            })
            .collect();

        Self {
            snapshots,
            property_name,
        }
    }

    /// First unresolved rule whose `after` snapshot declares `item_spec`.
    pub fn unresolved_item_type(&self, item_spec: &str) -> Option<UnresolvedMatch<'a>> {
        self.snapshots.iter().find_map(|&(rule_name, item_type, snapshot)| {
            snapshot.item(item_spec).map(|properties| UnresolvedMatch {
                rule_name,
                item_type,
                properties,
            })
        })
    }

    /// Value of the original item spec property, if present.
    pub fn original_item_spec<'p>(&self, properties: &'p ItemProperties) -> Option<&'p str> {
        properties.get(self.property_name).map(String::as_str)
    }

    /// Number of indexed unresolved rules.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
