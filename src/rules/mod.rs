//! Rule classification.
//!
//! A provider registers which evaluation rules carry its resolved references
//! and which carry the unresolved (declared) ones. Every other rule is
//! ignored. The sets are shared behind [`Arc`] and only ever replaced whole,
//! so a reader holding a clone of [`RuleNames`] never observes a partial
//! reconfiguration.
//!
//! # Rule Kinds
//!
//! - [`RuleKind::Resolved`] - items the build resolved; they replace the
//!   unresolved node of the item that declared them
//! - [`RuleKind::Unresolved`] - items the project declares; they appear as
//!   unresolved nodes until resolved
//! - [`RuleKind::Ignored`] - everything else, never reaches the tree
//!
//! A rule also needs a catalog entry before its items can become nodes; see
//! [`classify`] and [`RuleClass::is_usable`].
//!
//! # Examples
//!
//! ```rust
//! use deptree_cli::rules::{RuleKind, RuleNames, classify};
//! use deptree_cli::snapshot::Catalog;
//!
//! let rules = RuleNames::new()
//!     .with_resolved(["ResolvedAssemblyReference"])
//!     .with_unresolved(["AssemblyReference"]);
//! let catalog = Catalog::new().with_rule("AssemblyReference", "Reference");
//!
//! let class = classify("AssemblyReference", &catalog, &rules);
//! assert_eq!(class.kind, RuleKind::Unresolved);
//! assert!(class.is_usable());
//!
//! // registered but not cataloged
//! assert!(!classify("ResolvedAssemblyReference", &catalog, &rules).is_usable());
//! assert_eq!(rules.kind("Compile"), RuleKind::Ignored);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::snapshot::Catalog;

/// How a rule's items enter the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Resolved,
    Unresolved,
    Ignored,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved => write!(f, "resolved"),
            Self::Unresolved => write!(f, "unresolved"),
            Self::Ignored => write!(f, "ignored"),
        }
    }
}

/// Classification result for one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleClass {
    /// Item type from the catalog, `None` when the rule is not cataloged.
    pub item_type: Option<String>,
    pub kind: RuleKind,
}

impl RuleClass {
    /// Whether items of this rule can become nodes.
    pub fn is_usable(&self) -> bool {
        self.kind != RuleKind::Ignored && self.item_type.is_some()
    }
}

/// Resolved and unresolved rule-name sets of one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleNames {
    resolved: Arc<BTreeSet<String>>,
    unresolved: Arc<BTreeSet<String>>,
}

impl RuleNames {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_resolved<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_resolved(names);
        self
    }

    #[must_use]
    pub fn with_unresolved<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_unresolved(names);
        self
    }

    /// Replace the resolved set.
    pub fn set_resolved<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolved = Arc::new(names.into_iter().map(Into::<String>::into).collect());
    }

    /// Replace the unresolved set.
    pub fn set_unresolved<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unresolved = Arc::new(names.into_iter().map(Into::<String>::into).collect());
    }

    pub fn resolved(&self) -> &BTreeSet<String> {
        &self.resolved
    }

    pub fn unresolved(&self) -> &BTreeSet<String> {
        &self.unresolved
    }

    /// Kind of a rule by set membership alone.
    pub fn kind(&self, rule_name: &str) -> RuleKind {
        if self.resolved.contains(rule_name) {
            RuleKind::Resolved
        } else if self.unresolved.contains(rule_name) {
            RuleKind::Unresolved
        } else {
            RuleKind::Ignored
        }
    }
}

/// Classify `rule_name` against the provider's rule sets and the catalog.
pub fn classify(rule_name: &str, catalog: &Catalog, rules: &RuleNames) -> RuleClass {
    RuleClass {
        item_type: catalog.item_type(rule_name).map(str::to_string),
        kind: rules.kind(rule_name),
    }
}
