//! Rendering of dependency trees and change-sets for the CLI.
//!
//! # Output Formats
//!
//! ## Tree Format (Default)
//! ```text
//! Assembly
//! ├── item3 (unresolved)
//! ├── item1
//! └── Caption1 (Reference/TopNodeItemSpec1)
//! ```
//!
//! ## Text Format
//! ```text
//! Assembly [RootNode]
//!   item3 [Reference/item3] unresolved
//! ```
//!
//! ## JSON Format
//! Nested objects with `caption`, `item_spec`, `item_type`, `resolved`,
//! `priority`, `properties` and `children`.

use anyhow::Result;
use colored::Colorize;
use std::fmt::Write as _;
use std::str::FromStr;

use super::change::DependenciesChange;
use super::node::DependencyNode;
use crate::core::DeptreeError;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Tree,
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = DeptreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(Self::Tree),
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(DeptreeError::InvalidFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Render a provider tree rooted at `root`.
pub fn render_tree(root: &DependencyNode, format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Tree => {
            writeln!(out, "{}", root.caption().cyan().bold())?;
            if root.children().is_empty() {
                writeln!(out, "{}", "(no dependencies)".bright_black())?;
            }
            let count = root.children().len();
            for (i, child) in root.children().iter().enumerate() {
                write_tree_node(&mut out, child, "", i == count - 1)?;
            }
        }
        OutputFormat::Text => write_text_node(&mut out, root, 0)?,
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(&node_to_json(root))?;
            out.push('\n');
        }
    }
    Ok(out)
}

/// Render one change-set.
pub fn render_change(change: &DependenciesChange, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&change_to_json(change))?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Tree | OutputFormat::Text => {
            if change.is_empty() {
                return Ok("(no changes)\n".to_string());
            }
            Ok(change.to_string())
        }
    }
}

fn write_tree_node(
    out: &mut String,
    node: &DependencyNode,
    prefix: &str,
    is_last: bool,
) -> Result<()> {
    let connector = if is_last {
        "└── "
    } else {
        "├── "
    };
    let state = if node.resolved() {
        String::new()
    } else {
        format!(" {}", "(unresolved)".yellow())
    };
    writeln!(out, "{}{}{}{}", prefix, connector, node.caption(), state)?;

    let child_prefix = if is_last {
        format!("{prefix}    ")
    } else {
        format!("{prefix}│   ")
    };
    let count = node.children().len();
    for (i, child) in node.children().iter().enumerate() {
        write_tree_node(out, child, &child_prefix, i == count - 1)?;
    }
    Ok(())
}

fn write_text_node(out: &mut String, node: &DependencyNode, indent: usize) -> Result<()> {
    let state = if node.resolved() {
        ""
    } else {
        " unresolved"
    };
    writeln!(out, "{}{} [{}]{}", "  ".repeat(indent), node.caption(), node.id(), state)?;
    for child in node.children() {
        write_text_node(out, child, indent + 1)?;
    }
    Ok(())
}

/// JSON form of a change-set: `added`, `updated` and `removed` node arrays.
pub fn change_to_json(change: &DependenciesChange) -> serde_json::Value {
    serde_json::json!({
        "added": change.added_nodes.iter().map(node_to_json).collect::<Vec<_>>(),
        "updated": change.updated_nodes.iter().map(node_to_json).collect::<Vec<_>>(),
        "removed": change.removed_nodes.iter().map(node_to_json).collect::<Vec<_>>(),
    })
}

/// JSON form of a node and its subtree.
pub fn node_to_json(node: &DependencyNode) -> serde_json::Value {
    serde_json::json!({
        "caption": node.caption(),
        "item_spec": node.id().item_spec,
        "item_type": node.id().item_type,
        "resolved": node.resolved(),
        "priority": node.priority(),
        "properties": node.properties(),
        "children": node.children().iter().map(node_to_json).collect::<Vec<_>>(),
    })
}
