//! Replay evaluation snapshots against a provider.
//!
//! Snapshots are applied in command-line order to one provider built from
//! the config file. With `--changes` the change-set of every snapshot is
//! printed before the final tree. In JSON format the whole output is a
//! single document:
//!
//! ```json
//! { "changes": [ { "snapshot": "s1.json", "added": [], "updated": [], "removed": [] } ],
//!   "tree": { "caption": "Assembly", "children": [] } }
//! ```
//!
//! Without `--changes` the JSON output is the tree object alone.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use crate::config::ProviderConfig;
use crate::provider::DependenciesProvider;
use crate::snapshot::{load_catalog, load_update};
use crate::tree::{
    DefaultNodeFactory, OutputFormat, change_to_json, node_to_json, render_change, render_tree,
};

#[derive(Args, Debug)]
pub struct ReplayCommand {
    /// Provider config file (TOML).
    #[arg(short = 'c', long)]
    config: PathBuf,

    /// Rule catalog mapping rule names to item types (JSON).
    #[arg(long)]
    catalog: PathBuf,

    /// Output format (tree, json, text).
    #[arg(short = 'f', long, default_value = "tree")]
    format: String,

    /// Print the change-set of each snapshot.
    #[arg(long)]
    changes: bool,

    /// Snapshot files, applied in order.
    #[arg(required = true)]
    snapshots: Vec<PathBuf>,
}

impl ReplayCommand {
    pub fn execute(self) -> Result<()> {
        let format: OutputFormat = self.format.parse()?;
        let config = ProviderConfig::load(&self.config)?;
        let catalog = load_catalog(&self.catalog)?;

        let factory = DefaultNodeFactory::new(config.provider_type.clone());
        let mut provider = DependenciesProvider::from_config(factory, &config);

        let mut changes = Vec::new();
        for path in &self.snapshots {
            let update = load_update(path)?;
            let change = provider.apply_update(&update, &catalog);
            info!(
                "Applied {}: {} added, {} updated, {} removed",
                path.display(),
                change.added_nodes.len(),
                change.updated_nodes.len(),
                change.removed_nodes.len()
            );
            changes.push((path, change));
        }

        if format == OutputFormat::Json {
            let tree = node_to_json(provider.root());
            let json = if self.changes {
                let changes: Vec<_> = changes
                    .iter()
                    .map(|(path, change)| {
                        let mut value = change_to_json(change);
                        value["snapshot"] = serde_json::json!(path.display().to_string());
                        value
                    })
                    .collect();
                serde_json::json!({ "changes": changes, "tree": tree })
            } else {
                tree
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
            return Ok(());
        }

        if self.changes {
            for (path, change) in &changes {
                println!("{}", path.display().to_string().bold());
                print!("{}", render_change(change, format)?);
                println!();
            }
        }
        print!("{}", render_tree(provider.root(), format)?);
        Ok(())
    }
}
