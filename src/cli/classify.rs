//! Show how a provider classifies the rules of one snapshot.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::ProviderConfig;
use crate::provider::DependenciesProvider;
use crate::rules::{RuleKind, classify};
use crate::snapshot::{load_catalog, load_update};
use crate::tree::DefaultNodeFactory;

#[derive(Args, Debug)]
pub struct ClassifyCommand {
    /// Provider config file (TOML).
    #[arg(short = 'c', long)]
    config: PathBuf,

    /// Rule catalog mapping rule names to item types (JSON).
    #[arg(long)]
    catalog: PathBuf,

    /// Snapshot file whose rules are classified.
    snapshot: PathBuf,
}

impl ClassifyCommand {
    pub fn execute(self) -> Result<()> {
        let config = ProviderConfig::load(&self.config)?;
        let catalog = load_catalog(&self.catalog)?;
        let update = load_update(&self.snapshot)?;

        let provider =
            DependenciesProvider::from_config(DefaultNodeFactory::new(config.provider_type.clone()), &config);

        for (rule_name, change) in &update.project_changes {
            let class = classify(rule_name, &catalog, provider.rule_names());
            let kind = match class.kind {
                RuleKind::Resolved => class.kind.to_string().green(),
                RuleKind::Unresolved => class.kind.to_string().yellow(),
                RuleKind::Ignored => class.kind.to_string().bright_black(),
            };
            let item_type = class.item_type.as_deref().unwrap_or("(not in catalog)");
            let changed = if change.difference.any_changes {
                ""
            } else {
                " no changes"
            };
            println!("{rule_name}: {kind} {item_type}{changed}");
        }
        Ok(())
    }
}
