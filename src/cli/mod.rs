//! Command-line interface for deptree.
//!
//! # Available Commands
//!
//! - `replay` - Apply evaluation snapshots to a provider and print its tree
//! - `classify` - Show how a provider classifies the rules of a snapshot
//!
//! # Examples
//!
//! ```bash
//! # Replay two snapshots and show the change-set of each
//! deptree replay --config provider.toml --catalog catalog.json --changes s1.json s2.json
//!
//! # Machine-readable output
//! deptree replay --config provider.toml --catalog catalog.json --format json s1.json
//!
//! # Which rules of a snapshot feed the provider?
//! deptree classify --config provider.toml --catalog catalog.json s1.json
//! ```
//!
//! # Global Options
//!
//! - `--verbose` - Log reconciliation decisions at debug level
//! - `--quiet` - Disable logging entirely
//!
//! Logs go to stderr, command output to stdout.

mod classify;
mod replay;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub use classify::ClassifyCommand;
pub use replay::ReplayCommand;

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Forced log filter. `None` means logging is disabled.
    pub log_level: Option<String>,

    /// Whether `RUST_LOG` may override [`log_level`](Self::log_level).
    pub honor_env: bool,
}

impl CliConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Does nothing when logging is disabled or a subscriber is already set.
    pub fn init_tracing(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter = if self.honor_env {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
        } else {
            EnvFilter::new(level)
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Top-level command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "deptree",
    about = "Maintain a project's dependency tree from build evaluation snapshots",
    version,
    long_about = "deptree replays build evaluation snapshots against a dependencies provider \
                  and prints the resulting tree of resolved and unresolved references."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log reconciliation decisions at debug level.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Disable logging.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply snapshots in order and print the provider's tree.
    Replay(ReplayCommand),

    /// Print the kind and item type of every rule in a snapshot.
    Classify(ClassifyCommand),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Replay(cmd) => cmd.execute(),
            Commands::Classify(cmd) => cmd.execute(),
        }
    }

    /// Translate the global flags into a [`CliConfig`].
    ///
    /// `--verbose` forces `debug`. Without flags the level is `warn` unless
    /// `RUST_LOG` says otherwise. `--quiet` disables logging.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        if self.verbose {
            CliConfig {
                log_level: Some("debug".to_string()),
                honor_env: false,
            }
        } else if self.quiet {
            CliConfig::new()
        } else {
            CliConfig {
                log_level: Some("warn".to_string()),
                honor_env: true,
            }
        }
    }
}
