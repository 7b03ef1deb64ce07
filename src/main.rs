//! deptree CLI entry point
//!
//! Parses arguments, installs the log subscriber and runs the command.
//! Errors are printed with context and suggestions, exiting with status 1.

use anyhow::Result;
use clap::Parser;
use deptree_cli::cli;
use deptree_cli::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    cli.build_config().init_tracing();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
