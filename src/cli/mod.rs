//! Command line interface for kodegen_bundler_assets.
//!
//! Two subcommands share one TOML manifest: `validate` checks every set and
//! source image, `generate` writes them.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, RuntimeConfig};
pub use commands::execute_command;
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute_command(args).await
}
