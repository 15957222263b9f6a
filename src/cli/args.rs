//! Command line argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Asset catalog generator for Apple bundles
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_assets",
    version,
    about = "Generate Xcode asset catalog sets from a TOML manifest",
    long_about = "Generate color sets, image sets and app icons for an .xcassets catalog,
plus Info.plist and entitlements files, from one TOML manifest.

Usage:
  kodegen_bundler_assets validate assets.toml
  kodegen_bundler_assets generate assets.toml --out App/Assets.xcassets
  kodegen_bundler_assets generate assets.toml --out App/Assets.xcassets --overwrite"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Show detailed progress
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write every set the manifest describes
    Generate {
        /// Asset manifest
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Asset catalog directory the sets are written into
        #[arg(short, long, value_name = "DIR", env = "KODEGEN_ASSETS_OUT")]
        out: PathBuf,

        /// Replace sets and files that already exist
        #[arg(long)]
        overwrite: bool,
    },

    /// Check the manifest and every source image without writing anything
    Validate {
        /// Asset manifest
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Generate { .. } => "generate",
            Command::Validate { .. } => "validate",
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    pub fn verbose_println(&self, message: &str) {
        let _ = self.output.verbose(message);
    }

    /// Always shown, even in quiet mode.
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    pub fn progress(&self, message: &str) {
        let _ = self.output.progress(message);
    }

    pub fn section(&self, title: &str) {
        let _ = self.output.section(title);
    }

    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }

    pub fn is_quiet(&self) -> bool {
        self.output.is_quiet()
    }
}
