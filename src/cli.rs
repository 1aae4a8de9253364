// src/cli.rs
//! CLI definitions for apkforge
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "apkforge")]
#[command(author = "Apkforge Project")]
#[command(version)]
#[command(about = "Plan Android app packaging actions from declarative module descriptions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan the packaging actions for a module
    Plan {
        /// Path to the module description (TOML)
        module: String,

        /// Path to the build environment file
        #[arg(short, long)]
        env: String,

        /// Module source root (default: the module file's directory)
        #[arg(long)]
        source_root: Option<String>,

        /// Direct dependency, repeatable. Formats:
        /// name=classpath:<file>[,<file>...], name=export:<file>, name=lib
        #[arg(long = "dep", value_name = "SPEC")]
        deps: Vec<String>,

        /// Print every dependency file instead of a count
        #[arg(long)]
        show_inputs: bool,
    },

    /// Validate a module description without planning
    Validate {
        /// Path to the module description (TOML)
        module: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type
        shell: Shell,
    },
}
