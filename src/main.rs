// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            module,
            env,
            source_root,
            deps,
            show_inputs,
        } => commands::cmd_plan(&module, &env, source_root.as_deref(), &deps, show_inputs),
        Commands::Validate { module } => commands::cmd_validate(&module),
        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}
