//! extsync - Pinned external source dependency sync
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use extsync::cli::{Cli, Commands};
use extsync::config::ConfigManager;
use extsync::error::{ExtsyncError, ExtsyncResult};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ExtsyncResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("extsync=warn"),
        1 => EnvFilter::new("extsync=info"),
        _ => EnvFilter::new("extsync=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Init command doesn't need config loading
    if let Commands::Init(args) = cli.command {
        return extsync::cli::commands::init(args).await;
    }

    let manager = if let Some(path) = cli.config {
        ConfigManager::with_path(path)
    } else {
        ConfigManager::new()
    };

    let cwd = std::env::current_dir()
        .map_err(|e| ExtsyncError::io("getting current directory", e))?;
    let (config, project_root) = manager.load(&cwd).await?;

    match cli.command {
        Commands::Init(_) => unreachable!("Init handled above"),
        Commands::Sync(args) => {
            extsync::cli::commands::sync(args, &config, &project_root).await
        }
        Commands::Status(args) => {
            extsync::cli::commands::status(args, &config, &project_root).await
        }
        Commands::Config(args) => {
            extsync::cli::commands::config(args, &config, &manager).await
        }
    }
}
