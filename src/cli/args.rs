//! CLI argument definitions using clap derive

use crate::config::FailurePolicy;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// extsync - pinned external source dependency sync
///
/// Keeps local working copies of external dependencies checked out at
/// pinned revisions and drives their native cmake build/install.
#[derive(Parser, Debug)]
#[command(name = "extsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "EXTSYNC_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync working copies to their pinned revisions and build them
    Sync(SyncArgs),

    /// Show pinned vs checked-out state per dependency
    Status(StatusArgs),

    /// Initialize a project-local extsync.toml config
    Init(InitArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Arguments for the sync command
#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Projects to process (defaults to the whole catalog, in order)
    pub projects: Vec<String>,

    /// Install prefix override for all dependencies
    /// (default: each dependency's own working copy)
    #[arg(short, long)]
    pub install_path: Option<PathBuf>,

    /// Sysroot for cross compilation; also switches to the cross build
    /// directory and the configured toolchain file
    #[arg(short, long)]
    pub sysroot: Option<PathBuf>,

    /// Failure policy for build/install steps (overrides config)
    #[arg(long, value_enum)]
    pub policy: Option<FailurePolicy>,
}

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite existing extsync.toml
    #[arg(short, long)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Show the configuration file path in use
    Path,
}

/// Output format for the status command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
