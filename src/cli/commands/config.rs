//! Config command - show effective configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{ExtsyncError, ExtsyncResult};

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    manager: &ConfigManager,
) -> ExtsyncResult<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(config)?);
        }
        ConfigAction::Path => {
            let cwd = std::env::current_dir()
                .map_err(|e| ExtsyncError::io("getting current directory", e))?;
            match manager.resolve_path(&cwd) {
                Some(path) => println!("{}", path.display()),
                None => println!("(built-in defaults; no config file found)"),
            }
        }
    }
    Ok(())
}
