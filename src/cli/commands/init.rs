//! Init command - write a default project-local extsync.toml

use crate::cli::args::InitArgs;
use crate::config::{Config, ConfigManager, LOCAL_CONFIG_NAME};
use crate::error::{ExtsyncError, ExtsyncResult};
use crate::ui::{self, UiContext};

/// Execute the init command
pub async fn execute(args: InitArgs) -> ExtsyncResult<()> {
    let dir = match args.path {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| ExtsyncError::io("getting current directory", e))?,
    };
    let target = dir.join(LOCAL_CONFIG_NAME);

    if target.exists() && !args.force {
        return Err(ExtsyncError::ConfigExists(target));
    }

    ConfigManager::write_to(&target, &Config::default()).await?;

    let ctx = UiContext::detect();
    ui::step_ok(&ctx, &format!("Wrote {}", target.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn init_writes_default_config() {
        let tmp = TempDir::new().unwrap();
        let args = InitArgs {
            force: false,
            path: Some(tmp.path().to_path_buf()),
        };

        execute(args).await.unwrap();

        let written = std::fs::read_to_string(tmp.path().join(LOCAL_CONFIG_NAME)).unwrap();
        assert!(written.contains("glslang"));
        assert!(written.contains("googletest"));
    }

    #[tokio::test]
    async fn init_refuses_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(LOCAL_CONFIG_NAME), "# existing").unwrap();

        let args = InitArgs {
            force: false,
            path: Some(tmp.path().to_path_buf()),
        };
        let err = execute(args).await.unwrap_err();
        assert!(matches!(err, ExtsyncError::ConfigExists(_)));

        let args = InitArgs {
            force: true,
            path: Some(tmp.path().to_path_buf()),
        };
        execute(args).await.unwrap();
    }
}
