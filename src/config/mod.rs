//! Configuration management for extsync

pub mod schema;

pub use schema::{Config, FailurePolicy, ProjectConfig};

use crate::error::{ExtsyncError, ExtsyncResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_NAME: &str = "extsync.toml";

/// Configuration manager
///
/// Resolves which config file applies and loads it. The project root is
/// the directory containing the config file, or the current directory when
/// running on built-in defaults; relative paths in `[paths]` resolve
/// against it.
pub struct ConfigManager {
    explicit_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create a config manager using discovery
    pub fn new() -> Self {
        Self {
            explicit_path: None,
        }
    }

    /// Create a config manager with an explicit config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            explicit_path: Some(path),
        }
    }

    /// Get the global config file path
    pub fn global_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("extsync")
            .join("config.toml")
    }

    /// Find a project-local `extsync.toml` walking up from `start`
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        let mut dir = Some(start);
        while let Some(d) = dir {
            let candidate = d.join(LOCAL_CONFIG_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = d.parent();
        }
        None
    }

    /// Resolve the config file that applies, if any
    ///
    /// Order: explicit `--config` path, then a discovered local
    /// `extsync.toml`, then the global config file.
    pub fn resolve_path(&self, cwd: &Path) -> Option<PathBuf> {
        if let Some(ref path) = self.explicit_path {
            return Some(path.clone());
        }
        if let Some(local) = Self::find_local_config(cwd) {
            return Some(local);
        }
        let global = Self::global_config_path();
        global.is_file().then_some(global)
    }

    /// Load configuration and report the project root it applies to
    pub async fn load(&self, cwd: &Path) -> ExtsyncResult<(Config, PathBuf)> {
        match self.resolve_path(cwd) {
            Some(path) => {
                let config = Self::load_from_file(&path).await?;
                let root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.to_path_buf());
                debug!("Loaded config from {}", path.display());
                Ok((config, root))
            }
            None => {
                debug!("No config file found, using defaults");
                Ok((Config::default(), cwd.to_path_buf()))
            }
        }
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(path: &Path) -> ExtsyncResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ExtsyncError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| ExtsyncError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write a config file, creating parent directories as needed
    pub async fn write_to(path: &Path, config: &Config) -> ExtsyncResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    ExtsyncError::io(format!("creating config dir {}", parent.display()), e)
                })?;
            }
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(path, content)
            .await
            .map_err(|e| ExtsyncError::io(format!("writing config to {}", path.display()), e))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_local_config_walks_up() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(LOCAL_CONFIG_NAME), "").unwrap();
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = ConfigManager::find_local_config(&nested).unwrap();
        assert_eq!(found, tmp.path().join(LOCAL_CONFIG_NAME));
    }

    #[test]
    fn find_local_config_missing() {
        let tmp = TempDir::new().unwrap();
        // No parent of a fresh temp dir should carry an extsync.toml, but
        // one could; only assert when discovery comes up empty below tmp.
        if let Some(found) = ConfigManager::find_local_config(tmp.path()) {
            assert!(!found.starts_with(tmp.path()));
        }
    }

    #[tokio::test]
    async fn load_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        std::fs::write(&path, "[build]\npolicy = \"strict\"\n").unwrap();

        let manager = ConfigManager::with_path(path.clone());
        let (config, root) = manager.load(tmp.path()).await.unwrap();
        assert_eq!(config.build.policy, FailurePolicy::Strict);
        assert_eq!(root, tmp.path());
    }

    #[tokio::test]
    async fn load_invalid_toml_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let manager = ConfigManager::with_path(path);
        let err = manager.load(tmp.path()).await.unwrap_err();
        assert!(matches!(err, ExtsyncError::ConfigInvalid { .. }));
    }

    #[tokio::test]
    async fn write_then_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sub").join("extsync.toml");
        ConfigManager::write_to(&path, &Config::default())
            .await
            .unwrap();

        let config = ConfigManager::load_from_file(&path).await.unwrap();
        assert_eq!(config.projects.len(), 2);
    }
}
