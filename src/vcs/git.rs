//! Git CLI client
//!
//! Implements the VersionControlClient trait by shelling out to `git`.
//! Every invocation gets its working directory set explicitly; the process
//! working directory is never mutated, so synchronize calls compose across
//! dependencies.

use crate::error::{ExtsyncError, ExtsyncResult};
use crate::vcs::VersionControlClient;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Version control client backed by the `git` CLI
pub struct GitClient;

impl GitClient {
    /// Create a new git client
    pub fn new() -> Self {
        Self
    }

    /// Run a git command in `dir` and return its output
    async fn exec(&self, dir: &Path, args: &[&str]) -> ExtsyncResult<std::process::Output> {
        debug!("Executing in {}: git {:?}", dir.display(), args);

        Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ExtsyncError::command_failed(format!("git {args:?}"), e))
    }
}

impl Default for GitClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionControlClient for GitClient {
    async fn clone_into(&self, repository: &str, dir: &Path) -> ExtsyncResult<()> {
        let output = self.exec(dir, &["clone", repository, "."]).await?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(ExtsyncError::CloneFailed {
                repository: repository.to_string(),
                dir: dir.to_path_buf(),
                stderr: stderr.to_string(),
            })
        }
    }

    async fn fetch_all(&self, dir: &Path) -> ExtsyncResult<()> {
        let output = self.exec(dir, &["fetch", "--all"]).await?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(ExtsyncError::command_exec("git fetch --all", stderr))
        }
    }

    async fn checkout_forced(&self, dir: &Path, revision: &str) -> ExtsyncResult<()> {
        let output = self.exec(dir, &["checkout", "--force", revision]).await?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(ExtsyncError::RevisionNotFound {
                revision: revision.to_string(),
                dir: dir.to_path_buf(),
                stderr: stderr.to_string(),
            })
        }
    }

    fn has_metadata(&self, dir: &Path) -> bool {
        dir.join(".git").exists()
    }

    async fn current_revision(&self, dir: &Path) -> ExtsyncResult<String> {
        let output = self.exec(dir, &["rev-parse", "HEAD"]).await?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(ExtsyncError::command_exec("git rev-parse HEAD", stderr))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn metadata_marker_required() {
        let tmp = TempDir::new().unwrap();
        let client = GitClient::new();

        // A plain directory is not a working copy
        assert!(!client.has_metadata(tmp.path()));

        std::fs::create_dir(tmp.path().join(".git")).unwrap();
        assert!(client.has_metadata(tmp.path()));
    }

    #[test]
    fn metadata_missing_dir() {
        let client = GitClient::new();
        assert!(!client.has_metadata(Path::new("/nonexistent/extsync-test")));
    }
}
