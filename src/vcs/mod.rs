//! Version control abstraction
//!
//! Provides a trait over the clone/fetch/checkout operations the
//! synchronizer needs, so its decision logic can be tested without real
//! network or subprocess access. The production implementation shells out
//! to the `git` CLI.

pub mod git;

pub use git::GitClient;

use crate::error::ExtsyncResult;
use async_trait::async_trait;
use std::path::Path;

/// Abstract version control client
#[async_trait]
pub trait VersionControlClient: Send + Sync {
    /// Clone `repository` into an existing, empty directory
    async fn clone_into(&self, repository: &str, dir: &Path) -> ExtsyncResult<()>;

    /// Fetch all remote refs for the working copy at `dir`
    async fn fetch_all(&self, dir: &Path) -> ExtsyncResult<()>;

    /// Check out `revision`, discarding local modifications
    async fn checkout_forced(&self, dir: &Path, revision: &str) -> ExtsyncResult<()>;

    /// Whether `dir` contains version control metadata
    ///
    /// Directory existence alone is not enough; a stale or partial
    /// directory without the marker counts as absent.
    fn has_metadata(&self, dir: &Path) -> bool;

    /// Revision currently checked out at `dir`
    async fn current_revision(&self, dir: &Path) -> ExtsyncResult<String>;
}
