//! Repository synchronizer
//!
//! Ensures a dependency's working copy exists and is checked out at
//! exactly the pinned revision. Fresh clone when the working copy is
//! absent (or lacks version control metadata), fetch plus forced checkout
//! when it is present. Idempotent apart from the network fetch.

use crate::dependency::Dependency;
use crate::error::{ExtsyncError, ExtsyncResult};
use crate::vcs::VersionControlClient;
use tokio::fs;
use tracing::info;

/// Outcome of a synchronize call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Working copy was cloned from scratch
    Cloned,
    /// Existing working copy was fetched and re-pinned
    Updated,
}

/// Drives clone-or-update decisions for dependency working copies
pub struct Synchronizer<'a, V: VersionControlClient> {
    vcs: &'a V,
}

impl<'a, V: VersionControlClient> Synchronizer<'a, V> {
    /// Create a synchronizer over a version control client
    pub fn new(vcs: &'a V) -> Self {
        Self { vcs }
    }

    /// Bring the dependency's working copy to the pinned revision
    ///
    /// Local modifications and generated build files never block
    /// re-pinning; the checkout is always forced.
    pub async fn synchronize(
        &self,
        dep: &Dependency,
        revision: &str,
    ) -> ExtsyncResult<SyncAction> {
        if self.vcs.has_metadata(&dep.local_path) {
            info!(
                "Updating {} repository ({})",
                dep.name,
                dep.local_path.display()
            );
            self.vcs.fetch_all(&dep.local_path).await?;
            self.vcs.checkout_forced(&dep.local_path, revision).await?;
            return Ok(SyncAction::Updated);
        }

        info!(
            "Creating local {} repository ({})",
            dep.name,
            dep.local_path.display()
        );

        // A directory without the metadata marker is stale; discard it
        if dep.local_path.exists() {
            fs::remove_dir_all(&dep.local_path).await.map_err(|e| {
                ExtsyncError::io(format!("removing stale {}", dep.local_path.display()), e)
            })?;
        }

        fs::create_dir_all(&dep.local_path).await.map_err(|e| {
            ExtsyncError::io(format!("creating {}", dep.local_path.display()), e)
        })?;

        self.vcs.clone_into(&dep.repository, &dep.local_path).await?;
        self.vcs.checkout_forced(&dep.local_path, revision).await?;
        Ok(SyncAction::Cloned)
    }
}
