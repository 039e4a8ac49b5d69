//! Dependency model
//!
//! A dependency ties a project name to its repository and the on-disk
//! locations derived from it: the working copy at `<external_dir>/<name>`
//! and the revision file at `<external_dir>/<name>_revision`.

use crate::config::ProjectConfig;
use std::path::{Path, PathBuf};

/// One external dependency with resolved paths
#[derive(Debug, Clone)]
pub struct Dependency {
    /// Project name
    pub name: String,
    /// Git repository URL
    pub repository: String,
    /// Extra cmake configure flags
    pub flags: Vec<String>,
    /// Working copy location
    pub local_path: PathBuf,
}

impl Dependency {
    /// Resolve a catalog entry against the external sources directory
    pub fn resolve(project: &ProjectConfig, external_dir: &Path) -> Self {
        Self {
            name: project.name.clone(),
            repository: project.repository.clone(),
            flags: project.flags.clone(),
            local_path: external_dir.join(&project.name),
        }
    }

    /// Path of this dependency's pinned revision file
    pub fn revision_file(&self, external_dir: &Path) -> PathBuf {
        external_dir.join(format!("{}_revision", self.name))
    }
}
