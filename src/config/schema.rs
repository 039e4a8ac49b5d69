//! Configuration schema for extsync
//!
//! Configuration lives in an `extsync.toml` next to the host project
//! (discovered upward from the current directory) or in
//! `~/.config/extsync/config.toml`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory layout settings
    pub paths: PathsConfig,

    /// Build behavior settings
    pub build: BuildSection,

    /// Ordered dependency catalog; processed top to bottom
    pub projects: Vec<ProjectConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            build: BuildSection::default(),
            projects: ProjectConfig::default_catalog(),
        }
    }
}

/// Directory layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding working copies and `<name>_revision` files,
    /// relative to the project root unless absolute
    pub external_dir: PathBuf,

    /// Toolchain file used when cross-compiling, relative to the
    /// project root unless absolute
    pub toolchain_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            external_dir: PathBuf::from("External"),
            toolchain_file: PathBuf::from("CMake/toolchain-arm.cmake"),
        }
    }
}

/// Build behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// What to do when a build/install step exits non-zero
    pub policy: FailurePolicy,

    /// Build subdirectory name for native builds
    pub build_dir: String,

    /// Build subdirectory name when a sysroot is set
    pub cross_build_dir: String,

    /// Compile parallelism (0 = detect available processors)
    pub jobs: usize,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            policy: FailurePolicy::BestEffort,
            build_dir: "build".to_string(),
            cross_build_dir: "cross_build".to_string(),
            jobs: 0,
        }
    }
}

/// Policy for non-zero exits from build/install steps.
///
/// Configure failures are always fatal; this only governs the later steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Record the failure, warn, keep going with remaining dependencies
    BestEffort,
    /// Abort the run on the first failed step
    Strict,
}

/// One external dependency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Name; also the working copy directory and revision file stem
    pub name: String,

    /// Git repository URL
    pub repository: String,

    /// Extra cmake configure flags for this project
    #[serde(default)]
    pub flags: Vec<String>,
}

impl ProjectConfig {
    /// The stock catalog: glslang and googletest
    pub fn default_catalog() -> Vec<Self> {
        vec![
            Self {
                name: "glslang".to_string(),
                repository: "https://github.com/KhronosGroup/glslang.git".to_string(),
                flags: vec![
                    "-DENABLE_AMD_EXTENSIONS=OFF".to_string(),
                    "-DENABLE_NV_EXTENSIONS=OFF".to_string(),
                    "-DENABLE_OPT=OFF".to_string(),
                ],
            },
            Self {
                name: "googletest".to_string(),
                repository: "https://github.com/google/googletest.git".to_string(),
                flags: vec![],
            },
        ]
    }
}
