//! Build dispatch for synchronized working copies
//!
//! Resolves the install prefix, keeps the incremental build directory, and
//! drives the platform strategy's configure + build/install invocations. A
//! failed configure is always fatal; failed build/install steps follow the
//! configured failure policy.

pub mod platform;
pub mod runner;
pub mod strategy;

pub use platform::Platform;
pub use runner::{ProcessCall, ProcessRunner, RunOutput, SystemRunner};
pub use strategy::{BuildPlan, BuildStrategy, CrossPlan};

use crate::config::{Config, FailurePolicy};
use crate::dependency::Dependency;
use crate::error::{ExtsyncError, ExtsyncResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Build configuration resolved once at startup and shared read-only
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Install prefix override; each dependency installs into its own
    /// working copy when unset
    pub install_prefix: Option<PathBuf>,
    /// Cross-compilation inputs, present iff a sysroot was supplied
    pub cross: Option<CrossPlan>,
    /// Build subdirectory name, derived from cross mode
    pub build_dir_name: String,
    /// Compile parallelism
    pub jobs: usize,
    /// Policy for failed build/install steps
    pub policy: FailurePolicy,
    /// Host platform, detected once
    pub platform: Platform,
}

impl BuildConfig {
    /// Resolve build configuration from file config and CLI overrides
    ///
    /// The build directory name and toolchain file fall out of whether a
    /// sysroot was supplied; nothing here mutates shared state.
    pub fn resolve(
        config: &Config,
        project_root: &Path,
        install_path: Option<PathBuf>,
        sysroot: Option<PathBuf>,
        policy_override: Option<FailurePolicy>,
        platform: Platform,
    ) -> Self {
        let cross = sysroot.map(|sysroot| CrossPlan {
            toolchain_file: resolve_against(project_root, &config.paths.toolchain_file),
            sysroot,
        });

        let build_dir_name = if cross.is_some() {
            config.build.cross_build_dir.clone()
        } else {
            config.build.build_dir.clone()
        };

        let jobs = if config.build.jobs > 0 {
            config.build.jobs
        } else {
            std::thread::available_parallelism()
                .map(usize::from)
                .unwrap_or(1)
        };

        Self {
            install_prefix: install_path,
            cross,
            build_dir_name,
            jobs,
            policy: policy_override.unwrap_or(config.build.policy),
            platform,
        }
    }
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Result of building one dependency
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Project name
    pub project: String,
    /// Steps that exited non-zero but were tolerated (best-effort policy)
    pub failed_steps: Vec<String>,
    /// Accumulated subprocess output
    pub log: String,
}

impl BuildReport {
    /// Whether every step succeeded
    pub fn is_clean(&self) -> bool {
        self.failed_steps.is_empty()
    }
}

/// Drives configure + build/install for one dependency at a time
pub struct BuildDispatcher<'a, R: ProcessRunner> {
    runner: &'a R,
}

impl<'a, R: ProcessRunner> BuildDispatcher<'a, R> {
    /// Create a dispatcher over a process runner
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// Build and install one synchronized dependency
    ///
    /// Reads the working copy as an immutable source tree; writes only
    /// into the build subdirectory and the install prefix.
    pub async fn build(&self, dep: &Dependency, config: &BuildConfig) -> ExtsyncResult<BuildReport> {
        // Strategy selection happens before any subprocess, so an
        // unsupported platform never spawns anything
        let strategy = BuildStrategy::for_platform(config.platform)?;

        let install_prefix = config
            .install_prefix
            .clone()
            .unwrap_or_else(|| dep.local_path.clone());

        // Never recreate an existing build dir; incremental builds are
        // intentional
        let build_dir = dep.local_path.join(&config.build_dir_name);
        if !build_dir.exists() {
            fs::create_dir_all(&build_dir).await.map_err(|e| {
                ExtsyncError::io(format!("creating build dir {}", build_dir.display()), e)
            })?;
        }

        let plan = BuildPlan {
            build_dir,
            install_prefix,
            flags: dep.flags.clone(),
            cross: config.cross.clone(),
            jobs: config.jobs,
        };

        let mut report = BuildReport {
            project: dep.name.clone(),
            failed_steps: Vec::new(),
            log: String::new(),
        };

        let configure = strategy.configure_call(&plan);
        debug!("Configuring {} with {}", dep.name, configure.display());
        let output = self.runner.run(&configure).await?;
        report.log.push_str(&output.stdout);
        if !output.success {
            return Err(ExtsyncError::ConfigureFailed {
                project: dep.name.clone(),
                stderr: output.stderr,
            });
        }

        for call in strategy.build_calls(&plan) {
            let output = self.runner.run(&call).await?;
            report.log.push_str(&output.stdout);
            if output.success {
                continue;
            }

            let err = ExtsyncError::BuildStepFailed {
                project: dep.name.clone(),
                step: call.display(),
                stderr: output.stderr,
            };
            match config.policy {
                FailurePolicy::Strict => return Err(err),
                FailurePolicy::BestEffort => {
                    warn!("{err}");
                    report.failed_steps.push(call.display());
                }
            }
        }

        Ok(report)
    }
}
