//! Sync command - bring every dependency to its pinned revision and build

use crate::build::{BuildConfig, BuildDispatcher, Platform, SystemRunner};
use crate::cli::args::SyncArgs;
use crate::config::{Config, ProjectConfig};
use crate::dependency::Dependency;
use crate::error::{ExtsyncError, ExtsyncResult};
use crate::revision;
use crate::sync::{SyncAction, Synchronizer};
use crate::ui::{self, TaskSpinner, UiContext};
use crate::vcs::GitClient;
use std::path::Path;
use tracing::info;

/// Execute the sync command
pub async fn execute(args: SyncArgs, config: &Config, project_root: &Path) -> ExtsyncResult<()> {
    let external_dir = resolve_external_dir(config, project_root);
    let selected = select_projects(&config.projects, &args.projects)?;

    let build_config = BuildConfig::resolve(
        config,
        project_root,
        args.install_path,
        args.sysroot,
        args.policy,
        Platform::detect(),
    );

    let vcs = GitClient::new();
    let synchronizer = Synchronizer::new(&vcs);
    let runner = SystemRunner::new();
    let dispatcher = BuildDispatcher::new(&runner);
    let ctx = UiContext::detect();

    let mut dirty = false;

    // Dependencies are processed strictly one at a time; the first fatal
    // error halts the run and later entries are not attempted
    for project in selected {
        let dep = Dependency::resolve(project, &external_dir);
        let pinned = revision::read_pinned(&external_dir, &dep.name).await?;
        info!("{} revision: {}", dep.name, pinned);

        let mut spinner = TaskSpinner::new(&ctx);
        spinner.start(&format!("Syncing {} at {}", dep.name, pinned));

        let action = match synchronizer.synchronize(&dep, &pinned).await {
            Ok(action) => action,
            Err(e) => {
                spinner.clear();
                return Err(e);
            }
        };

        spinner.message(&format!("Building {}", dep.name));
        let report = match dispatcher.build(&dep, &build_config).await {
            Ok(report) => report,
            Err(e) => {
                spinner.clear();
                return Err(e);
            }
        };

        let verb = match action {
            SyncAction::Cloned => "cloned",
            SyncAction::Updated => "updated",
        };
        if report.is_clean() {
            spinner.stop(&format!("{} at {} ({verb}, built)", dep.name, pinned));
        } else {
            dirty = true;
            spinner.stop_warn(&format!(
                "{} at {} ({verb}; failed steps: {})",
                dep.name,
                pinned,
                report.failed_steps.join(", ")
            ));
        }
    }

    if dirty {
        ui::step_warn(
            &ctx,
            "Some build/install steps failed; see warnings above (best-effort policy)",
        );
    }

    Ok(())
}

/// Resolve the external sources directory against the project root
pub fn resolve_external_dir(config: &Config, project_root: &Path) -> std::path::PathBuf {
    if config.paths.external_dir.is_absolute() {
        config.paths.external_dir.clone()
    } else {
        project_root.join(&config.paths.external_dir)
    }
}

/// Select the projects to process, preserving catalog order
fn select_projects<'a>(
    catalog: &'a [ProjectConfig],
    names: &[String],
) -> ExtsyncResult<Vec<&'a ProjectConfig>> {
    if names.is_empty() {
        return Ok(catalog.iter().collect());
    }

    for name in names {
        if !catalog.iter().any(|p| &p.name == name) {
            return Err(ExtsyncError::UnknownProject(name.clone()));
        }
    }

    Ok(catalog
        .iter()
        .filter(|p| names.contains(&p.name))
        .collect())
}
