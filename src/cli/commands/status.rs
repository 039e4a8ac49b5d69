//! Status command - pinned vs checked-out state per dependency

use crate::cli::args::{OutputFormat, StatusArgs};
use crate::cli::commands::sync::resolve_external_dir;
use crate::config::Config;
use crate::dependency::Dependency;
use crate::error::ExtsyncResult;
use crate::revision;
use crate::ui::{self, UiContext};
use crate::vcs::{GitClient, VersionControlClient};
use console::style;
use serde::Serialize;
use std::path::Path;

/// Status of one dependency
#[derive(Debug, Serialize)]
struct ProjectStatus {
    name: String,
    pinned: Option<String>,
    present: bool,
    checked_out: Option<String>,
    /// Literal comparison of pinned vs checked-out; a pin by tag or
    /// branch name never matches the commit hash reported by HEAD
    in_sync: bool,
}

/// Execute the status command
pub async fn execute(args: StatusArgs, config: &Config, project_root: &Path) -> ExtsyncResult<()> {
    let external_dir = resolve_external_dir(config, project_root);
    let vcs = GitClient::new();

    let mut rows = Vec::new();
    for project in &config.projects {
        let dep = Dependency::resolve(project, &external_dir);
        let pinned = revision::read_pinned(&external_dir, &dep.name).await.ok();
        let present = vcs.has_metadata(&dep.local_path);
        let checked_out = if present {
            vcs.current_revision(&dep.local_path).await.ok()
        } else {
            None
        };
        let in_sync = present
            && pinned.is_some()
            && pinned == checked_out;

        rows.push(ProjectStatus {
            name: dep.name,
            pinned,
            present,
            checked_out,
            in_sync,
        });
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Plain => {
            for row in &rows {
                println!(
                    "{} {} {}",
                    row.name,
                    row.pinned.as_deref().unwrap_or("-"),
                    row.checked_out.as_deref().unwrap_or("-")
                );
            }
        }
        OutputFormat::Table => print_table(&rows),
    }

    Ok(())
}

fn print_table(rows: &[ProjectStatus]) {
    let ctx = UiContext::detect();
    ui::section(&ctx, "External dependencies");
    println!(
        "  {:<14} {:<22} {:<14} {}",
        style("NAME").bold(),
        style("PINNED").bold(),
        style("WORKING COPY").bold(),
        style("CHECKED OUT").bold()
    );

    for row in rows {
        let copy = if row.present { "present" } else { "absent" };
        println!(
            "  {:<14} {:<22} {:<14} {}",
            row.name,
            row.pinned.as_deref().unwrap_or("(no revision file)"),
            copy,
            row.checked_out.as_deref().unwrap_or("-")
        );
    }
}
