//! Subprocess execution for build steps
//!
//! Build invocations are plain data (`ProcessCall`) produced by the
//! strategies and executed by a `ProcessRunner`. The dispatcher's
//! configure-then-build policy can then be tested with a scripted runner
//! that never spawns anything.

use crate::error::{ExtsyncError, ExtsyncResult};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// One external tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCall {
    /// Program to run
    pub program: String,
    /// Arguments
    pub args: Vec<String>,
    /// Working directory for the invocation
    pub dir: PathBuf,
}

impl ProcessCall {
    /// Create a call from string-ish parts
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            dir: dir.into(),
        }
    }

    /// Shell-style rendering for logs and error messages
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Result of running one process to completion
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Whether the process exited zero
    pub success: bool,
    /// Captured stdout
    pub stdout: String,
    /// Captured stderr
    pub stderr: String,
}

/// Abstract synchronous-completion process runner
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run the call to completion, capturing output
    ///
    /// Blocks (cooperatively) until the subprocess exits; there is no
    /// timeout or cancellation.
    async fn run(&self, call: &ProcessCall) -> ExtsyncResult<RunOutput>;
}

/// Process runner backed by `tokio::process`
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, call: &ProcessCall) -> ExtsyncResult<RunOutput> {
        debug!("Executing in {}: {}", call.dir.display(), call.display());

        let output = Command::new(&call.program)
            .args(&call.args)
            .current_dir(&call.dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ExtsyncError::command_failed(call.display(), e))?;

        Ok(RunOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
