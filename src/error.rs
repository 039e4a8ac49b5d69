//! Error types for extsync
//!
//! All modules use `ExtsyncResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extsync operations
pub type ExtsyncResult<T> = Result<T, ExtsyncError>;

/// All errors that can occur in extsync
#[derive(Error, Debug)]
pub enum ExtsyncError {
    // Revision source errors
    #[error("Failed to read revision file for {name} at {path}: {source}")]
    RevisionFile {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Revision file for {name} is empty: {path}")]
    RevisionEmpty { name: String, path: PathBuf },

    // Synchronization errors
    #[error("Revision '{revision}' not found in {dir}: {stderr}")]
    RevisionNotFound {
        revision: String,
        dir: PathBuf,
        stderr: String,
    },

    #[error("Clone of {repository} into {dir} failed: {stderr}")]
    CloneFailed {
        repository: String,
        dir: PathBuf,
        stderr: String,
    },

    // Build errors
    #[error("Unsupported platform: {0}. extsync builds on Linux, Windows and macOS.")]
    UnsupportedPlatform(String),

    #[error("Configure step failed for {project}: {stderr}")]
    ConfigureFailed { project: String, stderr: String },

    #[error("Build step '{step}' failed for {project}: {stderr}")]
    BuildStepFailed {
        project: String,
        step: String,
        stderr: String,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Configuration file already exists: {0}")]
    ConfigExists(PathBuf),

    #[error("Unknown project: {0}")]
    UnknownProject(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command execution error: {command}, stderr: {stderr}")]
    CommandExecution { command: String, stderr: String },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ExtsyncError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandExecution {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Check if the error halts the whole run regardless of failure policy
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::BuildStepFailed { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::RevisionFile { .. } => {
                Some("Create a <name>_revision file under the external sources directory")
            }
            Self::RevisionNotFound { .. } => {
                Some("Check the pinned revision string against the remote repository")
            }
            Self::CommandFailed { .. } => Some("Ensure git and cmake are installed and on PATH"),
            Self::ConfigExists(_) => Some("Re-run with --force to overwrite"),
            _ => None,
        }
    }
}
