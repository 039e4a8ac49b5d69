//! extsync - Pinned external source dependency sync
//!
//! Keeps local working copies of external source dependencies checked out
//! at pinned revisions and drives their native cmake build/install.

pub mod build;
pub mod cli;
pub mod config;
pub mod dependency;
pub mod error;
pub mod revision;
pub mod sync;
pub mod ui;
pub mod vcs;

pub use error::{ExtsyncError, ExtsyncResult};
