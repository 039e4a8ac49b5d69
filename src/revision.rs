//! Revision source
//!
//! Each dependency pins its revision in a plain-text file named
//! `<name>_revision` under the external sources directory. Only the first
//! line counts; it is an opaque git reference (commit hash, tag, or
//! branch).

use crate::error::{ExtsyncError, ExtsyncResult};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Read the pinned revision for a dependency
///
/// A missing or empty revision file is fatal; there is no sensible
/// default revision to fall back to.
pub async fn read_pinned(external_dir: &Path, name: &str) -> ExtsyncResult<String> {
    let path = external_dir.join(format!("{name}_revision"));

    let content = fs::read_to_string(&path)
        .await
        .map_err(|source| ExtsyncError::RevisionFile {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;

    let revision = content.lines().next().unwrap_or("").trim_end();
    if revision.is_empty() {
        return Err(ExtsyncError::RevisionEmpty {
            name: name.to_string(),
            path,
        });
    }

    debug!("{} pinned at {}", name, revision);
    Ok(revision.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn reads_first_line_trimmed() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("glslang_revision"), "abcdef1\n").unwrap();

        let rev = read_pinned(tmp.path(), "glslang").await.unwrap();
        assert_eq!(rev, "abcdef1");
    }

    #[tokio::test]
    async fn ignores_lines_after_the_first() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("googletest_revision"),
            "release-1.8.1\r\n# trailing comment\n",
        )
        .unwrap();

        let rev = read_pinned(tmp.path(), "googletest").await.unwrap();
        assert_eq!(rev, "release-1.8.1");
    }

    #[tokio::test]
    async fn missing_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = read_pinned(tmp.path(), "glslang").await.unwrap_err();
        assert!(matches!(err, ExtsyncError::RevisionFile { .. }));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn empty_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("glslang_revision"), "\n").unwrap();

        let err = read_pinned(tmp.path(), "glslang").await.unwrap_err();
        assert!(matches!(err, ExtsyncError::RevisionEmpty { .. }));
    }
}
