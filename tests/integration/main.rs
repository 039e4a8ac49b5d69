//! Integration tests for extsync

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn extsync() -> Command {
        cargo_bin_cmd!("extsync")
    }

    #[test]
    fn help_displays() {
        extsync()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("pinned external source"));
    }

    #[test]
    fn version_displays() {
        extsync()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("extsync"));
    }

    #[test]
    fn unknown_option_rejected() {
        extsync()
            .args(["sync", "--bogus"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unexpected argument"));
    }

    #[test]
    fn config_show_defaults() {
        let tmp = TempDir::new().unwrap();
        extsync()
            .current_dir(tmp.path())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("glslang"))
            .stdout(predicate::str::contains("[paths]"));
    }

    #[test]
    fn config_path_runs() {
        let tmp = TempDir::new().unwrap();
        extsync()
            .current_dir(tmp.path())
            .args(["config", "path"])
            .assert()
            .success();
    }

    #[test]
    fn init_writes_local_config() {
        let tmp = TempDir::new().unwrap();
        extsync()
            .current_dir(tmp.path())
            .arg("init")
            .assert()
            .success();

        let written = std::fs::read_to_string(tmp.path().join("extsync.toml")).unwrap();
        assert!(written.contains("googletest"));
    }

    #[test]
    fn init_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("extsync.toml"), "# existing").unwrap();

        extsync()
            .current_dir(tmp.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));

        extsync()
            .current_dir(tmp.path())
            .args(["init", "--force"])
            .assert()
            .success();
    }

    #[test]
    fn sync_unknown_project_fails() {
        let tmp = TempDir::new().unwrap();
        extsync()
            .current_dir(tmp.path())
            .args(["sync", "vulkan-headers"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown project"));
    }

    #[test]
    fn sync_missing_revision_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        extsync()
            .current_dir(tmp.path())
            .arg("sync")
            .assert()
            .failure()
            .stderr(predicate::str::contains("revision file for glslang"));
    }

    #[test]
    fn status_reports_absent_working_copies() {
        let tmp = TempDir::new().unwrap();
        extsync()
            .current_dir(tmp.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("glslang"))
            .stdout(predicate::str::contains("absent"));
    }

    #[test]
    fn status_json_format() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("External")).unwrap();
        std::fs::write(
            tmp.path().join("External").join("glslang_revision"),
            "abcdef1\n",
        )
        .unwrap();

        extsync()
            .current_dir(tmp.path())
            .args(["status", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"pinned\": \"abcdef1\""))
            .stdout(predicate::str::contains("\"in_sync\": false"));
    }
}
