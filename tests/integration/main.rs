//! Integration tests for labelcache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

    /// Command isolated from the user's config and cache
    fn labelcache(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("labelcache");
        cmd.env_remove("LABELCACHE_ROOT")
            .env("LABELCACHE_NONINTERACTIVE", "1")
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .arg("--root")
            .arg(temp.path().join("cache"));
        cmd
    }

    fn write_png(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, PNG).unwrap();
        path
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        labelcache(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Rendered label image cache"));
    }

    #[test]
    fn list_missing_cache_is_empty() {
        let temp = TempDir::new().unwrap();
        labelcache(&temp)
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::diff("[]\n"));
    }

    #[test]
    fn store_then_list() {
        let temp = TempDir::new().unwrap();
        let input = write_png(temp.path(), "invoice.png");

        labelcache(&temp)
            .arg("store")
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::contains("invoice-1.png"));

        assert!(temp.path().join("cache").join("invoice-1.png").is_file());
        assert!(!temp.path().join("cache").join("invoice-1.json").exists());

        labelcache(&temp)
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("invoice-1.png"));
    }

    #[test]
    fn store_multi_page_with_warning_writes_sidecars() {
        let temp = TempDir::new().unwrap();
        let p1 = write_png(temp.path(), "p1.png");
        let p2 = write_png(temp.path(), "p2.png");

        labelcache(&temp)
            .args(["store", "--multi-page", "--name", "ship.png", "-w", "Field clipped"])
            .arg(&p1)
            .arg(&p2)
            .args(["--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ship-1-Page2.png"));

        let cache = temp.path().join("cache");
        for name in ["ship-1-Page1.png", "ship-1-Page2.png", "ship-1-Page1.json", "ship-1-Page2.json"] {
            assert!(cache.join(name).is_file(), "{} missing", name);
        }

        let sidecar = std::fs::read_to_string(cache.join("ship-1-Page2.json")).unwrap();
        assert!(sidecar.contains("Field clipped"));
    }

    #[test]
    fn delete_existing_and_missing() {
        let temp = TempDir::new().unwrap();
        let input = write_png(temp.path(), "label.png");
        labelcache(&temp).arg("store").arg(&input).assert().success();

        labelcache(&temp)
            .args(["delete", "label-1.png"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Deleted label-1.png"));
        assert!(!temp.path().join("cache").join("label-1.png").exists());

        labelcache(&temp)
            .args(["delete", "label-1.png"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No cached image named"));
    }

    #[test]
    fn clear_requires_confirmation() {
        let temp = TempDir::new().unwrap();
        let input = write_png(temp.path(), "label.png");
        labelcache(&temp).arg("store").arg(&input).assert().success();

        labelcache(&temp).arg("clear").assert().success();
        assert!(temp.path().join("cache").join("label-1.png").exists());

        labelcache(&temp)
            .args(["clear", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache cleared"));
        assert!(!temp.path().join("cache").join("label-1.png").exists());
        assert!(temp.path().join("cache").is_dir());
    }

    #[test]
    fn store_rejects_unparsable_cache_entry() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("cache")).unwrap();
        write_png(&temp.path().join("cache"), "holiday.png");
        let input = write_png(temp.path(), "label.png");

        labelcache(&temp)
            .arg("store")
            .arg(&input)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cannot determine image id"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        labelcache(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_set_then_show() {
        let temp = TempDir::new().unwrap();
        labelcache(&temp)
            .args(["config", "set", "general.log_format", "json"])
            .assert()
            .success();

        labelcache(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("log_format = \"json\""));
    }

    #[test]
    fn config_set_unknown_key_fails() {
        let temp = TempDir::new().unwrap();
        labelcache(&temp)
            .args(["config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }
}
