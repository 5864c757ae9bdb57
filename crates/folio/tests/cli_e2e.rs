#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn folio_cmd(data: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("folio"));
    cmd.env_remove("FOLIO_BACKEND")
        .env_remove("FOLIO_ENDPOINT")
        .env_remove("FOLIO_ENV_FILE")
        .env_remove("RUST_LOG")
        .env("FOLIO_DATA", data.as_os_str())
        .env("XDG_CONFIG_HOME", data.join("xdg").as_os_str());
    cmd
}

/// A data dir that starts empty instead of seeded.
fn empty_data_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("folio.toml"), "seed_samples = false\n").unwrap();
    temp
}

fn create_args(title: &str) -> Vec<String> {
    [
        "create",
        "--title",
        title,
        "--img-src",
        "img.png",
        "--description",
        "desc",
        "--href",
        "/link",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn test_first_list_shows_sample_projects() {
    let temp = TempDir::new().unwrap();

    folio_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Blackjack AI"));

    assert!(temp.path().join("projectsData.json").exists());
}

#[test]
fn test_empty_list_message() {
    let temp = empty_data_dir();
    folio_cmd(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_create_update_delete_workflow() {
    let temp = empty_data_dir();

    folio_cmd(temp.path())
        .args(create_args("First"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Item created successfully. Reload projects to view.",
        ));
    folio_cmd(temp.path())
        .args(create_args("Second"))
        .assert()
        .success();

    folio_cmd(temp.path())
        .args(["update", "0"])
        .args(&create_args("Renamed")[1..])
        .args(["--tags", "rust, cli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item at index 0 updated."));

    folio_cmd(temp.path())
        .args(["list", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Renamed\""))
        .stdout(predicate::str::contains("\"First\"").not());

    folio_cmd(temp.path())
        .args(["rm", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item at index 0 deleted."));

    folio_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Second"))
        .stdout(predicate::str::contains("Renamed").not());
}

#[test]
fn test_missing_fields_fail_without_writing() {
    let temp = empty_data_dir();

    folio_cmd(temp.path())
        .args(["create", "--title", "Only a title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Title, Image URL, Link URL, and Description are required.",
        ));

    assert!(!temp.path().join("projectsData.json").exists());
}

#[test]
fn test_index_errors() {
    let temp = empty_data_dir();

    folio_cmd(temp.path())
        .args(["delete", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Index out of range. Current length: 0.",
        ));

    folio_cmd(temp.path())
        .args(["delete", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Index must be a non-negative integer.",
        ));

    folio_cmd(temp.path())
        .args(["update", "abc"])
        .args(&create_args("X")[1..])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Index must be a non-negative integer.",
        ));
}

#[test]
fn test_render_emits_project_cards() {
    let temp = empty_data_dir();
    folio_cmd(temp.path())
        .args(create_args("Tom & Jerry"))
        .assert()
        .success();

    folio_cmd(temp.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("<project-card"))
        .stdout(predicate::str::contains("title=\"Tom &amp; Jerry\""))
        .stdout(predicate::str::contains("link-text=\"Learn more\""));
}

#[test]
fn test_secret_lifecycle_never_prints_key() {
    let temp = empty_data_dir();

    folio_cmd(temp.path())
        .args(["secret", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No master key configured"));

    folio_cmd(temp.path())
        .args(["secret", "set", "super-secret-key-1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Master key saved"))
        .stdout(predicate::str::contains("super-secret-key-1234").not());

    folio_cmd(temp.path())
        .args(["secret", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("local override"))
        .stdout(predicate::str::contains("super-secret-key-1234").not());

    folio_cmd(temp.path())
        .args(["secret", "clear"])
        .assert()
        .success();
    assert!(!temp.path().join("jsonbinMasterKey.json").exists());
}

#[test]
fn test_env_file_takes_precedence() {
    let temp = empty_data_dir();
    fs::write(
        temp.path().join("env.json"),
        r#"{"JSONBIN_MASTER_KEY":"from-env-file"}"#,
    )
    .unwrap();

    folio_cmd(temp.path())
        .args(["secret", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("env file"));
}

#[test]
fn test_remote_validation_happens_before_any_request() {
    let temp = empty_data_dir();

    // Nothing listens on the discard port; a request would fail with a transport error.
    folio_cmd(temp.path())
        .env("FOLIO_ENDPOINT", "http://127.0.0.1:9/b/test")
        .args(["-b", "remote", "create", "--title", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("are required."));
}

#[test]
fn test_remote_connection_failure_is_reported() {
    let temp = empty_data_dir();

    folio_cmd(temp.path())
        .env("FOLIO_ENDPOINT", "http://127.0.0.1:9/b/test")
        .args(["--backend", "remote", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_config_show_and_gen() {
    let temp = empty_data_dir();

    folio_cmd(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed_samples = false"))
        .stdout(predicate::str::contains("backend      = local"));

    folio_cmd(temp.path())
        .env("FOLIO_BACKEND", "remote")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("backend      = remote"));

    folio_cmd(temp.path())
        .args(["config", "gen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("endpoint"))
        .stdout(predicate::str::contains("seed_samples"));
}
