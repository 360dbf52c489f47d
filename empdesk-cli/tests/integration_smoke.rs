//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

// === Help Tests ===

#[test]
fn test_top_level_help_lists_commands() {
    let mut cmd = Command::cargo_bin("empdesk").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("empdesk").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--in-memory"))
        .stdout(predicate::str::contains("--database-url"));
}

// === init-db Tests ===

#[test]
fn test_init_db_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("employees.db");
    let url = format!("sqlite://{}", db.display());

    let mut cmd = Command::cargo_bin("empdesk").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("EMPDESK_BIND")
        .current_dir(dir.path())
        .arg("init-db")
        .arg("--database-url")
        .arg(&url);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0 employee record(s)"));

    assert!(db.exists());
}

#[test]
fn test_init_db_rejects_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("empdesk").unwrap();
    cmd.current_dir(dir.path())
        .arg("init-db")
        .arg("--config")
        .arg(dir.path().join("missing.toml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// === Completions Tests ===

#[test]
fn test_bash_completions() {
    let mut cmd = Command::cargo_bin("empdesk").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("empdesk"));
}
