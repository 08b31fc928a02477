//! End-to-end tests of the `skyclerk` binary

mod common;

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use common::{MockServer, LEDGERS_JSON};
use predicates::prelude::*;
use tempfile::TempDir;

fn write_config(dir: &Path, api_url: &str, account_id: u64) {
    let config = serde_json::json!({
        "access_token": "abcdefghijklmnopqrstuvwxyz",
        "user_id": 42,
        "default_account_id": account_id,
        "api_url": api_url,
        "client_id": "cli-client",
    });
    fs::write(dir.join("config.json"), config.to_string()).unwrap();
}

fn skyclerk(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("skyclerk").unwrap();
    cmd.env("SKYCLERK_CONFIG_DIR", config_dir)
        .env_remove("SKYCLERK_LOG");
    cmd
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    skyclerk(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(format!("skyclerk version {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_requires_login() {
    let dir = TempDir::new().unwrap();
    skyclerk(dir.path())
        .args(["ledger", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"));
}

#[test]
fn test_requires_account() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "http://127.0.0.1:1", 0);

    skyclerk(dir.path())
        .args(["contacts", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no account selected"));
}

#[test]
fn test_config_show_masks_token() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "https://app.skyclerk.com", 7);

    skyclerk(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abcd****wxyz"))
        .stdout(predicate::str::contains("Default Account ID: 7"))
        .stdout(predicate::str::contains("abcdefghijklmnopqrstuvwxyz").not());
}

#[test]
fn test_accounts_use_updates_config() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "https://app.skyclerk.com", 1);

    skyclerk(dir.path())
        .args(["accounts", "use", "5"])
        .assert()
        .success()
        .stdout("Default account set to 5\n");

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("config.json")).unwrap())
            .unwrap();
    assert_eq!(saved["default_account_id"], 5);
    assert_eq!(saved["access_token"], "abcdefghijklmnopqrstuvwxyz");
}

#[test]
fn test_ledger_list_table() {
    let server = MockServer::start(200, LEDGERS_JSON);
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), &server.url(), 1);

    skyclerk(dir.path())
        .args(["ledger", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AMOUNT"))
        .stdout(predicate::str::contains("-45.50"))
        .stdout(predicate::str::contains("Office Depot"));

    let req = server.last_request();
    assert_eq!(req.path, "/api/v3/1/ledger");
    assert_eq!(req.query.as_deref(), Some("limit=25&page=1&sort=DESC"));
    assert_eq!(
        req.header("authorization"),
        Some("Bearer abcdefghijklmnopqrstuvwxyz")
    );
}

#[test]
fn test_ledger_list_json_with_account_override() {
    let server = MockServer::start(200, LEDGERS_JSON);
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), &server.url(), 1);

    let output = skyclerk(dir.path())
        .args(["--output", "json", "--account", "9", "ledger", "list", "--limit", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 2);
    assert_eq!(entries[0]["id"], 101);

    let req = server.last_request();
    assert_eq!(req.path, "/api/v3/9/ledger");
    assert_eq!(req.query.as_deref(), Some("limit=2&page=1&sort=DESC"));
}

#[test]
fn test_api_error_exits_nonzero() {
    let server = MockServer::start(500, "internal error");
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), &server.url(), 1);

    skyclerk(dir.path())
        .args(["categories", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to get categories"))
        .stderr(predicate::str::contains("500"));
}

#[test]
fn test_logout_removes_config_even_if_revoke_fails() {
    let server = MockServer::start(500, "nope");
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), &server.url(), 1);

    skyclerk(dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out successfully."))
        .stderr(predicate::str::contains("Warning: could not revoke token"));

    assert!(!dir.path().join("config.json").exists());
    assert_eq!(server.last_request().path, "/oauth/logout");
}

#[test]
fn test_upload_checks_file_exists() {
    let server = MockServer::start(200, "{}");
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), &server.url(), 1);

    skyclerk(dir.path())
        .args(["files", "upload", "/nonexistent/receipt.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));

    assert!(server.requests().is_empty());
}

#[test]
fn test_reports_pnl() {
    let server = MockServer::start(
        200,
        r#"{"income":1000,"expense":250,"profit":750,"breakdown":[]}"#,
    );
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), &server.url(), 3);

    skyclerk(dir.path())
        .args(["reports", "pnl", "--start", "2026-01-01", "--end", "2026-03-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:  1000.00"))
        .stdout(predicate::str::contains("Profit:  750.00"));

    let req = server.last_request();
    assert_eq!(req.path, "/api/v3/3/reports/pnl");
    assert_eq!(req.query.as_deref(), Some("start=2026-01-01&end=2026-03-31"));
}
