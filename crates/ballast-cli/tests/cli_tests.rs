//! End-to-end tests for the ballast binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VALID_PORTFOLIO: &str = r#"{
  "assets": [
    {"name": "US Equities", "target_allocation": 0.6, "current_balance": 4000.0},
    {"name": "Bonds", "target_allocation": 0.4, "current_balance": 1000.0}
  ]
}"#;

fn write_portfolio(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("portfolio.json");
    fs::write(&path, contents).unwrap();
    path
}

fn ballast() -> Command {
    Command::cargo_bin("ballast").unwrap()
}

// =============================================================================
// HAPPY PATHS
// =============================================================================

#[test]
fn test_table_report() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(&dir, VALID_PORTFOLIO);

    ballast()
        .args(["--contribution", "500", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio Rebalance Report"))
        .stdout(predicate::str::contains("$5,000.00"))
        .stdout(predicate::str::contains("US Equities"))
        .stdout(predicate::str::contains("$500.00"))
        .stdout(predicate::str::contains("Rebalancing complete."));
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(&dir, VALID_PORTFOLIO);

    let output = ballast()
        .args(["--contribution", "500", "--format", "json", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["current_value"], 5000.0);
    assert_eq!(report["contribution"], 500.0);
    assert_eq!(report["new_total_value"], 5500.0);
    assert_eq!(report["allocations"]["Bonds"], 500.0);
    assert_eq!(report["allocations"]["US Equities"], 0.0);
}

#[test]
fn test_csv_report() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(&dir, VALID_PORTFOLIO);

    ballast()
        .args(["--contribution", "500", "--format", "csv", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("asset,allocation"))
        .stdout(predicate::str::contains("US Equities,0.0"))
        .stdout(predicate::str::contains("Bonds,500.0"));
}

#[test]
fn test_zero_contribution_reports_all_zeros() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(&dir, VALID_PORTFOLIO);

    let output = ballast()
        .args(["--contribution", "0", "--format", "json", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["allocations"]["Bonds"], 0.0);
    assert_eq!(report["allocations"]["US Equities"], 0.0);
}

#[test]
fn test_default_file_is_portfolio_json() {
    let dir = TempDir::new().unwrap();
    write_portfolio(&dir, VALID_PORTFOLIO);

    ballast()
        .current_dir(dir.path())
        .args(["--contribution", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rebalancing complete."));
}

// =============================================================================
// FAILURE PATHS
// =============================================================================

#[test]
fn test_missing_file_prints_hint() {
    let dir = TempDir::new().unwrap();

    ballast()
        .current_dir(dir.path())
        .args(["--contribution", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("To get started"));
}

#[test]
fn test_malformed_json_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(&dir, "{not json");

    ballast()
        .args(["--contribution", "500", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid JSON"));
}

#[test]
fn test_missing_field_names_the_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(
        &dir,
        r#"{"assets": [{"name": "Stocks", "current_balance": 100.0}]}"#,
    );

    ballast()
        .args(["--contribution", "500", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("target_allocation"))
        .stderr(predicate::str::contains("entry 0"));
}

#[test]
fn test_invalid_targets_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(
        &dir,
        r#"{"assets": [
            {"name": "A", "target_allocation": 0.5, "current_balance": 100.0},
            {"name": "B", "target_allocation": 0.4, "current_balance": 100.0}
        ]}"#,
    );

    ballast()
        .args(["--contribution", "500", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must sum to 1.0"));
}

#[test]
fn test_negative_contribution_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(&dir, VALID_PORTFOLIO);

    ballast()
        .args(["--contribution", "-100", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contribution must be non-negative"));
}

#[test]
fn test_portfolio_error_wins_over_contribution_error() {
    let dir = TempDir::new().unwrap();
    let path = write_portfolio(
        &dir,
        r#"{"assets": [{"name": "A", "target_allocation": 0.9, "current_balance": 100.0}]}"#,
    );

    ballast()
        .args(["--contribution", "-100", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must sum to 1.0"));
}

#[test]
fn test_non_numeric_contribution_fails_at_parse() {
    ballast()
        .args(["--contribution", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
