//! Command-line integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PROFILE: &str = r#"{
  "cash_buffer": 100,
  "income": [
    { "label": "Pay", "cadence_days": 14, "last_occurrence": "2025-03-02", "amount": 800 }
  ],
  "obligations": [
    { "label": "AMEX", "kind": "cc", "due_day": 16, "balance": 500 },
    { "label": "TD LOC", "kind": "loc", "due_day": 20, "balance": 1000,
      "annual_rate_percent": 9, "credit_limit": 3000 }
  ]
}"#;

fn cashflow(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cashflow").unwrap();
    cmd.env("CASHFLOW_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .args(["--today", "2025-03-10", "--horizon", "12"]);
    cmd
}

fn write_profile(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("household.json");
    std::fs::write(&path, PROFILE).unwrap();
    path
}

#[test]
fn decide_reports_unsafe_with_borrow_advice() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);

    cashflow(&dir)
        .arg("decide")
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("DECISION: UNSAFE"))
        .stdout(predicate::str::contains("Short by:      $400.00"))
        .stdout(predicate::str::contains("Borrow $400.00 from TD LOC"));
}

#[test]
fn income_first_flag_makes_it_safe() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);

    cashflow(&dir)
        .args(["--tie-break", "income_first", "decide"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("DECISION: SAFE"))
        .stdout(predicate::str::contains("Pay as usual."));
}

#[test]
fn decide_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);

    let output = cashflow(&dir)
        .args(["--json", "decide"])
        .arg(&profile)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["options"]["today"], "2025-03-10");
    assert_eq!(value["anchors"][0]["safe"], false);
    assert_eq!(value["anchors"][0]["advice"]["advice"], "borrow");
}

#[test]
fn decide_json_is_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);

    let run = || {
        cashflow(&dir)
            .args(["--json", "decide"])
            .arg(&profile)
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn huge_horizon_is_rejected() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);

    cashflow(&dir)
        .args(["--horizon", "4294967295", "decide"])
        .arg(&profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("horizon_days"));
}

#[test]
fn ledger_lists_rows() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);

    cashflow(&dir)
        .arg("ledger")
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-16"))
        .stdout(predicate::str::contains("Lowest balance:  -$400.00"));
}

#[test]
fn summary_shows_next_two_paydays() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);

    cashflow(&dir)
        .arg("summary")
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pay Cycle Summary"))
        .stdout(predicate::str::contains("2025-03-16"))
        .stdout(predicate::str::contains("2025-03-30"));
}

#[test]
fn init_then_decide_default_profile() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote sample profile (JSON)"));
    assert!(dir.path().join("profile.json").exists());
    assert!(dir.path().join("config.json").exists());

    cashflow(&dir)
        .arg("decide")
        .assert()
        .success()
        .stdout(predicate::str::contains("DECISION:"));

    cashflow(&dir).arg("init").assert().failure();
}

#[test]
fn missing_profile_fails() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["decide", "nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn bad_tie_break_is_rejected() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(&dir);

    cashflow(&dir)
        .args(["--tie-break", "sometimes", "decide"])
        .arg(&profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tie-break"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cashflow Configuration"))
        .stdout(predicate::str::contains("90 days"));
}
