use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn homekeeper(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("homekeeper").unwrap();
    cmd.env("HOMEKEEPER_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .args(["--today", "2024-01-08"]);
    cmd
}

#[test]
fn budget_summary_shows_usage() {
    let dir = TempDir::new().unwrap();
    homekeeper(&dir)
        .args(["budget", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("66.5%"))
        .stdout(predicate::str::contains("예산 현황"));
}

#[test]
fn budget_json_export() {
    let dir = TempDir::new().unwrap();
    let output = homekeeper(&dir)
        .args(["--format", "json", "budget", "summary"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["page"], "budget");
    assert_eq!(value["as_of"], "2024-01-08");
    assert_eq!(value["data"]["total_spent"], 665_000);
}

#[test]
fn fridge_expiring_lists_milk() {
    let dir = TempDir::new().unwrap();
    homekeeper(&dir)
        .args(["fridge", "expiring", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("우유"));
}

#[test]
fn calendar_month_grid() {
    let dir = TempDir::new().unwrap();
    homekeeper(&dir)
        .args(["calendar", "month"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2024년 1월"));
}

#[test]
fn protected_route_redirects() {
    let dir = TempDir::new().unwrap();
    homekeeper(&dir)
        .args(["routes", "resolve", "/profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("redirect /login"));
}

#[test]
fn demo_login() {
    let dir = TempDir::new().unwrap();
    homekeeper(&dir)
        .args([
            "auth",
            "login",
            "demo@homekeeper.kr",
            "--password",
            "password123",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("김자취"));
}

#[test]
fn validation_message_reaches_stderr() {
    let dir = TempDir::new().unwrap();
    homekeeper(&dir)
        .args(["auth", "forgot", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("이메일을 입력해주세요."));
}

#[test]
fn config_init_creates_settings() {
    let dir = TempDir::new().unwrap();
    homekeeper(&dir)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("settings.json").exists());
}

#[test]
fn emergency_manual_guide() {
    let dir = TempDir::new().unwrap();
    homekeeper(&dir)
        .args(["emergency", "manual", "--guide", "fire"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 119에 즉시 신고"));
}

#[test]
fn oversized_expense_is_rejected() {
    let dir = TempDir::new().unwrap();
    homekeeper(&dir)
        .args(["budget", "add", "9223372036854775807", "food", "간식"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("금액은 0보다 큰 정수여야 합니다"));
}
