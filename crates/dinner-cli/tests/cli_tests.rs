use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory used as XDG config home
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command isolated from the user's config
fn dinner_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dinner").expect("Failed to find dinner binary");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_format_single_date() {
    let temp_dir = create_cli_test_environment();

    dinner_cmd(&temp_dir)
        .args(["--time-zone", "UTC", "format", "2024-03-15T14:05:00"])
        .assert()
        .success()
        .stdout("Friday, March 15, 2024 at 02:05 PM\n");
}

#[test]
fn test_cli_format_multiple_dates_in_order() {
    let temp_dir = create_cli_test_environment();

    dinner_cmd(&temp_dir)
        .args([
            "--time-zone",
            "UTC",
            "--hour-cycle",
            "h23",
            "format",
            "2024-03-31 17:00",
            "2024-07-04 16:00",
            "2024-11-28 16:00",
        ])
        .assert()
        .success()
        .stdout(
            "Sunday, March 31, 2024 at 17:00\n\
             Thursday, July 4, 2024 at 16:00\n\
             Thursday, November 28, 2024 at 16:00\n",
        );
}

#[test]
fn test_cli_invalid_date_is_not_an_error() {
    let temp_dir = create_cli_test_environment();

    dinner_cmd(&temp_dir)
        .args(["--time-zone", "UTC", "format", "someday soon"])
        .assert()
        .success()
        .stdout("Invalid Date\n");
}

#[test]
fn test_cli_format_requires_a_date() {
    let temp_dir = create_cli_test_environment();

    dinner_cmd(&temp_dir).arg("format").assert().failure();
}

#[test]
fn test_cli_without_command_prints_current_time() {
    let temp_dir = create_cli_test_environment();

    dinner_cmd(&temp_dir)
        .args(["--time-zone", "UTC"])
        .assert()
        .success()
        .stdout(predicate::str::contains(", 20"))
        .stdout(predicate::str::contains(" at "));
}

#[test]
fn test_cli_reads_explicit_config_file() {
    let temp_dir = create_cli_test_environment();
    let config_path = temp_dir.path().join("custom.json");
    fs::write(&config_path, r#"{ "time_zone": "UTC", "hour_cycle": "h23" }"#).unwrap();

    dinner_cmd(&temp_dir)
        .args([
            "--config-file",
            config_path.to_str().unwrap(),
            "format",
            "2024-03-15T14:05:00Z",
        ])
        .assert()
        .success()
        .stdout("Friday, March 15, 2024 at 14:05\n");
}

#[test]
fn test_cli_reads_xdg_config_file() {
    let temp_dir = create_cli_test_environment();
    let app_dir = temp_dir.path().join("dinner-planner");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(
        app_dir.join("config.json"),
        r#"{ "time_zone": "UTC", "hour_cycle": "h23" }"#,
    )
    .unwrap();

    dinner_cmd(&temp_dir)
        .args(["format", "2024-03-15T14:05:00Z"])
        .assert()
        .success()
        .stdout("Friday, March 15, 2024 at 14:05\n");
}

#[test]
fn test_cli_flags_override_config_file() {
    let temp_dir = create_cli_test_environment();
    let config_path = temp_dir.path().join("custom.json");
    fs::write(&config_path, r#"{ "time_zone": "UTC", "hour_cycle": "h23" }"#).unwrap();

    dinner_cmd(&temp_dir)
        .args([
            "--config-file",
            config_path.to_str().unwrap(),
            "--hour-cycle",
            "h12",
            "format",
            "2024-03-15T14:05:00Z",
        ])
        .assert()
        .success()
        .stdout("Friday, March 15, 2024 at 02:05 PM\n");
}

#[test]
fn test_cli_missing_config_file_fails() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("missing.json");

    dinner_cmd(&temp_dir)
        .args(["--config-file", missing.to_str().unwrap(), "format", "2024-03-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_cli_unknown_time_zone_fails() {
    let temp_dir = create_cli_test_environment();

    dinner_cmd(&temp_dir)
        .args(["--time-zone", "Middle/Earth", "format", "2024-03-15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize Dinner Planner"));
}

#[test]
fn test_cli_logs_startup_message() {
    let temp_dir = create_cli_test_environment();

    dinner_cmd(&temp_dir)
        .env("RUST_LOG", "info")
        .args(["--time-zone", "UTC", "format", "2024-03-15"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Dinner Planner application initialized").count(1));
}
