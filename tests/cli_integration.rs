//! Integration tests for the helpdesk command line

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config directory and log settings
fn helpdesk(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("helpdesk").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_technician_board_counts() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .arg("technician")
        .assert()
        .success()
        .stdout(predicate::str::contains("Technician Dashboard - John Smith"))
        .stdout(predicate::str::contains(
            "Open: 1   In Progress: 1   Resolved: 2",
        ));
}

#[test]
fn test_start_work_moves_ticket_to_in_progress() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .args(["technician", "--set-status", "TK-001", "in-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket TK-001 marked as in-progress"))
        .stdout(predicate::str::contains(
            "Open: 0   In Progress: 2   Resolved: 2",
        ));
}

#[test]
fn test_unknown_ticket_fails() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .args(["technician", "--set-status", "TK-099", "resolved"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TK-099"));
}

#[test]
fn test_backward_transition_fails() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .args(["technician", "--set-status", "TK-003", "open"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot move from resolved to open"));
}

#[test]
fn test_technician_search_json() {
    let home = TempDir::new().unwrap();

    let output = helpdesk(&home)
        .args(["--json", "technician", "--search", "printer"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["search"], "printer");
    assert_eq!(value["board"]["open"].as_array().unwrap().len(), 0);
    assert_eq!(value["board"]["resolved"][0]["id"], "TK-003");
    assert_eq!(value["stats"]["total"], 1);
}

#[test]
fn test_technician_export_writes_matching_tickets() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("board.csv");

    helpdesk(&home)
        .args(["technician", "--set-status", "TK-001", "in-progress", "--search", "computer", "--export"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 tickets to"));

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("id,title,priority,status"));
    assert!(lines[1].starts_with("TK-001,Computer won't start,high,in-progress,onsite"));
}

#[test]
fn test_enduser_missing_description_is_rejected() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .args(["enduser", "--title", "Laptop screen flickering"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please fill in all required fields: description",
        ));
}

#[test]
fn test_enduser_submits_ticket() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .args([
            "enduser",
            "--title",
            "Laptop screen flickering",
            "--description",
            "screen flickers",
            "--priority",
            "high",
            "--location",
            "remote",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Your ticket TK-008 has been submitted successfully",
        ))
        .stdout(predicate::str::contains(
            "Total: 4   Open: 2   In Progress: 1   Resolved: 1",
        ));
}

#[test]
fn test_enduser_dashboard_cards() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .arg("enduser")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total: 3   Open: 1   In Progress: 1   Resolved: 1",
        ));
}

#[test]
fn test_enduser_rejects_unknown_priority() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .args(["enduser", "-t", "VPN", "-d", "drops", "--priority", "critical"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid priority"));
}

#[test]
fn test_admin_dashboard() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .arg("admin")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Tickets: 156"))
        .stdout(predicate::str::contains("Active Technicians: 3"))
        .stdout(predicate::str::contains("Lisa Chen"));
}

#[test]
fn test_admin_export_writes_csv() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("tickets.csv");

    helpdesk(&home)
        .args(["admin", "--export", "tickets", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket data exported"));

    let csv = std::fs::read_to_string(&path).unwrap();
    assert!(csv.starts_with("day,open,resolved"));
    assert_eq!(csv.lines().count(), 8);
}

#[test]
fn test_admin_analytics_export_message() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .args(["admin", "--export", "analytics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Performance data exported"));
}

#[test]
fn test_admin_unknown_technician() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .args(["admin", "--technician", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Technician not found: Nobody"));
}

#[test]
fn test_watch_with_silent_feed() {
    let home = TempDir::new().unwrap();

    let output = helpdesk(&home)
        .args([
            "--json",
            "watch",
            "--ticks",
            "2",
            "--interval-ms",
            "5",
            "--probability",
            "0",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["received"].as_array().unwrap().len(), 0);
    assert_eq!(value["notifications"], 2);
}

#[test]
fn test_environment_overrides_config() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .env("HELPDESK_DESK__TECHNICIAN", "Lisa Chen")
        .arg("technician")
        .assert()
        .success()
        .stdout(predicate::str::contains("Technician Dashboard - Lisa Chen"));
}

#[test]
fn test_invalid_config_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("helpdesk.yaml");
    std::fs::write(&path, "notifications:\n  probability: 2.5\n").unwrap();

    helpdesk(&home)
        .arg("--config")
        .arg(&path)
        .arg("technician")
        .assert()
        .failure()
        .stderr(predicate::str::contains("probability"));
}

#[test]
fn test_watch_rejects_unschedulable_run() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .args([
            "watch",
            "--ticks",
            "4294967295",
            "--interval-ms",
            "18446744073709551615",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too long to schedule"));
}

#[test]
fn test_config_shows_effective_settings() {
    let home = TempDir::new().unwrap();

    helpdesk(&home)
        .env("HELPDESK_NOTIFICATIONS__INTERVAL_MS", "250")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("technician: John Smith"))
        .stdout(predicate::str::contains("interval_ms: 250"));
}

#[test]
fn test_config_json() {
    let home = TempDir::new().unwrap();

    let output = helpdesk(&home).args(["--json", "config"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["desk"]["end_user"], "End User");
    assert_eq!(value["notifications"]["initial_count"], 2);
}
