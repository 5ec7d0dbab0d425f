//! End-to-end tests for the ticketapp CLI binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ticketapp() -> Command {
    Command::cargo_bin("ticketapp").expect("binary should build")
}

fn init_project(dir: &TempDir) {
    ticketapp()
        .args(["init", "--name", "Test Project"])
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn init_creates_project() {
    let dir = TempDir::new().unwrap();

    ticketapp()
        .args(["init", "--name", "Helpdesk", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Helpdesk"));

    assert!(dir.path().join(".ticketapp").is_dir());
    assert!(dir.path().join(".ticketapp/config.yaml").is_file());
}

#[test]
fn init_twice_fails_without_force() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    ticketapp()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));

    ticketapp()
        .args(["init", "--force"])
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn login_whoami_logout_flow() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    ticketapp()
        .args(["login", "abc", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"));

    ticketapp()
        .args(["whoami", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("abc"));

    ticketapp()
        .args(["logout", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success();

    ticketapp()
        .args(["whoami", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn whoami_json_output() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    ticketapp()
        .args(["login", "secret-token"])
        .current_dir(dir.path())
        .assert()
        .success();

    ticketapp()
        .args(["whoami", "--json"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"loggedIn\": true"))
        .stdout(predicate::str::contains("secret-token"));
}

#[test]
fn session_survives_between_invocations() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    ticketapp()
        .args(["login", "abc"])
        .current_dir(dir.path())
        .assert()
        .success();

    // Each invocation is a fresh process; only the persisted slot carries over
    ticketapp()
        .args(["whoami", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("abc"));
}

#[test]
fn logout_is_idempotent() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    ticketapp()
        .args(["logout", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Already logged out"));
}

#[test]
fn empty_token_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    ticketapp()
        .args(["login", "", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn commands_outside_project_fail_with_hint() {
    let dir = TempDir::new().unwrap();

    ticketapp()
        .args(["whoami", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("ticketapp init"));
}

#[test]
fn tickets_requires_login() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    ticketapp()
        .args(["tickets", "--no-color"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("log in"));
}

#[test]
fn project_flag_points_at_another_directory() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let elsewhere = TempDir::new().unwrap();

    ticketapp()
        .args(["--project", dir.path().to_str().unwrap(), "login", "abc"])
        .current_dir(elsewhere.path())
        .assert()
        .success();

    ticketapp()
        .args(["--project", dir.path().to_str().unwrap(), "whoami", "--no-color"])
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("abc"));
}
