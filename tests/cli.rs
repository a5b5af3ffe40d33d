use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_server_flags() {
    Command::cargo_bin("bookshelf")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--no-cors"));
}

#[test]
fn test_version() {
    Command::cargo_bin("bookshelf")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bookshelf "));
}

#[test]
fn test_invalid_port_is_rejected() {
    Command::cargo_bin("bookshelf")
        .unwrap()
        .args(["--port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_bind_failure_reports_top_level_error() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port().to_string();

    Command::cargo_bin("bookshelf")
        .unwrap()
        .args(["--host", "127.0.0.1", "--port", &port, "-q"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "Error: Failed to bind 127.0.0.1:{port}\n"
        )))
        .stderr(predicate::str::contains("in use").not());
}
