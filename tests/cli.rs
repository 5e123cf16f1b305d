use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("cwi").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cwi"));
}

#[test]
fn get_requires_a_country() {
    let mut cmd = Command::cargo_bin("cwi").unwrap();
    cmd.arg("get");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--country"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn fetch_online_japan() {
    let mut cmd = Command::cargo_bin("cwi").unwrap();
    cmd.args(["get", "--country", "Japan", "--locale", "en"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Japan"));
}
