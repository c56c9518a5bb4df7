// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("wordfactor").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--modulus"));
}

#[test]
fn test_modulus_required() {
    let mut cmd = Command::cargo_bin("wordfactor").unwrap();
    cmd.assert().failure();
}

#[test]
fn test_invalid() {
    let mut cmd = Command::cargo_bin("wordfactor").unwrap();
    cmd.arg("--asdf").assert().failure();
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("wordfactor").unwrap();
    let output = format!("wordfactor {}\n", env!("CARGO_PKG_VERSION"));
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::eq(output));

    let mut cmd = Command::cargo_bin("wordfactor").unwrap();
    let output = format!("wordfactor {}\n", env!("CARGO_PKG_VERSION"));
    cmd.arg("-V")
        .assert()
        .success()
        .stdout(predicate::eq(output));
}

#[test]
fn test_config_path() {
    let mut cmd = Command::cargo_bin("wordfactor").unwrap();
    cmd.arg("--config-path")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("/config.toml\n"));
}

#[test]
fn test_bad_jobs() {
    let mut cmd = Command::cargo_bin("wordfactor").unwrap();
    cmd.args(["-n", "638465543", "--jobs", "many"])
        .assert()
        .failure();
}
