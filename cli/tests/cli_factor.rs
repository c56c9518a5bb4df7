// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(words: &str) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words.txt"), words).unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        Fixture { dir }
    }

    fn with_config(self, config: &str) -> Fixture {
        fs::write(self.dir.path().join("config.toml"), config).unwrap();
        self
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("wordfactor").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.dir.path().join("config.toml"))
            .arg("--words")
            .arg(self.dir.path().join("words.txt"));
        cmd
    }
}

#[test]
fn worked_example() {
    Fixture::new("a\ndog\n")
        .cmd()
        .args(["-n", "638465543"])
        .assert()
        .success()
        .stdout(predicate::eq("p = a\nq = dog\n"));
}

#[test]
fn decrypts_ciphertext() {
    Fixture::new("a\ndog\n")
        .cmd()
        .args(["-n", "638465543", "-c", "214334221"])
        .assert()
        .success()
        .stdout(predicate::eq("p = a\nq = dog\nplaintext = ok\n"));
}

#[test]
fn multi_word_phrases() {
    let fixture = Fixture::new("the\nquick\nbrown\nfox\njumps\nover\nlazy\ndog\n");
    fixture
        .cmd()
        .args([
            "-n",
            "4179067517538450222193673749813473819752462094338739107",
            "-c",
            "1144706619465797999303136606599345866127739022735697271",
        ])
        .assert()
        .success()
        .stdout(predicate::eq(
            "p = quick dog\nq = brown over the\nplaintext = flag{phrase}\n",
        ));
}

#[test]
fn parallel_gives_same_answer() {
    Fixture::new("a\ndog\n")
        .cmd()
        .args(["-n", "638465543", "--jobs", "2"])
        .assert()
        .success()
        .stdout(predicate::eq("p = a\nq = dog\n"));
}

#[test]
fn parallel_from_config() {
    Fixture::new("a\ndog\n")
        .with_config("[search]\nparallel = true\nthreads = 2\n")
        .cmd()
        .args(["-n", "638465543"])
        .assert()
        .success()
        .stdout(predicate::eq("p = a\nq = dog\n"));
}

#[test]
fn not_found() {
    Fixture::new("cat\n")
        .cmd()
        .args(["-n", "638465543"])
        .assert()
        .code(1)
        .stdout(predicate::eq("no solution\n"));
}

#[test]
fn single_byte_modulus() {
    Fixture::new("a\n")
        .cmd()
        .args(["-n", "97"])
        .assert()
        .code(1)
        .stdout(predicate::eq("no solution\n"));
}

#[test]
fn missing_word_list() {
    let fixture = Fixture::new("a\ndog\n");
    fs::remove_file(fixture.dir.path().join("words.txt")).unwrap();
    fixture
        .cmd()
        .args(["-n", "638465543"])
        .assert()
        .code(1)
        .stdout(predicate::eq("no solution\n"))
        .stderr(predicate::str::contains("empty dictionary"));
}

#[test]
fn invalid_modulus() {
    Fixture::new("a\ndog\n")
        .cmd()
        .args(["-n", "six"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid modulus"));
}

#[test]
fn exponent_without_inverse() {
    Fixture::new("a\ndog\n")
        .with_config("[rsa]\nexponent = 3\n")
        .cmd()
        .args(["-n", "638465543", "-c", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to rebuild the private key"));
}

#[test]
fn exponent_flag_overrides_config() {
    Fixture::new("a\ndog\n")
        .with_config("[rsa]\nexponent = 3\n")
        .cmd()
        .args(["-n", "638465543", "-c", "214334221", "-e", "65537"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("plaintext = ok\n"));
}

#[test]
fn json_output() {
    let assert = Fixture::new("a\ndog\n")
        .cmd()
        .args(["-n", "638465543", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["status"].as_str(), Some("found"));
    assert_eq!(value["p"].as_str(), Some("a"));
    assert_eq!(value["q"].as_str(), Some("dog"));
    assert_eq!(value["candidates"].as_u64(), Some(9));
}
