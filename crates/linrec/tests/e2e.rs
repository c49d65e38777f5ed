//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn linrec() -> Command {
    let mut cmd = Command::cargo_bin("linrec").expect("binary not found");
    cmd.env_remove("LINREC_INDEX").env_remove("LINREC_MODULUS");
    cmd
}

#[test]
fn help_flag() {
    linrec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("linear recurrence"));
}

#[test]
fn version_flag() {
    linrec()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("linrec"));
}

#[test]
fn default_is_fibonacci_300() {
    linrec()
        .args(["-q", "-v"])
        .assert()
        .success()
        .stdout("222232244629420445529739893461909967206666939096499764990979600\n");
}

#[test]
fn fibonacci_10_quiet() {
    linrec()
        .args(["-n", "10", "-q"])
        .assert()
        .success()
        .stdout("55\n");
}

#[test]
fn tribonacci_preset() {
    linrec()
        .args(["--preset", "tribonacci", "-n", "6", "-q"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn custom_geometric() {
    linrec()
        .args(["--coefficients", "3", "--seeds", "2", "-n", "5", "-q"])
        .assert()
        .success()
        .stdout("162\n");
}

#[test]
fn modulus_from_env() {
    linrec()
        .env("LINREC_MODULUS", "1000000007")
        .args(["-n", "300", "-q"])
        .assert()
        .success()
        .stdout("644264086\n");
}

#[test]
fn normal_output_mentions_term() {
    linrec()
        .args(["-n", "20", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a(20) = 6765"))
        .stdout(predicate::str::contains("Result digits: 4"));
}

#[test]
fn sequence_listing() {
    linrec()
        .args(["--preset", "lucas", "-n", "5", "--sequence", "-q"])
        .assert()
        .success()
        .stdout("1\n3\n4\n7\n11\n");
}

#[test]
fn sequence_limit() {
    linrec()
        .args(["-n", "1000000", "--sequence"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn json_output() {
    let output = linrec()
        .args(["-n", "10", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["value"], "55");
    assert_eq!(json["recurrence"], "fibonacci");
    assert_eq!(json["order"], 2);
}

#[test]
fn zero_index_fails() {
    linrec()
        .args(["-n", "0"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("invalid index"));
}

#[test]
fn mismatched_seeds_fail() {
    linrec()
        .args(["--coefficients", "1,1,1", "--seeds", "0,1", "-n", "6"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid specification"));
}

#[test]
fn modulus_one_fails() {
    linrec()
        .args(["-n", "10", "-m", "1"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn unknown_preset_fails() {
    linrec()
        .args(["--preset", "perrin"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a30.txt");
    linrec()
        .args(["-n", "30", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "832040\n");
}

#[test]
fn bash_completion() {
    linrec()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--coefficients"));
}
