//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `numutil` binary to verify that
//! argument parsing, output formatting and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("numutil").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vectors"))
        .stdout(predicate::str::contains("matrices"))
        .stdout(predicate::str::contains("dice"))
        .stdout(predicate::str::contains("bayes"))
        .stdout(predicate::str::contains("conditional"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("numutil"));
}

// ---------------------------------------------------------------------------
// Linear algebra
// ---------------------------------------------------------------------------

#[test]
fn vectors_defaults() {
    cmd()
        .arg("vectors")
        .assert()
        .success()
        .stdout("Sum: [5, 7, 9]\nDot Product: 32\nOrthogonal: false\n");
}

#[test]
fn vectors_orthogonal_with_negatives() {
    cmd()
        .args(["vectors", "--a", "-1,1", "--b", "1,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Orthogonal: true"));
}

#[test]
fn vectors_length_mismatch_fails() {
    cmd()
        .args(["vectors", "--a", "1,2", "--b", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("equal length"));
}

#[test]
fn vectors_integer_overflow_fails_cleanly() {
    cmd()
        .args(["vectors", "--a", "9223372036854775807,1", "--b", "1,1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("integer overflow"));
}

#[test]
fn matrices_integer_overflow_fails_cleanly() {
    cmd()
        .args([
            "matrices",
            "--a",
            "4611686018427387904,4611686018427387904",
            "--b",
            "1;1",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("integer overflow"));
}

#[test]
fn matrices_defaults() {
    cmd()
        .arg("matrices")
        .assert()
        .success()
        .stdout("Multiplication result: [[19, 22], [43, 50]]\n");
}

#[test]
fn matrices_dimension_mismatch_fails() {
    cmd()
        .args(["matrices", "--a", "1,2,3", "--b", "1,2;3,4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

// ---------------------------------------------------------------------------
// Probability
// ---------------------------------------------------------------------------

#[test]
fn dice_prints_three_events() {
    cmd()
        .args(["dice", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P(Sum = 7): 0.1"))
        .stdout(predicate::str::contains("P(Sum = 2): 0.0"))
        .stdout(predicate::str::contains("P(Sum > 10): 0.0"));
}

#[test]
fn dice_seeded_runs_match() {
    let first = cmd().args(["dice", "--seed", "7", "-n", "500"]).output().unwrap();
    let second = cmd().args(["dice", "--seed", "7", "-n", "500"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn dice_zero_trials_fails() {
    cmd()
        .args(["dice", "--trials", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dice simulation failed"));
}

#[test]
fn dice_huge_decimals_fails_cleanly() {
    cmd()
        .args(["dice", "--seed", "1", "-n", "10", "--decimals", "70000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("decimals must be at most"));
}

#[test]
fn dice_missing_config_fails() {
    cmd()
        .args(["dice", "--config", "/nonexistent/dice.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn bayes_reads_prompts_from_stdin() {
    cmd()
        .arg("bayes")
        .write_stdin("100\n20\n10\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter total number of emails: "))
        .stdout(predicate::str::contains("P(Spam | Free): 0.2500"));
}

#[test]
fn bayes_flags_skip_prompts() {
    cmd()
        .args([
            "bayes",
            "--total",
            "100",
            "--with-keyword",
            "20",
            "--spam",
            "10",
            "--spam-and-keyword",
            "5",
        ])
        .assert()
        .success()
        .stdout("P(Spam | Free): 0.2500\n");
}

#[test]
fn bayes_zero_total_fails() {
    cmd()
        .arg("bayes")
        .write_stdin("0\n0\n0\n0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn bayes_malformed_input_fails() {
    cmd()
        .arg("bayes")
        .write_stdin("one hundred\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse"));
}

#[test]
fn conditional_defaults() {
    cmd()
        .arg("conditional")
        .assert()
        .success()
        .stdout(predicate::str::contains("is 0.3000"));
}

#[test]
fn conditional_events_json() {
    cmd()
        .args(["conditional", "--events", r#"{"A_and_B": 0.2, "B": 0.8}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("is 0.2500"));
}

#[test]
fn conditional_zero_b_fails() {
    cmd()
        .args(["conditional", "--b", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be zero"));
}
