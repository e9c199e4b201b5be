//! Integration tests for the StackScript CLI.
//!
//! These tests invoke the `stackscript` binary as a subprocess and check
//! exit codes, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn stackscript() -> Command {
    Command::cargo_bin("stackscript").unwrap()
}

/// Return the absolute path to a test script file.
fn test_script(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/scripts")
        .join(name)
}

/// Write `source` into a fresh temp dir and return its path.
fn temp_script(dir: &TempDir, source: &str) -> PathBuf {
    let path = dir.path().join("test.script");
    fs::write(&path, source).unwrap();
    path
}

// ---- No-args / help ----

#[test]
fn no_args_prints_usage_and_exits_1() {
    stackscript()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: stackscript"));
}

#[test]
fn help_flag_exits_0() {
    stackscript()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Commands:"));
}

#[test]
fn unknown_command_exits_1() {
    stackscript()
        .arg("transmogrify")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown command"));
}

// ---- Run ----

#[test]
fn run_mov_script() {
    stackscript()
        .args(["run", test_script("mov.script").to_str().unwrap()])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn run_sub_script() {
    stackscript()
        .args(["run", test_script("sub.script").to_str().unwrap()])
        .assert()
        .success()
        .stdout("a = 6\n");
}

#[test]
fn run_sum_script() {
    stackscript()
        .args(["run", test_script("sum.script").to_str().unwrap()])
        .assert()
        .success()
        .stdout("s = 5\n");
}

#[test]
fn run_full_opcode_walkthrough() {
    stackscript()
        .args(["run", test_script("script_test.script").to_str().unwrap()])
        .assert()
        .success()
        .stdout("total: 25\n1\n");
}

#[test]
fn run_several_scripts_in_order() {
    stackscript()
        .args([
            "run",
            test_script("mov.script").to_str().unwrap(),
            test_script("sub.script").to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("5\na = 6\n");
}

#[test]
fn run_without_file_exits_1() {
    stackscript()
        .arg("run")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("requires at least one input file"));
}

#[test]
fn run_missing_file_exits_1() {
    stackscript()
        .args(["run", "no/such/file.script"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn run_unknown_mnemonic_exits_2() {
    let dir = TempDir::new().unwrap();
    let path = temp_script(&dir, "INT x\nJUMP away\n");
    stackscript()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown mnemonic 'JUMP'"));
}

#[test]
fn run_undeclared_variable_exits_3() {
    let dir = TempDir::new().unwrap();
    let path = temp_script(&dir, "INT x\nPRINT ghost\n");
    stackscript()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("undeclared variable 'ghost'"));
}

#[test]
fn run_stops_at_first_failing_script() {
    let dir = TempDir::new().unwrap();
    let bad = temp_script(&dir, "POP\n");
    stackscript()
        .args([
            "run",
            bad.to_str().unwrap(),
            test_script("mov.script").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(3)
        .stdout("");
}

#[test]
fn run_unterminated_string_literal_exits_3() {
    let dir = TempDir::new().unwrap();
    let path = temp_script(&dir, "PRINT `oops\n");
    stackscript()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("closing backtick"));
}

// ---- Check ----

#[test]
fn check_reports_table_sizes() {
    stackscript()
        .args(["check", test_script("script_test.script").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 variables, 12 instructions"));
}

#[test]
fn check_does_not_execute() {
    // A script that would fail at runtime still checks clean.
    let dir = TempDir::new().unwrap();
    let path = temp_script(&dir, "INT x\nPRINT ghost\n");
    stackscript()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn check_duplicate_variable_exits_2() {
    let dir = TempDir::new().unwrap();
    let path = temp_script(&dir, "INT x\nINT x\n");
    stackscript()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already declared"));
}

// ---- Dump ----

#[test]
fn dump_stack_shows_final_values() {
    let dir = TempDir::new().unwrap();
    let path = temp_script(&dir, "INT x\nMOV x 7\nPUSH 3\n");
    stackscript()
        .args(["dump", path.to_str().unwrap(), "--stack"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] 7"))
        .stdout(predicate::str::contains("[1] 3"));
}

#[test]
fn dump_vars_shows_slots() {
    let dir = TempDir::new().unwrap();
    let path = temp_script(&dir, "INT x\nINT y\n");
    stackscript()
        .args(["dump", path.to_str().unwrap(), "--vars"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INT 'x'"))
        .stdout(predicate::str::contains("slot 1"));
}

#[test]
fn dump_defaults_to_all_tables() {
    let dir = TempDir::new().unwrap();
    let path = temp_script(&dir, "INT x\nMOV x 1\n");
    stackscript()
        .args(["dump", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("variables:"))
        .stdout(predicate::str::contains("instructions:"))
        .stdout(predicate::str::contains("stack:"));
}

#[test]
fn dump_unknown_flag_exits_1() {
    stackscript()
        .args([
            "dump",
            test_script("mov.script").to_str().unwrap(),
            "--everything",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown flag"));
}
