use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cargo_bin() -> Command {
    Command::cargo_bin("minibf").unwrap()
}

fn small_valid_bf() -> &'static str {
    "+++."
}

fn bf_tempfile(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn test_positional_code_success() {
    cargo_bin()
        .arg(small_valid_bf())
        .assert()
        .success()
        .stdout(predicate::eq(b"\x03" as &[u8]))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_file_success() {
    let tf = bf_tempfile(small_valid_bf());
    cargo_bin()
        .arg("--file")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::eq(b"\x03" as &[u8]))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_comments_in_file_are_ignored() {
    let tf = bf_tempfile("add three: +++ then print it .\n");
    cargo_bin()
        .arg("-f")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::eq(b"\x03" as &[u8]));
}

#[test]
fn test_addition_loop_emits_byte_seven() {
    cargo_bin()
        .arg("++>+++++[<+>-]<.")
        .assert()
        .success()
        .stdout(predicate::eq(b"\x07" as &[u8]));
}

#[test]
fn test_no_trailing_newline_is_added() {
    // Output is exactly the bytes the program emits.
    cargo_bin()
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::eq(b"\x00" as &[u8]));
}

#[test]
fn test_missing_file_fails() {
    cargo_bin()
        .arg("--file")
        .arg("/no/such/program.bf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_file_and_code_together_is_usage_error() {
    cargo_bin()
        .arg("--file")
        .arg("program.bf")
        .arg("+++.")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_no_code_at_all_is_usage_error() {
    cargo_bin().assert().failure().code(2);
}
