// Verifies that --debug prints a per-instruction trace to stderr without
// disturbing program output on stdout.
use assert_cmd::Command;
use predicates::prelude::*;

fn cargo_bin() -> Command {
    Command::cargo_bin("minibf").unwrap()
}

#[test]
fn debug_flag_prints_trace_lines() {
    cargo_bin()
        .args(["--debug", "+."])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("PC: 0")
                .and(predicate::str::contains("Instruction: +"))
                .and(predicate::str::contains("Instruction: .")),
        );
}

#[test]
fn debug_flag_does_not_change_program_output() {
    cargo_bin()
        .args(["-d", "+."])
        .assert()
        .success()
        .stdout(predicate::eq(b"\x01" as &[u8]));
}

#[test]
fn trace_reports_data_pointer_and_cell_value() {
    cargo_bin()
        .args(["--debug", "+>"])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("DP: 0")
                .and(predicate::str::contains("Memory: 1")),
        );
}
