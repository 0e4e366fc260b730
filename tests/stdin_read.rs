use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

fn cargo_bin() -> Command {
    Command::cargo_bin("bf").unwrap()
}

// Exercises the ',' instruction by providing a byte on stdin to the program
// ",." (read one byte, then echo it).
#[test]
fn reads_from_stdin_and_echoes_byte() {
    cargo_bin()
        .timeout(Duration::from_secs(5))
        .arg(",.")
        .write_stdin("Z")
        .assert()
        .success()
        .stdout("Z");
}

#[test]
fn input_on_empty_stdin_is_fatal() {
    cargo_bin()
        .timeout(Duration::from_secs(5))
        .arg(",")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input exhausted"));
}

#[test]
fn output_before_exhaustion_stands() {
    // One byte is echoed before the second ',' finds the stream empty.
    cargo_bin()
        .timeout(Duration::from_secs(5))
        .arg(",.,")
        .write_stdin("A")
        .assert()
        .failure()
        .stdout("A")
        .stderr(predicate::str::contains("input exhausted"));
}
