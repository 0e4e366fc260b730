use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

fn cargo_bin() -> Command {
    Command::cargo_bin("bf").unwrap()
}

const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>\
                           ---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

#[test]
fn positional_program_runs() {
    cargo_bin()
        .timeout(Duration::from_secs(5))
        .arg("+++.")
        .assert()
        .success()
        .stdout("\u{3}")
        .stderr(predicate::str::is_empty());
}

#[test]
fn hello_world_prints_exact_bytes() {
    cargo_bin()
        .timeout(Duration::from_secs(5))
        .arg(HELLO_WORLD)
        .assert()
        .success()
        .stdout("Hello World!\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_argument_prints_usage_and_fails() {
    cargo_bin()
        .timeout(Duration::from_secs(5))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn comment_text_is_ignored() {
    // No instruction characters in the comment words.
    cargo_bin()
        .timeout(Duration::from_secs(5))
        .arg("++ two up then print .")
        .assert()
        .success()
        .stdout("\u{2}");
}
