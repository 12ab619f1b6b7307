use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn reelmark() -> Command {
    Command::cargo_bin("reelmark").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    reelmark()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("favorites"))
        .stdout(predicate::str::contains("rate"))
        .stdout(predicate::str::contains("--api-key"));
}

#[test]
fn test_rate_help_names_its_arguments() {
    reelmark()
        .args(["rate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<ID>"))
        .stdout(predicate::str::contains("<STARS>"));
}
