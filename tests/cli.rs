use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("primo").unwrap()
}

#[test]
fn default_run_reports_seventeen_as_prime() {
    cmd().assert().success().stdout("É primo!\n");
}

#[test]
fn prime_argument() {
    cmd().arg("2").assert().success().stdout(contains("É primo!"));
}

#[test]
fn composite_argument() {
    cmd().arg("15").assert().success().stdout(contains("Não é primo!"));
}

#[test]
fn negative_argument() {
    cmd().arg("-7").assert().success().stdout(contains("Não é primo!"));
}

#[test]
fn english_verdicts() {
    cmd()
        .args(["17", "--lang", "en"])
        .assert()
        .success()
        .stdout(contains("Prime."));
    cmd()
        .args(["21", "--lang", "en"])
        .assert()
        .success()
        .stdout(contains("Composite."));
}

#[test]
fn debug_flag_traces_the_verdict() {
    cmd()
        .args(["--debug", "21"])
        .assert()
        .success()
        .stdout(contains("21 -> Composite"));
}
