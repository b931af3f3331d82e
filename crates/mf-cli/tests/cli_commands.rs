#![allow(deprecated)] // Command::cargo_bin: the macro replacement is not stable yet

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// At the start of the sample game, 8 is "Wait" and 9 is "Quit".
const WAIT_THEN_QUIT: &str = "8 9\n";

fn mf() -> Command {
    Command::cargo_bin("mf").unwrap()
}

fn write_log(dir: &TempDir, name: &str, choices: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, choices).unwrap();
    path.to_str().unwrap().to_string()
}

fn path_in(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_replays_a_choice_log() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "choices.log", WAIT_THEN_QUIT);

    mf().args(["play", "--replay", &log])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You wake on a cold floor")
                .and(predicate::str::contains("Room A"))
                .and(predicate::str::contains("> Wait\nTime passes.\n> Quit\nGoodbye.\n")),
        );
}

#[test]
fn play_reads_choices_from_stdin() {
    mf().arg("play")
        .write_stdin("8\n9\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("What will you do?")
                .and(predicate::str::contains("  9. Quit"))
                .and(predicate::str::contains("Time passes."))
                .and(predicate::str::contains("Goodbye.")),
        );
}

#[test]
fn play_reasks_on_bad_input() {
    mf().arg("play")
        .write_stdin("hello\n42\n9\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Please enter a number from 1 to 9.")
                .and(predicate::str::contains("Goodbye.")),
        );
}

#[test]
fn play_ends_quietly_when_input_closes() {
    mf().arg("play")
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Time passes.").and(predicate::str::contains("Goodbye.").not()));
}

#[test]
fn play_records_choices_and_transcript() {
    let dir = TempDir::new().unwrap();
    let record = path_in(&dir, "recorded.log");
    let transcript = path_in(&dir, "transcript.txt");

    mf().args(["play", "--record", &record, "--transcript", &transcript])
        .write_stdin("8\n9\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&record).unwrap(), WAIT_THEN_QUIT);
    let saved = fs::read_to_string(&transcript).unwrap();
    assert!(saved.ends_with("> Wait\nTime passes.\n> Quit\nGoodbye.\n"));
    assert!(!saved.contains("What will you do?"));
}

#[test]
fn play_honors_config_file() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "choices.log", WAIT_THEN_QUIT);
    let config = path_in(&dir, "narrator.json");
    fs::write(&config, r#"{ "echo_commands": false }"#).unwrap();

    mf().args(["play", "--replay", &log, "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time passes.").and(predicate::str::contains("> Wait").not()));
}

#[test]
fn play_rejects_malformed_config() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "choices.log", WAIT_THEN_QUIT);
    let config = path_in(&dir, "narrator.json");
    fs::write(&config, "{ wrap_width: ").unwrap();

    mf().args(["play", "--replay", &log, "--config", &config])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn play_rejects_malformed_log() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "choices.log", "8 zero");

    mf().args(["play", "--replay", &log])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid choice log"));
}

#[test]
fn play_fails_on_out_of_range_choice() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "choices.log", "99");

    mf().args(["play", "--replay", &log])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid choice 99"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "choices.log", WAIT_THEN_QUIT);

    mf().args(["play", "--replay", &log, "--verbose"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("enumerated turn"))
        .stdout(predicate::str::contains("enumerated turn").not());
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_accepts_a_recorded_session() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "choices.log", WAIT_THEN_QUIT);
    let transcript = path_in(&dir, "transcript.txt");

    mf().args(["play", "--replay", &log, "--transcript", &transcript])
        .assert()
        .success();

    mf().args(["check", "--choices", &log, "--transcript", &transcript])
        .assert()
        .success()
        .stdout(predicate::str::contains("transcript matches"));
}

#[test]
fn check_reports_a_tampered_transcript() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "choices.log", WAIT_THEN_QUIT);
    let transcript = path_in(&dir, "transcript.txt");

    mf().args(["play", "--replay", &log, "--transcript", &transcript])
        .assert()
        .success();
    let saved = fs::read_to_string(&transcript).unwrap();
    fs::write(&transcript, saved.replace("Time passes.", "Nothing happens.")).unwrap();

    mf().args(["check", "--choices", &log, "--transcript", &transcript])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("transcripts differ")
                .and(predicate::str::contains("Nothing happens.")),
        );
}

#[test]
fn check_accepts_a_session_recorded_from_the_keyboard() {
    let dir = TempDir::new().unwrap();
    let record = path_in(&dir, "recorded.log");
    let transcript = path_in(&dir, "transcript.txt");

    mf().args(["play", "--record", &record, "--transcript", &transcript])
        .write_stdin("1\n8\n9\n")
        .assert()
        .success();

    mf().args(["check", "--choices", &record, "--transcript", &transcript])
        .assert()
        .success()
        .stdout(predicate::str::contains("transcript matches"));
}

#[test]
fn check_accepts_a_session_at_the_same_width() {
    let dir = TempDir::new().unwrap();
    let record = path_in(&dir, "recorded.log");
    let transcript = path_in(&dir, "transcript.txt");

    mf().args(["play", "--width", "40", "--record", &record, "--transcript", &transcript])
        .write_stdin("1\n8\n9\n")
        .assert()
        .success();

    mf().args(["check", "--choices", &record, "--transcript", &transcript, "--width", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("transcript matches"));

    mf().args(["check", "--choices", &record, "--transcript", &transcript])
        .assert()
        .failure()
        .stderr(predicate::str::contains("transcripts differ"));
}

#[test]
fn check_rejects_a_transcript_without_its_final_newline() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "choices.log", WAIT_THEN_QUIT);
    let transcript = path_in(&dir, "transcript.txt");

    mf().args(["play", "--replay", &log, "--transcript", &transcript])
        .assert()
        .success();
    let saved = fs::read_to_string(&transcript).unwrap();
    fs::write(&transcript, saved.trim_end_matches('\n')).unwrap();

    mf().args(["check", "--choices", &log, "--transcript", &transcript])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end of transcript"));
}

#[test]
fn check_notices_a_different_width() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "choices.log", WAIT_THEN_QUIT);
    let transcript = path_in(&dir, "transcript.txt");

    mf().args(["play", "--replay", &log, "--transcript", &transcript])
        .assert()
        .success();

    mf().args(["check", "--choices", &log, "--transcript", &transcript, "--width", "20"])
        .assert()
        .failure();
}
