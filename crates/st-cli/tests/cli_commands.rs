//! End-to-end tests for the CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn storyteller() -> Command {
    Command::cargo_bin("storyteller").unwrap()
}

/// Write a transcript script into a temp directory.
fn script(lines: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("walkthrough.txt");
    fs::write(&path, lines).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_prints_intro_and_answers() {
    storyteller()
        .args(["play", "--seed", "1", "--plain"])
        .write_stdin("n\nexamine pedestal\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("WELCOME!")
                .and(predicate::str::contains("[[img=https://i.imgur.com/ar18tWi.jpg]]"))
                .and(predicate::str::contains("You entered the darkness..."))
                .and(predicate::str::contains("You see a gold skull on a pedestal.")),
        );
}

#[test]
fn play_renders_markup_by_default() {
    storyteller()
        .args(["play", "--seed", "1"])
        .env("NO_COLOR", "1")
        .write_stdin("")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[image: https://i.imgur.com/ar18tWi.jpg]")
                .and(predicate::str::contains("[[img=").not()),
        );
}

#[test]
fn play_quit_stops_reading() {
    storyteller()
        .args(["play", "--plain"])
        .write_stdin("quit\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You entered the darkness...").not());
}

#[test]
fn play_restart_rebuilds_the_world() {
    storyteller()
        .args(["play", "--seed", "3", "--plain"])
        .write_stdin("n\nexamine pedestal\ntake skull\nlook\nrestart\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are dead.")
                .and(predicate::str::contains("Game is finished, but you can restart it."))
                .and(predicate::str::contains("You see a pedestal and a box here.").count(2)),
        );
}

#[test]
fn play_empty_line_begs_pardon() {
    storyteller()
        .args(["play", "--plain"])
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I beg your pardon?"));
}

// ---------------------------------------------------------------------------
// transcript
// ---------------------------------------------------------------------------

#[test]
fn transcript_echoes_commands() {
    let (_dir, path) = script("n\n\nopen box\ns\nsleep\n");
    storyteller()
        .args(["transcript", &path, "--seed", "5", "--plain"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("> n\n")
                .and(predicate::str::contains("> open box\nIt's locked."))
                .and(predicate::str::contains("> s\nOutside cave"))
                .and(predicate::str::contains("> sleep\nZzzz...")),
        );
}

#[test]
fn transcript_is_reproducible_with_seed() {
    let (_dir, path) = script("look\nask witch about key\ni\nlook\n");
    let run = || {
        storyteller()
            .args(["transcript", &path, "--seed", "11", "--plain"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn transcript_missing_file() {
    storyteller()
        .args(["transcript", "/nonexistent/commands.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: failed to read"));
}

#[test]
fn verbose_logs_to_stderr() {
    let (_dir, path) = script("n\n");
    storyteller()
        .args(["transcript", &path, "--plain", "--verbose"])
        .env_remove("STORYTELLER_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("player moved"));
}
