//! Tests that JSON output keeps stdout to one event object per line.

use std::io::{self, Cursor, Write};
use std::process::{Command, Stdio};
use strictly_noughts::{ComputerPlayer, ConsoleInput, Game, HumanPlayer, JsonObserver, Outcome};

fn assert_json_lines(stdout: &str) -> Vec<serde_json::Value> {
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| {
            serde_json::from_str(line).unwrap_or_else(|e| panic!("not JSON: {line:?} ({e})"))
        })
        .collect();
    assert!(!events.is_empty());
    events
}

#[test]
fn test_json_observer_writes_only_json_lines() {
    let human = HumanPlayer::new(
        'X',
        Box::new(ConsoleInput::new(
            Cursor::new("0\n1\n2\n3\n4\n5\n6\n7\n8\n"),
            io::sink(),
        )),
    );
    let mut game = Game::new(Box::new(human), Box::new(ComputerPlayer::seeded('O', "random", 7)));
    let mut observer = JsonObserver::new(Vec::new());
    let outcome = game.play(&mut observer).unwrap();
    assert_ne!(outcome, Outcome::InProgress);

    let stdout = String::from_utf8(observer.into_inner()).unwrap();
    let events = assert_json_lines(&stdout);
    assert_eq!(events.last().unwrap()["event"], "game_over");
}

#[test]
fn test_play_json_stdout_is_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_strictly_noughts"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["play", "--config"])
        .arg(dir.path().join("absent.toml"))
        .args([
            "--player1", "human", "--player2", "computer", "--seed", "11", "--format", "json",
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Every cell index in order: each line either lands or hits a taken cell
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"0\n1\n2\n3\n4\n5\n6\n7\n8\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let events = assert_json_lines(&stdout);
    assert_eq!(events.last().unwrap()["event"], "game_over");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Player: X"));
    assert!(stderr.contains("> Position: "));
}
