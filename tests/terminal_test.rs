//! Drives the terminal front end with scripted input.

use std::io::Cursor;
use tictactoe_bot::Terminal;
use tictactoe_engine::{Difficulty, Session};

fn run_script(session: &mut Session, script: &str) -> String {
    let mut terminal = Terminal::new(Cursor::new(script.to_string()), Vec::new());
    terminal.run(session).expect("terminal run");
    String::from_utf8(terminal.into_output()).expect("utf8 output")
}

#[test]
fn test_hard_opponent_replies_with_center() {
    let mut session = Session::with_seed(Difficulty::Hard, 0);
    let output = run_script(&mut session, "0\nquit\n");

    assert!(output.contains("Difficulty: hard"));
    assert!(output.contains("Opponent plays Center."));
    assert!(output.contains("X|1|2\n-+-+-\n3|O|5"));
    assert!(output.trim_end().ends_with("Bye."));
}

#[test]
fn test_occupied_cell_reports_error_and_keeps_board() {
    let mut session = Session::with_seed(Difficulty::Hard, 0);
    let output = run_script(&mut session, "0\n4\nquit\n");

    assert!(output.contains("already marked by O"));
    assert_eq!(session.board().marked_count(), 2);
}

#[test]
fn test_out_of_range_coordinates_are_rejected() {
    let mut session = Session::with_seed(Difficulty::Easy, 0);
    let output = run_script(&mut session, "3 1\n");

    assert!(output.contains("out of bounds"));
    assert_eq!(session.board().marked_count(), 0);
}

#[test]
fn test_difficulty_toggle() {
    let mut session = Session::with_seed(Difficulty::Easy, 0);
    let output = run_script(&mut session, "toggle\n");

    assert!(output.contains("Difficulty: hard"));
    assert_eq!(*session.difficulty(), Difficulty::Hard);

    let output = run_script(&mut session, "easy\n");
    assert!(output.contains("Difficulty: easy"));
    assert_eq!(*session.difficulty(), Difficulty::Easy);
}

#[test]
fn test_finished_game_restarts() {
    // X ignores the anti-diagonal threat after O blocks the top row.
    let mut session = Session::with_seed(Difficulty::Hard, 0);
    let output = run_script(&mut session, "0 0\n0 1\n2 2\n");

    assert!(output.contains("Winner: O. The opponent wins."));
    assert!(output.contains("New game."));
    assert_eq!(session.board().marked_count(), 0);
    assert_eq!(*session.games_played(), 1);
}

#[test]
fn test_unrecognized_input() {
    let mut session = Session::with_seed(Difficulty::Easy, 0);
    let output = run_script(&mut session, "banana\n\nhelp\n");

    assert!(output.contains("Unrecognized input: banana"));
    assert!(output.contains("Commands:"));
}

#[test]
fn test_opponent_opens() {
    let mut session = Session::with_seed(Difficulty::Hard, 0);
    let mut terminal = Terminal::new(Cursor::new(String::new()), Vec::new());
    terminal.opponent_opens(&mut session).unwrap();
    terminal.run(&mut session).unwrap();
    let output = String::from_utf8(terminal.into_output()).unwrap();

    assert!(output.starts_with("Opponent plays Top-left."));
    assert!(output.contains("O|1|2"));
}
