//! Integration tests for the console loop

use std::io::Cursor;

use tetris_stack::types::Level;
use tetris_stack::{run, AppConfig};

fn session(level: Level, input: &str) -> (tetris_stack::core::GameState, String) {
    session_bytes(level, input.as_bytes())
}

fn session_bytes(level: Level, input: &[u8]) -> (tetris_stack::core::GameState, String) {
    let config = AppConfig {
        level,
        seed: 12345,
        color: false,
        json: false,
    };
    let mut out = Vec::new();
    let state = run(&config, Cursor::new(input.to_vec()), &mut out).unwrap();
    (state, String::from_utf8(out).unwrap())
}

fn queue_ids(state: &tetris_stack::core::GameState) -> Vec<u32> {
    state.queue().iter().map(|p| p.id).collect()
}

fn stack_ids(state: &tetris_stack::core::GameState) -> Vec<u32> {
    state.stack().iter().map(|p| p.id).collect()
}

#[test]
fn test_quit_immediately() {
    let (state, out) = session(Level::Master, "0\n");
    assert!(out.contains("Queue initialized with 5 pieces."));
    assert!(out.contains("Hold stack initialized."));
    assert!(out.contains("Leaving the master simulator."));
    assert_eq!(queue_ids(&state), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_play_then_quit() {
    let (state, out) = session(Level::Master, "1\n0\n");
    assert!(out.contains("Action: playing piece"));
    assert_eq!(queue_ids(&state), vec![1, 2, 3, 4, 5]);
    // State is printed before each prompt: once at start, once after the play.
    assert_eq!(out.matches("CURRENT STATE (master level)").count(), 2);
}

#[test]
fn test_use_held_on_empty_stack_warns() {
    let (state, out) = session(Level::Master, "3\n0\n");
    assert!(out.contains("WARNING: cannot use a held piece"));
    assert!(state.stack().is_empty());
    assert_eq!(queue_ids(&state), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_malformed_input_reprompts() {
    let (state, out) = session(Level::Master, "abc\n1\n0\n");
    assert!(out.contains("ERROR: invalid input \"abc\", please type a number."));
    assert!(out.contains("Action: playing piece"));
    assert_eq!(queue_ids(&state), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_non_utf8_input_reprompts() {
    let (state, out) = session_bytes(Level::Master, b"\xff\xfe\n1\n0\n");
    assert!(out.contains("ERROR: invalid input"));
    assert!(out.contains("Action: playing piece"));
    assert!(out.contains("Leaving the master simulator."));
    assert_eq!(queue_ids(&state), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_invalid_option_is_reported() {
    let (_, out) = session(Level::Adventurer, "4\n0\n");
    assert!(out.contains("INVALID OPTION 4. Please type 1, 2, 3 or 0."));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let (state, out) = session(Level::Master, "2\n");
    assert!(out.contains("End of input, leaving the simulator."));
    assert_eq!(stack_ids(&state), vec![0]);
}

#[test]
fn test_master_block_swap_session() {
    let (state, out) = session(Level::Master, "2\n2\n2\n5\n0\n");
    assert!(out.contains("Action: block swap of 3 pieces done."));
    assert_eq!(queue_ids(&state), vec![2, 1, 0, 6, 7]);
    assert_eq!(stack_ids(&state), vec![3, 4, 5]);
}

#[test]
fn test_block_swap_below_threshold_warns() {
    let (state, out) = session(Level::Master, "2\n5\n0\n");
    assert!(out.contains("WARNING: cannot block swap"));
    assert!(out.contains("(have 1)"));
    assert_eq!(stack_ids(&state), vec![0]);
}

#[test]
fn test_novice_session() {
    let (state, out) = session(Level::Novice, "2\n1\n2\n0\n");
    assert!(!out.contains("Hold stack"));
    assert!(out.contains("WARNING: cannot insert: the queue is full (5 pieces)"));
    assert!(out.contains("played (dequeued) from the front of the queue."));
    assert!(out.contains("inserted (enqueued) at the back of the queue."));
    assert_eq!(queue_ids(&state), vec![1, 2, 3, 4, 5]);
    assert!(out.contains("Leaving the novice simulator."));
}

#[test]
fn test_plain_output_has_no_escape_codes() {
    let (_, out) = session(Level::Master, "1\n2\n4\n0\n");
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn test_colored_output_styles_pieces() {
    let config = AppConfig {
        color: true,
        ..AppConfig::default()
    };
    let mut out = Vec::new();
    run(&config, Cursor::new("0\n"), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains('\u{1b}'));
}

#[test]
fn test_json_observations_follow_each_state() {
    let config = AppConfig {
        level: Level::Master,
        seed: 5,
        color: false,
        json: true,
    };
    let mut out = Vec::new();
    run(&config, Cursor::new("1\n2\n0\n"), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    let observations: Vec<serde_json::Value> = out
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(observations.len(), 3);
    assert_eq!(observations[0]["seq"], 1);
    assert_eq!(observations[2]["seq"], 3);
    assert_eq!(observations[1]["queue"][0]["id"], 1);
    assert_eq!(observations[2]["stack"][0]["id"], 1);
    assert_eq!(observations[2]["seed"], 5);
}
