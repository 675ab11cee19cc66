//! GameView: maps `core::GameState` and action results into text frames.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActionOutcome, CoreError, GameState, SwapPair};
use crate::frame::{Rgb, TextFrame, TextStyle};
use crate::input::{menu_entries, valid_codes, InputError, QUIT_CODE};
use crate::types::{GameAction, Level, Piece, PieceKind};

const WIDE_RULE: &str = "=======================================================";
const WIDE_THIN_RULE: &str = "-------------------------------------------------------";
const MENU_RULE: &str = "==================================";
const MENU_THIN_RULE: &str = "----------------------------------";

const HEADING: TextStyle = TextStyle::fg(Rgb::new(200, 200, 200)).bold();
const RULE: TextStyle = TextStyle::fg(Rgb::new(90, 90, 100));
const NOTICE: TextStyle = TextStyle::fg(Rgb::new(140, 200, 140));
const WARNING: TextStyle = TextStyle::fg(Rgb::new(240, 200, 80)).bold();
const ERROR: TextStyle = TextStyle::fg(Rgb::new(220, 80, 80)).bold();
const EMPTY: TextStyle = TextStyle::fg(Rgb::new(140, 140, 140)).dim();

fn piece_style(kind: PieceKind) -> TextStyle {
    let rgb = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    TextStyle::fg(rgb).bold()
}

fn push_piece(frame: &mut TextFrame, piece: Piece) {
    frame.push(piece_style(piece.kind), piece.to_string());
}

fn push_pieces<'a>(frame: &mut TextFrame, pieces: impl Iterator<Item = &'a Piece>) {
    let mut any = false;
    for piece in pieces {
        if any {
            frame.plain(" ");
        }
        push_piece(frame, *piece);
        any = true;
    }
    if !any {
        frame.push(EMPTY, "[EMPTY]");
    }
    frame.newline();
}

/// Menu label for an action.
pub fn action_label(action: GameAction) -> &'static str {
    match action {
        GameAction::Play => "Play piece (dequeue from the queue)",
        GameAction::Hold => "Hold piece (queue -> stack)",
        GameAction::UseHeld => "Use held piece (pop from the stack)",
        GameAction::Swap => "Single swap (queue front <-> stack top)",
        GameAction::SwapBlock => "Block swap (3 from queue <-> 3 from stack)",
        GameAction::Dequeue => "Play piece (dequeue)",
        GameAction::Enqueue => "Insert new piece (enqueue)",
    }
}

/// Start-up lines printed once before the first turn.
pub fn render_banner(level: Level, state: &GameState) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.line(
        NOTICE,
        format!("Queue initialized with {} pieces.", state.queue().len()),
    );
    if level.uses_stack() {
        frame.line(NOTICE, "Hold stack initialized.");
    }
    frame
}

/// Queue (front -> back) and, above novice level, the hold stack (top -> base).
pub fn render_state(level: Level, state: &GameState) -> TextFrame {
    let mut frame = TextFrame::new();
    let queue = state.queue();
    let stack = state.stack();

    frame.newline();
    frame.line(RULE, WIDE_RULE);
    frame.line(
        HEADING,
        format!("              CURRENT STATE ({} level)", level.as_str()),
    );
    frame.line(RULE, WIDE_RULE);

    frame.plain(format!(
        "Next pieces queue (capacity: {} | occupancy: {}):",
        queue.capacity(),
        queue.len()
    ));
    frame.newline();
    frame.plain("Queue (front -> back): ");
    push_pieces(&mut frame, queue.iter());

    if level.uses_stack() {
        frame.newline();
        frame.plain(format!(
            "Hold stack (capacity: {} | occupancy: {}):",
            stack.capacity(),
            stack.len()
        ));
        frame.newline();
        frame.plain("Stack (top -> base): ");
        push_pieces(&mut frame, stack.iter());
    }

    frame.line(RULE, WIDE_THIN_RULE);
    frame
}

/// Numbered action list ending in an open prompt line.
pub fn render_menu(level: Level) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.newline();
    frame.line(RULE, MENU_RULE);
    frame.line(HEADING, "        Action options");
    frame.line(RULE, MENU_RULE);
    frame.line(TextStyle::PLAIN, "Code | Action");
    frame.line(RULE, MENU_THIN_RULE);
    for entry in menu_entries(level) {
        frame.line(
            TextStyle::PLAIN,
            format!("  {}  | {}", entry.code, action_label(entry.action)),
        );
    }
    frame.line(TextStyle::PLAIN, format!("  {}  | Quit", QUIT_CODE));
    frame.line(RULE, MENU_THIN_RULE);
    frame.plain("Type the action code: ");
    frame
}

fn push_replacement(frame: &mut TextFrame, replacement: Piece) {
    frame.plain("--> Replacement piece ");
    push_piece(frame, replacement);
    frame.plain(" generated and added to the back of the queue.");
    frame.newline();
}

fn push_pair(frame: &mut TextFrame, pair: &SwapPair) {
    frame.plain("[queue] ");
    push_piece(frame, pair.from_queue);
    frame.plain(" <--> [stack] ");
    push_piece(frame, pair.from_stack);
    frame.newline();
}

/// Describe what a successful action did.
pub fn render_outcome(outcome: &ActionOutcome) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.newline();
    match outcome {
        ActionOutcome::Played { piece, replacement } => {
            frame.plain("Action: playing piece ");
            push_piece(&mut frame, *piece);
            frame.plain(" (dequeued from the queue).");
            frame.newline();
            push_replacement(&mut frame, *replacement);
        }
        ActionOutcome::Held { piece, replacement } => {
            frame.plain("Action: holding piece ");
            push_piece(&mut frame, *piece);
            frame.plain(" (queue -> stack).");
            frame.newline();
            push_replacement(&mut frame, *replacement);
        }
        ActionOutcome::UsedHeld { piece } => {
            frame.plain("Action: using held piece ");
            push_piece(&mut frame, *piece);
            frame.plain(" (popped from the stack).");
            frame.newline();
        }
        ActionOutcome::Swapped(pair) => {
            frame.line(TextStyle::PLAIN, "Action: single swap done.");
            frame.plain("   ");
            push_pair(&mut frame, pair);
        }
        ActionOutcome::BlockSwapped(pairs) => {
            frame.line(
                TextStyle::PLAIN,
                format!("Action: block swap of {} pieces done.", pairs.len()),
            );
            for (i, pair) in pairs.iter().enumerate() {
                frame.plain(format!("   Block #{}: ", i + 1));
                push_pair(&mut frame, pair);
            }
        }
        ActionOutcome::Dequeued { piece } => {
            frame.plain("Piece ");
            push_piece(&mut frame, *piece);
            frame.plain(" played (dequeued) from the front of the queue.");
            frame.newline();
        }
        ActionOutcome::Enqueued { piece } => {
            frame.plain("Piece ");
            push_piece(&mut frame, *piece);
            frame.plain(" inserted (enqueued) at the back of the queue.");
            frame.newline();
        }
    }
    frame
}

/// Advisory notice for a refused action.
pub fn render_refusal(action: GameAction, err: &CoreError) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.newline();
    frame.push(WARNING, "WARNING:");
    frame.plain(format!(" cannot {}: {}.", action_verb(action), err));
    frame.newline();
    frame
}

fn action_verb(action: GameAction) -> &'static str {
    match action {
        GameAction::Play | GameAction::Dequeue => "play",
        GameAction::Hold => "hold",
        GameAction::UseHeld => "use a held piece",
        GameAction::Swap => "swap",
        GameAction::SwapBlock => "block swap",
        GameAction::Enqueue => "insert",
    }
}

/// A number was typed but the level has no such option.
pub fn render_invalid_option(level: Level, code: i64) -> TextFrame {
    let codes: Vec<String> = valid_codes(level).map(|c| c.to_string()).collect();
    let listed = match codes.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        _ => codes.join(""),
    };

    let mut frame = TextFrame::new();
    frame.newline();
    frame.push(ERROR, "INVALID OPTION");
    frame.plain(format!(" {}. Please type {}.", code, listed));
    frame.newline();
    frame
}

pub fn render_input_error(err: &InputError) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.newline();
    frame.push(ERROR, "ERROR:");
    frame.plain(format!(" {}.", err));
    frame.newline();
    frame
}

pub fn render_farewell(level: Level) -> TextFrame {
    let mut frame = TextFrame::new();
    frame.newline();
    frame.line(
        NOTICE,
        format!(
            "Leaving the {} simulator. Tetris Stack is waiting for you!",
            level.as_str()
        ),
    );
    frame
}

pub fn render_end_of_input() -> TextFrame {
    let mut frame = TextFrame::new();
    frame.newline();
    frame.newline();
    frame.line(NOTICE, "End of input, leaving the simulator.");
    frame
}
