//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain `Copy` data with no behaviour beyond parsing and formatting, making them
//! usable in any context (core logic, text rendering, JSON observation).
//!
//! # Capacities
//!
//! Both containers are bounded at compile time:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Slots in the circular next-piece queue |
//! | `STACK_CAPACITY` | 3 | Slots in the hold stack |
//! | `BLOCK_SWAP_LEN` | 3 | Pieces exchanged by a block swap |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{GameAction, Level, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! // Parse from string (case-insensitive)
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! // Pieces print as `[kind id]`
//! let piece = Piece::new(PieceKind::L, 7);
//! assert_eq!(piece.to_string(), "[L 7]");
//!
//! // Menu variants
//! assert_eq!(Level::from_str("master"), Some(Level::Master));
//! assert_eq!(GameAction::SwapBlock.as_str(), "swapBlock");
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

use serde::Serialize;

/// Capacity of the next-piece queue (5 slots)
pub const QUEUE_CAPACITY: usize = 5;

/// Capacity of the hold stack (3 slots)
pub const STACK_CAPACITY: usize = 3;

/// Number of pieces exchanged pairwise by a block swap
pub const BLOCK_SWAP_LEN: usize = 3;

/// The four piece kinds the generator draws from
///
/// Only a subset of the seven tetrominoes is used:
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in generator order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single uppercase letter used when printing pieces
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

/// A generated piece token.
///
/// Ids are handed out by the generator in increasing order and never reused within a run, so
/// two pieces with the same id are the same piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

/// Actions that move pieces between the queue and the hold stack
///
/// Which of these a player can pick depends on the [`Level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Remove the front piece and append a replacement
    Play,
    /// Move the front piece onto the hold stack and append a replacement
    Hold,
    /// Pop the top of the hold stack
    UseHeld,
    /// Exchange the queue front with the stack top
    Swap,
    /// Exchange the first three queue pieces with the three stacked pieces
    SwapBlock,
    /// Remove the front piece without a replacement
    Dequeue,
    /// Generate a piece and append it to the queue
    Enqueue,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Play => "play",
            GameAction::Hold => "hold",
            GameAction::UseHeld => "useHeld",
            GameAction::Swap => "swap",
            GameAction::SwapBlock => "swapBlock",
            GameAction::Dequeue => "dequeue",
            GameAction::Enqueue => "enqueue",
        }
    }
}

/// Menu variant offered by the console loop
///
/// - **Novice**: raw queue operations only (dequeue, enqueue)
/// - **Adventurer**: play, hold and use-held
/// - **Master**: adventurer actions plus single and block swaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    Novice,
    Adventurer,
    #[default]
    Master,
}

impl Level {
    /// Parse level from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "novice" => Some(Level::Novice),
            "adventurer" => Some(Level::Adventurer),
            "master" => Some(Level::Master),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Novice => "novice",
            Level::Adventurer => "adventurer",
            Level::Master => "master",
        }
    }

    /// Whether this level offers the hold stack at all.
    pub fn uses_stack(&self) -> bool {
        !matches!(self, Level::Novice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_defaults() {
        assert_eq!(QUEUE_CAPACITY, 5);
        assert_eq!(STACK_CAPACITY, 3);
        assert_eq!(BLOCK_SWAP_LEN, 3);
        assert!(BLOCK_SWAP_LEN <= QUEUE_CAPACITY);
        assert!(BLOCK_SWAP_LEN <= STACK_CAPACITY);
    }

    #[test]
    fn test_piece_kind_roundtrip_through_char() {
        for kind in PieceKind::ALL {
            let s = kind.as_char().to_string();
            assert_eq!(PieceKind::from_str(&s), Some(kind));
        }
    }

    #[test]
    fn test_action_names() {
        let mut names = std::collections::HashSet::new();
        for action in [
            GameAction::Play,
            GameAction::Hold,
            GameAction::UseHeld,
            GameAction::Swap,
            GameAction::SwapBlock,
            GameAction::Dequeue,
            GameAction::Enqueue,
        ] {
            assert!(names.insert(action.as_str()), "duplicate name {}", action.as_str());
        }
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::from_str("NOVICE"), Some(Level::Novice));
        assert_eq!(Level::from_str("adventurer"), Some(Level::Adventurer));
        assert_eq!(Level::from_str("expert"), None);
        assert_eq!(Level::default(), Level::Master);
        assert!(!Level::Novice.uses_stack());
        assert!(Level::Master.uses_stack());
    }

    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::new(PieceKind::I, 0).to_string(), "[I 0]");
        assert_eq!(Piece::new(PieceKind::O, 42).to_string(), "[O 42]");
    }
}
