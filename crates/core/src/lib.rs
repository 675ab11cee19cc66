//! Core simulator logic - pure, deterministic, and testable
//!
//! This crate owns the two containers and the actions that move pieces between them.
//! It has **no dependencies** on terminal output or input parsing, so every rule can be
//! exercised directly from tests.
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular FIFO ([`RingQueue`])
//! - [`stack`]: fixed-capacity LIFO hold area ([`HoldStack`])
//! - [`rng`]: seeded kind selection and sequential piece ids
//! - [`game_state`]: the queue/stack pair plus play, hold, use-held and swap actions
//! - [`snapshot`]: serializable copy of the state for observers
//! - [`error`]: precondition failures
//!
//! # Rules
//!
//! - The queue starts full (ids `0..QUEUE_CAPACITY`) and the hold stack starts empty.
//! - **Play** and **Hold** generate a replacement, so the queue is full after either succeeds.
//! - **Use-held**, **Swap** and **SwapBlock** never generate pieces.
//! - A refused action leaves both containers and the id counter unchanged.
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::GameState;
//! use tetris_stack_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::Play).unwrap();
//! game.apply_action(GameAction::Hold).unwrap();
//!
//! let ids: Vec<u32> = game.queue().iter().map(|p| p.id).collect();
//! assert_eq!(ids, vec![2, 3, 4, 5, 6]);
//! assert_eq!(game.stack().top().map(|p| p.id), Some(1));
//!
//! // Nothing left to block-swap with yet
//! assert!(game.apply_action(GameAction::SwapBlock).is_err());
//! ```

pub mod error;
pub mod game_state;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod stack;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use error::CoreError;
pub use game_state::{ActionOutcome, GameState, PieceQueue, PieceStack, SwapPair};
pub use queue::RingQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use snapshot::GameSnapshot;
pub use stack::HoldStack;
