//! Tetris Stack (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the console run loop shared by the
//! binary and the integration tests.

pub mod app;
pub mod cli;

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;

pub use app::{run, AppConfig};
