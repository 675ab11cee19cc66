use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Point-in-time copy of the queue and hold stack.
///
/// `queue` is ordered front to back and `stack` top to base, the same order the console
/// prints them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    pub queue_capacity: usize,
    pub stack_capacity: usize,
    pub next_id: u32,
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            queue: ArrayVec::new(),
            stack: ArrayVec::new(),
            queue_capacity: QUEUE_CAPACITY,
            stack_capacity: STACK_CAPACITY,
            next_id: 0,
            seed: 0,
        }
    }
}
