//! Game state module - the queue/stack pair and the actions that move pieces between them
//!
//! Every action is a guarded transition: it either completes and reports an
//! [`ActionOutcome`], or is refused with a [`CoreError`] and leaves the state untouched.
//! Play and Hold append a freshly generated replacement, so the queue is full again after
//! either one succeeds.

use arrayvec::ArrayVec;

use crate::types::*;
use crate::{CoreError, GameSnapshot, HoldStack, PieceGenerator, RingQueue};

pub type PieceQueue = RingQueue<Piece, QUEUE_CAPACITY>;
pub type PieceStack = HoldStack<Piece, STACK_CAPACITY>;

/// One pair exchanged by a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPair {
    /// Piece that left the queue and is now on the stack.
    pub from_queue: Piece,
    /// Piece that left the stack and is now in the queue.
    pub from_stack: Piece,
}

/// What a successful action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Played { piece: Piece, replacement: Piece },
    Held { piece: Piece, replacement: Piece },
    UsedHeld { piece: Piece },
    Swapped(SwapPair),
    BlockSwapped(ArrayVec<SwapPair, BLOCK_SWAP_LEN>),
    Dequeued { piece: Piece },
    Enqueued { piece: Piece },
}

/// Complete simulator state
#[derive(Debug, Clone)]
pub struct GameState {
    queue: PieceQueue,
    stack: PieceStack,
    generator: PieceGenerator,
}

impl GameState {
    /// Create a state whose queue is pre-filled with `QUEUE_CAPACITY` pieces (ids 0..)
    /// and whose hold stack is empty.
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let mut queue = PieceQueue::new();
        for _ in 0..QUEUE_CAPACITY {
            queue
                .enqueue(generator.generate())
                .expect("a new queue has QUEUE_CAPACITY free slots");
        }
        log::debug!(
            "queue pre-filled with {} pieces (seed {})",
            queue.len(),
            seed
        );

        Self {
            queue,
            stack: PieceStack::new(),
            generator,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &PieceStack {
        &self.stack
    }

    pub fn next_id(&self) -> u32 {
        self.generator.next_id()
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.queue.clear();
        out.queue.extend(self.queue.iter().copied());
        out.stack.clear();
        out.stack.extend(self.stack.iter().copied());
        out.queue_capacity = self.queue.capacity();
        out.stack_capacity = self.stack.capacity();
        out.next_id = self.generator.next_id();
        out.seed = self.generator.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> Result<ActionOutcome, CoreError> {
        let result = match action {
            GameAction::Play => self.play(),
            GameAction::Hold => self.hold(),
            GameAction::UseHeld => self.use_held(),
            GameAction::Swap => self.swap(),
            GameAction::SwapBlock => self.swap_block(),
            GameAction::Dequeue => self.dequeue(),
            GameAction::Enqueue => self.enqueue(),
        };

        match &result {
            Ok(outcome) => log::debug!("{}: {:?}", action.as_str(), outcome),
            Err(err) => log::debug!("{} refused: {}", action.as_str(), err),
        }
        result
    }

    /// Remove the front piece and append a replacement.
    pub fn play(&mut self) -> Result<ActionOutcome, CoreError> {
        let piece = self.queue.dequeue()?;
        let replacement = self.replenish()?;
        Ok(ActionOutcome::Played { piece, replacement })
    }

    /// Move the front piece onto the hold stack and append a replacement.
    pub fn hold(&mut self) -> Result<ActionOutcome, CoreError> {
        if self.stack.is_full() {
            return Err(CoreError::StackFull {
                capacity: self.stack.capacity(),
            });
        }
        if self.queue.is_empty() {
            return Err(CoreError::QueueEmpty);
        }

        let piece = self.queue.dequeue()?;
        self.stack.push(piece)?;
        let replacement = self.replenish()?;
        Ok(ActionOutcome::Held { piece, replacement })
    }

    /// Pop the top of the hold stack. Nothing is generated.
    pub fn use_held(&mut self) -> Result<ActionOutcome, CoreError> {
        let piece = self.stack.pop()?;
        Ok(ActionOutcome::UsedHeld { piece })
    }

    /// Exchange the queue front with the stack top in place.
    pub fn swap(&mut self) -> Result<ActionOutcome, CoreError> {
        let (Some(front), Some(top)) = (self.queue.front_mut(), self.stack.top_mut()) else {
            return Err(CoreError::SwapUnavailable);
        };

        std::mem::swap(front, top);
        Ok(ActionOutcome::Swapped(SwapPair {
            from_queue: *top,
            from_stack: *front,
        }))
    }

    /// Exchange the `BLOCK_SWAP_LEN` front queue pieces with the same number of stack pieces,
    /// pairing queue offset `i` (from the front) with stack depth `i` (from the top).
    pub fn swap_block(&mut self) -> Result<ActionOutcome, CoreError> {
        let underfilled = CoreError::BlockSwapUnderfilled {
            required: BLOCK_SWAP_LEN,
            queue: self.queue.len(),
            stack: self.stack.len(),
        };
        if self.queue.len() < BLOCK_SWAP_LEN || self.stack.len() < BLOCK_SWAP_LEN {
            return Err(underfilled);
        }

        // All pairs are read before any slot is written.
        let mut pairs: ArrayVec<SwapPair, BLOCK_SWAP_LEN> = ArrayVec::new();
        for i in 0..BLOCK_SWAP_LEN {
            let from_queue = *self.queue.get(i).ok_or(underfilled)?;
            let from_stack = *self.stack.get_from_top(i).ok_or(underfilled)?;
            pairs.push(SwapPair {
                from_queue,
                from_stack,
            });
        }

        for (i, pair) in pairs.iter().enumerate() {
            if let Some(slot) = self.queue.get_mut(i) {
                *slot = pair.from_stack;
            }
            if let Some(slot) = self.stack.get_from_top_mut(i) {
                *slot = pair.from_queue;
            }
        }
        Ok(ActionOutcome::BlockSwapped(pairs))
    }

    /// Remove the front piece without generating a replacement.
    pub fn dequeue(&mut self) -> Result<ActionOutcome, CoreError> {
        let piece = self.queue.dequeue()?;
        Ok(ActionOutcome::Dequeued { piece })
    }

    /// Generate a piece and append it. The id counter is untouched when the queue is full.
    pub fn enqueue(&mut self) -> Result<ActionOutcome, CoreError> {
        if self.queue.is_full() {
            return Err(CoreError::QueueFull {
                capacity: self.queue.capacity(),
            });
        }
        let piece = self.replenish()?;
        Ok(ActionOutcome::Enqueued { piece })
    }

    fn replenish(&mut self) -> Result<Piece, CoreError> {
        let piece = self.generator.generate();
        self.queue.enqueue(piece)?;
        Ok(piece)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
