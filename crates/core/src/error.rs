//! Precondition failures for queue, stack and action operations.
//!
//! None of these are fatal: the operation that raised one left every container untouched.

/// Why an operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("the queue is full ({capacity} pieces), nothing can be added")]
    QueueFull { capacity: usize },

    #[error("the queue is empty, there is no piece to take")]
    QueueEmpty,

    #[error("the hold stack is full ({capacity} pieces), nothing more can be held")]
    StackFull { capacity: usize },

    #[error("the hold stack is empty, there is no held piece to use")]
    StackEmpty,

    #[error("a swap needs a piece in the queue and on the hold stack")]
    SwapUnavailable,

    #[error(
        "a block swap needs {required} pieces in the queue (have {queue}) \
         and {required} on the hold stack (have {stack})"
    )]
    BlockSwapUnderfilled {
        required: usize,
        queue: usize,
        stack: usize,
    },
}
