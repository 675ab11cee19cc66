//! Bounded circular FIFO queue.
//!
//! Storage is a fixed `[Option<T>; N]` ring. `head` is the slot of the front element and
//! `tail` the slot of the most recently enqueued one; both advance modulo `N`. The occupied
//! slots are always the `len` consecutive (circular) slots starting at `head`, and every other
//! slot is `None`.

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingQueue<T: Copy, const N: usize> {
    slots: [Option<T>; N],
    head: usize,
    tail: usize,
    len: usize,
}

impl<T: Copy, const N: usize> RingQueue<T, N> {
    /// Create an empty queue.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero.
    pub fn new() -> Self {
        assert!(N > 0, "RingQueue capacity must be non-zero");
        Self {
            slots: [None; N],
            head: 0,
            tail: N - 1,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Append `item` at the back.
    pub fn enqueue(&mut self, item: T) -> Result<(), CoreError> {
        if self.is_full() {
            return Err(CoreError::QueueFull { capacity: N });
        }

        self.tail = (self.tail + 1) % N;
        self.slots[self.tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front item.
    pub fn dequeue(&mut self) -> Result<T, CoreError> {
        if self.is_empty() {
            return Err(CoreError::QueueEmpty);
        }

        let item = self.slots[self.head].take().ok_or(CoreError::QueueEmpty)?;
        self.head = (self.head + 1) % N;
        self.len -= 1;
        Ok(item)
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Item `offset` places behind the front (0 is the front itself).
    pub fn get(&self, offset: usize) -> Option<&T> {
        if offset >= self.len {
            return None;
        }
        self.slots[(self.head + offset) % N].as_ref()
    }

    pub fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        if offset >= self.len {
            return None;
        }
        self.slots[(self.head + offset) % N].as_mut()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[(self.head + offset) % N].as_ref())
    }
}

impl<T: Copy, const N: usize> Default for RingQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
