//! Bounded LIFO hold stack backed by [`ArrayVec`].
//!
//! The top of the stack is the last element of the array; an empty stack has no top index.

use arrayvec::ArrayVec;

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldStack<T, const N: usize> {
    items: ArrayVec<T, N>,
}

impl<T, const N: usize> HoldStack<T, N> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Index of the top slot, counted from the base.
    pub fn top_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    pub fn push(&mut self, item: T) -> Result<(), CoreError> {
        self.items
            .try_push(item)
            .map_err(|_| CoreError::StackFull { capacity: N })
    }

    pub fn pop(&mut self) -> Result<T, CoreError> {
        self.items.pop().ok_or(CoreError::StackEmpty)
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Item `depth` places below the top (0 is the top itself).
    pub fn get_from_top(&self, depth: usize) -> Option<&T> {
        let index = self.top_index()?.checked_sub(depth)?;
        self.items.get(index)
    }

    pub fn get_from_top_mut(&mut self, depth: usize) -> Option<&mut T> {
        let index = self.top_index()?.checked_sub(depth)?;
        self.items.get_mut(index)
    }

    /// Iterate top to base.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

impl<T, const N: usize> Default for HoldStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let s: HoldStack<u32, 3> = HoldStack::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.top_index(), None);
        assert_eq!(s.top(), None);
        assert_eq!(s.get_from_top(0), None);
        assert_eq!(s.capacity(), 3);
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut s: HoldStack<u32, 3> = HoldStack::new();
        s.push(1).unwrap();
        s.push(2).unwrap();
        s.push(3).unwrap();
        assert_eq!(s.top_index(), Some(2));
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert_eq!(s.pop(), Err(CoreError::StackEmpty));
    }

    #[test]
    fn test_push_full_is_rejected() {
        let mut s: HoldStack<u32, 2> = HoldStack::new();
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert!(s.is_full());
        assert_eq!(s.push(3), Err(CoreError::StackFull { capacity: 2 }));
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn test_get_from_top() {
        let mut s: HoldStack<u32, 3> = HoldStack::new();
        for i in 0..3 {
            s.push(i).unwrap();
        }
        assert_eq!(s.get_from_top(0), Some(&2));
        assert_eq!(s.get_from_top(1), Some(&1));
        assert_eq!(s.get_from_top(3), None);
        assert_eq!(s.get_from_top_mut(0).copied(), Some(2));
        assert_eq!(s.get_from_top_mut(2).copied(), Some(0));
        assert_eq!(s.get_from_top_mut(3), None);

        *s.top_mut().unwrap() = 20;
        assert_eq!(s.top(), Some(&20));
    }
}
