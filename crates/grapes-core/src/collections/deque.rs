//! Doubly-linked double-ended queue.
//!
//! Links are indices into an owned node arena rather than pointers; freed
//! nodes go on a free list and are reused by later pushes, so a deque that is
//! repeatedly drained and refilled stops allocating once it reaches its
//! high-water mark.
//!
//! Breadth-first traversals use it as a FIFO (`push_back` / `pop_front`);
//! Bellman-Ford uses both ends for the Small-Label-First ordering.

use grapes_common::utils::error::{Error, Result};

#[derive(Debug, Clone)]
struct DequeNode<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly-linked deque with O(1) operations at both ends.
#[derive(Debug, Clone)]
pub struct Deque<T> {
    nodes: Vec<DequeNode<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T: Copy> Deque<T> {
    /// Creates an empty deque.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty deque with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    fn alloc(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = DequeNode { value, prev, next };
        if let Some(slot) = self.free.pop() {
            self.nodes[slot] = node;
            slot
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Inserts `value` at the front.
    pub fn push_front(&mut self, value: T) {
        let slot = self.alloc(value, None, self.head);
        match self.head {
            Some(head) => self.nodes[head].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    /// Inserts `value` at the back.
    pub fn push_back(&mut self, value: T) {
        let slot = self.alloc(value, self.tail, None);
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the deque is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::Empty("deque"))?;
        let (value, next) = (self.nodes[head].value, self.nodes[head].next);
        self.head = next;
        match next {
            Some(next) => self.nodes[next].prev = None,
            None => self.tail = None,
        }
        self.free.push(head);
        self.len -= 1;
        Ok(value)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the deque is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::Empty("deque"))?;
        let (value, prev) = (self.nodes[tail].value, self.nodes[tail].prev);
        self.tail = prev;
        match prev {
            Some(prev) => self.nodes[prev].next = None,
            None => self.head = None,
        }
        self.free.push(tail);
        self.len -= 1;
        Ok(value)
    }

    /// Returns the front element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the deque is empty.
    pub fn peek_front(&self) -> Result<T> {
        self.head
            .map(|head| self.nodes[head].value)
            .ok_or(Error::Empty("deque"))
    }

    /// Returns the back element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the deque is empty.
    pub fn peek_back(&self) -> Result<T> {
        self.tail
            .map(|tail| self.nodes[tail].value)
            .ok_or(Error::Empty("deque"))
    }

    /// Returns true if the deque holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let slot = cursor?;
            let node = &self.nodes[slot];
            cursor = node.next;
            Some(node.value)
        })
    }

    /// Removes every element, keeping the arena's allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

impl<T: Copy + PartialEq> Deque<T> {
    /// Linear scan for `value`.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T: Copy> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut deque = Deque::new();
        for i in 0..10 {
            deque.push_back(i);
        }
        let drained: Vec<_> = std::iter::from_fn(|| deque.pop_front().ok()).collect();
        assert_eq!(drained, (0..10).collect::<Vec<_>>());
        assert!(deque.is_empty());
    }

    #[test]
    fn test_lifo_order() {
        let mut deque = Deque::new();
        for i in 0..10 {
            deque.push_front(i);
        }
        let drained: Vec<_> = std::iter::from_fn(|| deque.pop_front().ok()).collect();
        assert_eq!(drained, (0..10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_both_ends() {
        let mut deque = Deque::new();
        deque.push_back(2);
        deque.push_front(1);
        deque.push_back(3);

        assert_eq!(deque.len(), 3);
        assert_eq!(deque.peek_front(), Ok(1));
        assert_eq!(deque.peek_back(), Ok(3));
        assert_eq!(deque.iter().collect::<Vec<_>>(), vec![1, 2, 3]);

        assert_eq!(deque.pop_back(), Ok(3));
        assert_eq!(deque.pop_front(), Ok(1));
        assert_eq!(deque.pop_back(), Ok(2));
        assert!(deque.is_empty());
        assert_eq!(deque.len(), 0);
    }

    #[test]
    fn test_empty_operations_fail() {
        let mut deque: Deque<u32> = Deque::new();
        assert_eq!(deque.pop_front(), Err(Error::Empty("deque")));
        assert_eq!(deque.pop_back(), Err(Error::Empty("deque")));
        assert_eq!(deque.peek_front(), Err(Error::Empty("deque")));
        assert_eq!(deque.peek_back(), Err(Error::Empty("deque")));
    }

    #[test]
    fn test_contains() {
        let mut deque = Deque::new();
        deque.push_back(5);
        deque.push_back(7);
        assert!(deque.contains(5));
        assert!(deque.contains(7));
        assert!(!deque.contains(6));

        deque.pop_front().unwrap();
        assert!(!deque.contains(5));
    }

    #[test]
    fn test_slots_are_reused() {
        let mut deque = Deque::with_capacity(4);
        for round in 0..100 {
            deque.push_back(round);
            deque.push_front(round);
            assert_eq!(deque.pop_back(), Ok(round));
            assert_eq!(deque.pop_front(), Ok(round));
        }
        assert!(deque.nodes.len() <= 2);
    }

    #[test]
    fn test_single_element_links() {
        let mut deque = Deque::new();
        deque.push_front(9);
        assert_eq!(deque.peek_front(), deque.peek_back());
        assert_eq!(deque.pop_back(), Ok(9));
        deque.push_back(10);
        assert_eq!(deque.pop_front(), Ok(10));
        assert!(deque.is_empty());
    }
}
