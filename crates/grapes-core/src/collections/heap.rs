//! Bounded binary min-heap keyed by priority.
//!
//! The layout follows the "less naive" binary heap: entries live in
//! `data[1..=size]`, `data[0]` holds a `-inf` sentinel so sift-up never has
//! to test for the root, and every slot past `size` holds a `+inf` sentinel
//! so sift-down can always compare both children.
//!
//! There is no decrease-key. Dijkstra re-inserts a node whenever its distance
//! improves and discards extractions of nodes it has already finalized, so the
//! heap may hold several entries for one key. The maximum capacity bounds the
//! total number of live entries, not the number of distinct keys.

use grapes_common::types::NodeId;
use grapes_common::utils::error::{Error, Result};
use grapes_common::utils::growth::next_capacity;

#[derive(Debug, Clone, Copy)]
struct HeapEntry<K> {
    priority: f64,
    key: K,
}

impl<K: Default> HeapEntry<K> {
    fn floor() -> Self {
        Self {
            priority: f64::NEG_INFINITY,
            key: K::default(),
        }
    }

    fn ceiling() -> Self {
        Self {
            priority: f64::INFINITY,
            key: K::default(),
        }
    }
}

/// Array-backed binary min-heap with a hard upper bound on its size.
#[derive(Debug, Clone)]
pub struct MinHeap<K = NodeId> {
    /// `capacity + 2` slots: floor sentinel, entries, ceiling sentinels.
    data: Vec<HeapEntry<K>>,
    size: usize,
    capacity: usize,
    max_capacity: usize,
}

impl<K: Copy + Default> MinHeap<K> {
    /// Creates a heap that starts with room for `initial_capacity` entries and
    /// may grow up to `max_capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the initial buffer cannot be allocated.
    pub fn with_capacity(max_capacity: usize, initial_capacity: usize) -> Result<Self> {
        let capacity = initial_capacity.min(max_capacity);
        let mut data = Vec::new();
        data.try_reserve_exact(capacity + 2)?;
        data.push(HeapEntry::floor());
        data.resize(capacity + 2, HeapEntry::ceiling());

        Ok(Self {
            data,
            size: 0,
            capacity,
            max_capacity,
        })
    }

    fn grow(&mut self) -> Result<()> {
        if self.capacity >= self.max_capacity {
            return Err(Error::OutOfCapacity {
                max_capacity: self.max_capacity,
            });
        }

        let capacity = next_capacity(self.capacity).min(self.max_capacity);
        self.data.try_reserve_exact(capacity - self.capacity)?;
        self.data.resize(capacity + 2, HeapEntry::ceiling());
        self.capacity = capacity;
        Ok(())
    }

    /// Inserts `key` with the given priority. Duplicate keys are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfCapacity`] if the heap is full at its maximum
    /// capacity, or [`Error::OutOfMemory`] if growing fails.
    pub fn insert(&mut self, key: K, priority: f64) -> Result<()> {
        if self.size >= self.capacity {
            self.grow()?;
        }

        self.size += 1;
        let mut hole = self.size;
        let mut pred = hole >> 1;
        while self.data[pred].priority > priority {
            self.data[hole] = self.data[pred];
            hole = pred;
            pred >>= 1;
        }
        self.data[hole] = HeapEntry { priority, key };
        Ok(())
    }

    /// Removes and returns the key with the smallest priority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the heap holds no entries.
    pub fn extract_min(&mut self) -> Result<K> {
        if self.size == 0 {
            return Err(Error::Empty("heap"));
        }

        let min_key = self.data[1].key;
        let size = self.size;

        // Walk the hole down along the smaller child until it reaches the
        // bottom level, then drop the last entry into it and sift that up.
        let mut hole = 1;
        let mut succ = 2;
        while succ < size {
            if self.data[succ].priority > self.data[succ + 1].priority {
                succ += 1;
            }
            self.data[hole] = self.data[succ];
            hole = succ;
            succ <<= 1;
        }

        let bubble = self.data[size];
        let mut pred = hole >> 1;
        while self.data[pred].priority > bubble.priority {
            self.data[hole] = self.data[pred];
            hole = pred;
            pred >>= 1;
        }
        self.data[hole] = bubble;

        self.data[size] = HeapEntry::ceiling();
        self.size -= 1;
        Ok(min_key)
    }

    /// Returns the minimum entry as `(key, priority)` without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<(K, f64)> {
        (self.size > 0).then(|| (self.data[1].key, self.data[1].priority))
    }

    /// Returns true if the heap holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Currently allocated entry capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Upper bound on the number of live entries.
    #[must_use]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Removes every entry, keeping the allocation.
    pub fn clear(&mut self) {
        for entry in &mut self.data[1..=self.size] {
            *entry = HeapEntry::ceiling();
        }
        self.size = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(heap: &mut MinHeap<usize>) -> Vec<usize> {
        let mut out = Vec::new();
        while !heap.is_empty() {
            out.push(heap.extract_min().unwrap());
        }
        out
    }

    #[test]
    fn test_extracts_in_priority_order() {
        let mut heap = MinHeap::with_capacity(16, 16).unwrap();
        for (key, priority) in [(0, 5.0), (1, 1.0), (2, 4.0), (3, 2.0), (4, 3.0)] {
            heap.insert(key, priority).unwrap();
        }
        assert_eq!(heap.peek_min(), Some((1, 1.0)));
        assert_eq!(drain(&mut heap), vec![1, 3, 4, 2, 0]);
    }

    #[test]
    fn test_priority_not_key_orders_entries() {
        let mut heap = MinHeap::with_capacity(4, 4).unwrap();
        heap.insert(0, 10.0).unwrap();
        heap.insert(9, 0.5).unwrap();
        assert_eq!(heap.extract_min(), Ok(9));
        assert_eq!(heap.extract_min(), Ok(0));
    }

    #[test]
    fn test_duplicate_keys() {
        let mut heap = MinHeap::with_capacity(8, 2).unwrap();
        heap.insert(7, 3.0).unwrap();
        heap.insert(7, 1.0).unwrap();
        heap.insert(7, 2.0).unwrap();
        assert_eq!(heap.len(), 3);
        assert_eq!(drain(&mut heap), vec![7, 7, 7]);
    }

    #[test]
    fn test_grows_up_to_max_capacity() {
        let mut heap = MinHeap::with_capacity(10, 1).unwrap();
        for i in 0..10 {
            heap.insert(i, (10 - i) as f64).unwrap();
        }
        assert_eq!(heap.capacity(), 10);
        assert_eq!(
            heap.insert(10, 0.0),
            Err(Error::OutOfCapacity { max_capacity: 10 })
        );
        assert_eq!(drain(&mut heap), (0..10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_initial_capacity_clamped_to_max() {
        let heap: MinHeap<usize> = MinHeap::with_capacity(3, 100).unwrap();
        assert_eq!(heap.capacity(), 3);
        assert_eq!(heap.max_capacity(), 3);
    }

    #[test]
    fn test_extract_from_empty() {
        let mut heap: MinHeap<usize> = MinHeap::with_capacity(4, 0).unwrap();
        assert_eq!(heap.extract_min(), Err(Error::Empty("heap")));
        assert_eq!(heap.peek_min(), None);
    }

    #[test]
    fn test_sentinels_hold_after_extraction() {
        let mut heap = MinHeap::with_capacity(8, 8).unwrap();
        for i in 0..5 {
            heap.insert(i, i as f64).unwrap();
        }
        heap.extract_min().unwrap();
        heap.extract_min().unwrap();

        assert_eq!(heap.data[0].priority, f64::NEG_INFINITY);
        for slot in &heap.data[heap.len() + 1..] {
            assert_eq!(slot.priority, f64::INFINITY);
        }
    }

    #[test]
    fn test_interleaved_operations() {
        let mut heap = MinHeap::with_capacity(32, 0).unwrap();
        heap.insert(1, 4.0).unwrap();
        heap.insert(2, 2.0).unwrap();
        assert_eq!(heap.extract_min(), Ok(2));
        heap.insert(3, 1.0).unwrap();
        heap.insert(4, 3.0).unwrap();
        assert_eq!(heap.extract_min(), Ok(3));
        assert_eq!(heap.extract_min(), Ok(4));
        assert_eq!(heap.extract_min(), Ok(1));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut heap = MinHeap::with_capacity(8, 4).unwrap();
        heap.insert(1usize, 1.0).unwrap();
        heap.insert(2, 2.0).unwrap();
        heap.clear();
        assert!(heap.is_empty());
        heap.insert(3, 3.0).unwrap();
        assert_eq!(heap.extract_min(), Ok(3));
    }
}
