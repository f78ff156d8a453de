//! Per-node adjacency lists with O(1) unordered removal.
//!
//! Each live node owns one [`AdjacencyList`]: two parallel arrays of arc
//! targets and arc weights plus an explicit capacity that grows
//! geometrically and never shrinks. Removing an arc overwrites it with the
//! last arc and truncates, so arc order is not stable across removals.

use grapes_common::types::NodeId;
use grapes_common::utils::error::Result;
use grapes_common::utils::growth::capacity_for;

/// Outgoing arcs of a single node.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    /// Arc targets.
    targets: Vec<NodeId>,
    /// Arc weights (parallel to targets).
    weights: Vec<f64>,
    /// Reserved arc slots.
    capacity: usize,
}

impl AdjacencyList {
    /// Creates an empty list without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` arcs.
    ///
    /// # Errors
    ///
    /// Returns [`grapes_common::Error::OutOfMemory`] if the buffers cannot be
    /// allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut list = Self::new();
        list.targets.try_reserve_exact(capacity)?;
        list.weights.try_reserve_exact(capacity)?;
        list.capacity = capacity;
        Ok(list)
    }

    /// Makes sure `additional` more arcs fit without further allocation.
    ///
    /// Both buffers are reserved before the new capacity is recorded, so a
    /// failed allocation leaves the list unchanged.
    pub(crate) fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self.targets.len() + additional;
        if required <= self.capacity {
            return Ok(());
        }
        let capacity = capacity_for(self.capacity, required);
        self.targets
            .try_reserve_exact(capacity - self.targets.len())?;
        self.weights
            .try_reserve_exact(capacity - self.weights.len())?;
        self.capacity = capacity;
        Ok(())
    }

    /// Appends an arc, growing the buffers if needed.
    pub fn push(&mut self, target: NodeId, weight: f64) -> Result<()> {
        self.reserve(1)?;
        self.targets.push(target);
        self.weights.push(weight);
        Ok(())
    }

    /// Position of the first arc to `target`.
    #[must_use]
    pub fn position(&self, target: NodeId) -> Option<usize> {
        self.targets.iter().position(|&t| t == target)
    }

    /// Position of the first arc to `target` carrying exactly `weight`,
    /// skipping index `skip`.
    ///
    /// Weights are compared bit for bit so mirror arcs can be paired up even
    /// when parallel arcs carry different weights.
    #[must_use]
    pub fn position_of(&self, target: NodeId, weight: f64, skip: Option<usize>) -> Option<usize> {
        self.iter().enumerate().position(|(i, (t, w))| {
            Some(i) != skip && t == target && w.to_bits() == weight.to_bits()
        })
    }

    /// Removes the arc at `index` by moving the last arc into its place.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn swap_remove(&mut self, index: usize) -> (NodeId, f64) {
        (
            self.targets.swap_remove(index),
            self.weights.swap_remove(index),
        )
    }

    /// Removes the first arc to `target`, returning its weight.
    pub fn remove_first(&mut self, target: NodeId) -> Option<f64> {
        let index = self.position(target)?;
        Some(self.swap_remove(index).1)
    }

    /// Removes every arc to `target`, returning how many were removed.
    pub fn remove_all(&mut self, target: NodeId) -> usize {
        let mut removed = 0;
        let mut j = 0;
        while j < self.targets.len() {
            if self.targets[j] == target {
                // The arc swapped into `j` has not been inspected yet.
                self.swap_remove(j);
                removed += 1;
            } else {
                j += 1;
            }
        }
        removed
    }

    /// Number of arcs to `target`.
    #[must_use]
    pub fn count(&self, target: NodeId) -> usize {
        self.targets.iter().filter(|&&t| t == target).count()
    }

    /// Iterates `(target, weight)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.targets
            .iter()
            .copied()
            .zip(self.weights.iter().copied())
    }

    /// Arc targets in storage order.
    #[must_use]
    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    /// Arc weights, parallel to [`targets`](Self::targets).
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of arcs (the node's out-degree).
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if the node has no outgoing arcs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Reserved arc slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
