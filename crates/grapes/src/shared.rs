//! Thread-safe handle to a graph store.

use std::sync::Arc;

use grapes_adapters::plugins::algorithms::GraphAlgorithm;
use grapes_common::utils::error::Result;
use grapes_core::GraphStore;
use parking_lot::RwLock;

/// A [`GraphStore`] shared between threads.
///
/// Clones are cheap handles to the same graph. Many readers or one writer
/// hold the lock at a time, so no mutation can interleave with a running
/// algorithm. Long-running readers can take a [`snapshot`](Self::snapshot)
/// instead and release the lock immediately.
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<GraphStore>>,
}

impl SharedGraph {
    /// Wraps a store.
    #[must_use]
    pub fn new(store: GraphStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Runs `f` under a read lock.
    pub fn read<R>(&self, f: impl FnOnce(&GraphStore) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` under the write lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut GraphStore) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Copies the current graph out of the lock.
    #[must_use]
    pub fn snapshot(&self) -> GraphStore {
        self.inner.read().clone()
    }

    /// Runs an algorithm under a read lock.
    ///
    /// # Errors
    ///
    /// Propagates the algorithm's error.
    pub fn run<A: GraphAlgorithm>(&self, algorithm: &A) -> Result<A::Output> {
        self.read(|store| algorithm.run(store))
    }
}

impl From<GraphStore> for SharedGraph {
    fn from(store: GraphStore) -> Self {
        Self::new(store)
    }
}
