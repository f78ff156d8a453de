//! Scratch collections used by the traversal and shortest-path algorithms.
//!
//! - [`MinHeap`] - bounded binary min-heap with lazy deletion semantics
//! - [`Deque`] - index-linked double-ended queue

mod deque;
mod heap;

pub use deque::Deque;
pub use heap::MinHeap;
