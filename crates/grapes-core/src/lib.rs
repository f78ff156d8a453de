//! # grapes-core
//!
//! Core layer for Grapes: the graph store, its adjacency index, and the
//! scratch collections the algorithms run on.
//!
//! This crate depends only on `grapes-common`.
//!
//! ## Modules
//!
//! - [`graph`] - The multigraph store and its node slots
//! - [`index`] - Per-node adjacency lists with swap-remove
//! - [`collections`] - Bounded min-heap and index-linked deque

pub mod collections;
pub mod graph;
pub mod index;

// Re-export commonly used types
pub use collections::{Deque, MinHeap};
pub use graph::{GraphConfig, GraphStats, GraphStore, NodeSlot};
pub use index::adjacency::AdjacencyList;
