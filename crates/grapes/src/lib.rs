//! # Grapes
//!
//! An in-memory multigraph engine with classical shortest-path and traversal
//! algorithms.
//!
//! Start with [`GraphStore`] for a graph addressed by dense [`NodeId`]s, or
//! with [`LabeledGraph`] to address nodes by your own labels. Algorithms live
//! in [`algorithms`] and only ever read the graph.
//!
//! | Algorithm | Entry point | Negative weights |
//! | --------- | ----------- | ---------------- |
//! | Dijkstra | [`algorithms::dijkstra`] | not supported |
//! | Bellman-Ford (SPFA) | [`algorithms::bellman_ford`] | supported, cycles certified |
//! | Floyd-Warshall | [`algorithms::floyd_warshall`] | supported, cycles certified |
//! | Component sizes | [`algorithms::component_sizes`] | n/a |
//! | Bipartite check | [`algorithms::is_bipartite`] | n/a |
//!
//! ## Quick Start
//!
//! ```rust
//! use grapes::{LabeledGraph, ShortestPathAlgorithm};
//!
//! let mut graph = LabeledGraph::new(false);
//! for city in ["Lyon", "Paris", "Lille"] {
//!     graph.add_node(city)?;
//! }
//! graph.add_edge(&"Lyon", &"Paris", 465.0)?;
//! graph.add_edge(&"Paris", &"Lille", 225.0)?;
//!
//! let path = graph.shortest_path(&"Lyon", &"Lille", ShortestPathAlgorithm::Auto)?;
//! assert_eq!(path, vec!["Lyon", "Paris", "Lille"]);
//! # Ok::<(), grapes::Error>(())
//! ```

mod labeled;
mod shared;

pub use labeled::{LabeledGraph, ShortestPathAlgorithm};
pub use shared::SharedGraph;

// Re-export core types - you'll need these for working with the store directly
pub use grapes_common::types::NodeId;
pub use grapes_common::utils::error::{Error, Result};
pub use grapes_core::{
    AdjacencyList, Deque, GraphConfig, GraphStats, GraphStore, MinHeap, NodeSlot,
};

/// Graph algorithms and their result types.
pub mod algorithms {
    pub use grapes_adapters::plugins::algorithms::*;
}
