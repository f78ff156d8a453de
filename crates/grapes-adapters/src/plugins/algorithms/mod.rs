//! Graph algorithms for Grapes.
//!
//! ## Algorithm Categories
//!
//! - [`components`] - Component sizes, connectivity, bipartiteness
//! - [`shortest_path`] - Dijkstra, Bellman-Ford (SPFA), Floyd-Warshall
//!
//! ## Usage
//!
//! ```
//! use grapes_adapters::plugins::algorithms::{component_sizes, dijkstra};
//! use grapes_common::NodeId;
//! use grapes_core::GraphStore;
//!
//! let mut store = GraphStore::with_nodes(false, 4)?;
//! store.add_edge(NodeId::new(0), NodeId::new(1), 2.0)?;
//! store.add_edge(NodeId::new(1), NodeId::new(2), 3.0)?;
//!
//! let paths = dijkstra(&store, &[NodeId::new(0)])?;
//! assert_eq!(paths.distance(NodeId::new(2)), 5.0);
//!
//! let mut sizes = component_sizes(&store)?;
//! sizes.sort_unstable();
//! assert_eq!(sizes, vec![1, 3]);
//! # Ok::<(), grapes_common::Error>(())
//! ```

mod components;
mod shortest_path;
mod traits;

// Core traits
pub use traits::{GraphAlgorithm, Outcome};

// Component algorithms
pub use components::{component_sizes, is_bipartite, is_connected};

// Shortest path algorithms
pub use shortest_path::{
    AllPairsPaths, ShortestPaths, bellman_ford, bellman_ford_into, dijkstra, dijkstra_into,
    floyd_warshall,
};

// Algorithm wrappers
pub use components::{BipartiteAlgorithm, ComponentSizesAlgorithm};
pub use shortest_path::{BellmanFordAlgorithm, DijkstraAlgorithm, FloydWarshallAlgorithm};
