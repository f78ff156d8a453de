//! Index structures backing the graph store.

pub mod adjacency;
