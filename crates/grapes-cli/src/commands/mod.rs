//! CLI command implementations.

pub mod all_pairs;
pub mod bipartite;
pub mod components;
pub mod distances;
pub mod info;
pub mod path;
