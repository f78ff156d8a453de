//! Construction-time settings for [`GraphStore`](super::GraphStore).

/// Configuration for a graph store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Whether edges are one-way arcs.
    pub directed: bool,
    /// Live nodes created up front, numbered `0..initial_node_count`.
    pub initial_node_count: usize,
    /// Extra node slots reserved beyond the initial nodes.
    pub initial_node_capacity: usize,
    /// Arc capacity reserved for each node when it goes live.
    pub initial_arc_capacity: usize,
}

impl GraphConfig {
    /// Configuration for an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    /// Configuration for an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::default()
    }

    /// Sets the number of nodes created up front.
    #[must_use]
    pub fn with_node_count(mut self, count: usize) -> Self {
        self.initial_node_count = count;
        self
    }

    /// Sets the number of extra node slots to reserve.
    #[must_use]
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.initial_node_capacity = capacity;
        self
    }

    /// Sets the per-node arc capacity.
    #[must_use]
    pub fn with_arc_capacity(mut self, capacity: usize) -> Self {
        self.initial_arc_capacity = capacity;
        self
    }
}
