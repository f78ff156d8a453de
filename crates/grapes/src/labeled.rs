//! Graphs addressed by caller-chosen node labels.

use std::fmt::Debug;
use std::hash::Hash;

use grapes_adapters::plugins::algorithms::{
    bellman_ford, component_sizes, dijkstra, floyd_warshall, is_bipartite,
};
use grapes_common::types::NodeId;
use grapes_common::utils::error::{Error, Result};
use grapes_core::GraphStore;
use hashbrown::HashMap;
use indexmap::IndexMap;
use tracing::debug;

/// Which algorithm [`LabeledGraph::shortest_path`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShortestPathAlgorithm {
    /// Bellman-Ford if any weight is negative, Dijkstra otherwise.
    #[default]
    Auto,
    /// Dijkstra; rejects graphs with negative weights.
    Dijkstra,
    /// Bellman-Ford (SPFA).
    BellmanFord,
    /// Floyd-Warshall; computes all pairs.
    FloydWarshall,
}

impl ShortestPathAlgorithm {
    /// Human-readable name, as used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Dijkstra => "Dijkstra",
            Self::BellmanFord => "Bellman-Ford",
            Self::FloydWarshall => "Floyd-Warshall",
        }
    }

    /// Replaces `Auto` with the algorithm it picks for `graph`.
    #[must_use]
    pub fn resolve(self, graph: &GraphStore) -> Self {
        match self {
            Self::Auto if graph.has_negative_weight() => Self::BellmanFord,
            Self::Auto => Self::Dijkstra,
            other => other,
        }
    }
}

/// A multigraph whose nodes are addressed by labels of type `L`.
///
/// Labels map one-to-one onto the [`NodeId`]s of an underlying
/// [`GraphStore`]. A *simple* graph additionally rejects self-loops and
/// parallel edges; in an undirected simple graph `{u, v}` and `{v, u}` are
/// the same edge.
///
/// # Example
///
/// ```
/// use grapes::{Error, LabeledGraph};
///
/// let mut graph = LabeledGraph::simple(false);
/// graph.add_node('a')?;
/// graph.add_node('b')?;
/// graph.add_edge(&'a', &'b', 1.0)?;
///
/// assert_eq!(graph.add_edge(&'b', &'a', 2.0), Err(Error::DuplicateEdge("'b'".into(), "'a'".into())));
/// assert!(matches!(graph.add_edge(&'a', &'z', 1.0), Err(Error::MissingNode(_))));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LabeledGraph<L> {
    graph: GraphStore,
    simple: bool,
    /// Label to id, in insertion order.
    ids: IndexMap<L, NodeId>,
    /// Id to label.
    labels: HashMap<NodeId, L>,
}

fn quoted<L: Debug>(label: &L) -> String {
    format!("{label:?}")
}

impl<L: Hash + Eq + Clone + Debug> LabeledGraph<L> {
    /// Creates an empty multigraph.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            graph: GraphStore::new(directed),
            simple: false,
            ids: IndexMap::new(),
            labels: HashMap::new(),
        }
    }

    /// Creates an empty simple graph.
    #[must_use]
    pub fn simple(directed: bool) -> Self {
        Self {
            simple: true,
            ..Self::new(directed)
        }
    }

    /// Creates the complete simple graph on `labels`, in the given order.
    ///
    /// Every pair of distinct nodes is joined by an edge of weight 1.0; a
    /// directed graph gets both arcs. `n` labels give `n * (n - 1) / 2`
    /// undirected edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `labels` is empty, or
    /// [`Error::DuplicateNode`] if a label repeats.
    pub fn complete(labels: impl IntoIterator<Item = L>, directed: bool) -> Result<Self> {
        let mut graph = Self::simple(directed);
        for label in labels {
            graph.add_node(label)?;
        }
        if graph.node_count() == 0 {
            return Err(Error::InvalidArgument(
                "complete graph needs at least one node".to_string(),
            ));
        }

        let ids: Vec<NodeId> = graph.ids.values().copied().collect();
        for (i, &u) in ids.iter().enumerate() {
            for &v in &ids[i + 1..] {
                graph.graph.add_unit_edge(u, v)?;
                if directed {
                    graph.graph.add_unit_edge(v, u)?;
                }
            }
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built complete graph"
        );
        Ok(graph)
    }

    /// Whether edges are one-way.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    /// Whether self-loops and parallel edges are rejected.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.simple
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if a node carries `label`.
    #[must_use]
    pub fn contains(&self, label: &L) -> bool {
        self.ids.contains_key(label)
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &GraphStore {
        &self.graph
    }

    /// Id of the node carrying `label`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNode`] if no node carries `label`.
    pub fn id(&self, label: &L) -> Result<NodeId> {
        self.ids
            .get(label)
            .copied()
            .ok_or_else(|| Error::MissingNode(quoted(label)))
    }

    /// Label of node `id`.
    #[must_use]
    pub fn label(&self, id: NodeId) -> Option<&L> {
        self.labels.get(&id)
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &L> + '_ {
        self.ids.keys()
    }

    /// Every edge as `(source, target, weight)`.
    ///
    /// Undirected edges are reported once, with the earlier-inserted node
    /// first.
    #[must_use]
    pub fn edges(&self) -> Vec<(&L, &L, f64)> {
        self.graph
            .edges()
            .into_iter()
            .filter_map(|(u, v, w)| Some((self.labels.get(&u)?, self.labels.get(&v)?, w)))
            .collect()
    }

    /// Number of arcs leaving `label`'s node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNode`] if no node carries `label`.
    pub fn degree(&self, label: &L) -> Result<usize> {
        self.graph.degree(self.id(label)?)
    }

    /// Outgoing neighbors of `label`'s node with arc weights.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNode`] if no node carries `label`.
    pub fn neighbors(&self, label: &L) -> Result<Vec<(&L, f64)>> {
        Ok(self
            .graph
            .neighbors(self.id(label)?)?
            .filter_map(|(v, w)| Some((self.labels.get(&v)?, w)))
            .collect())
    }

    // === Mutation ===

    /// Adds a node carrying `label`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if the label is taken.
    pub fn add_node(&mut self, label: L) -> Result<()> {
        if self.ids.contains_key(&label) {
            return Err(Error::DuplicateNode(quoted(&label)));
        }
        let id = self.graph.add_node()?;
        self.labels.insert(id, label.clone());
        self.ids.insert(label, id);
        Ok(())
    }

    /// Adds an edge between two labeled nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNode`] if either label is unknown. Simple
    /// graphs return [`Error::SelfLoop`] or [`Error::DuplicateEdge`] instead
    /// of adding a loop or a parallel edge.
    pub fn add_edge(&mut self, source: &L, target: &L, weight: f64) -> Result<()> {
        let u = self.id(source)?;
        let v = self.id(target)?;
        if self.simple {
            if u == v {
                return Err(Error::SelfLoop(quoted(source)));
            }
            if self.graph.has_edge(u, v)? {
                return Err(Error::DuplicateEdge(quoted(source), quoted(target)));
            }
        }
        self.graph.add_edge(u, v, weight)
    }

    /// Removes the node carrying `label` and all its edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNode`] if no node carries `label`.
    pub fn remove_node(&mut self, label: &L) -> Result<()> {
        let id = self.id(label)?;
        self.graph.remove_node(id)?;
        self.ids.shift_remove(label);
        self.labels.remove(&id);
        Ok(())
    }

    /// Removes one edge between two labeled nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNode`] if either label is unknown, or
    /// [`Error::MissingEdge`] if they are not joined.
    pub fn remove_edge(&mut self, source: &L, target: &L) -> Result<()> {
        let u = self.id(source)?;
        let v = self.id(target)?;
        self.graph.remove_edge(u, v).map_err(|err| match err {
            Error::NotFound(_) => Error::MissingEdge(quoted(source), quoted(target)),
            other => other,
        })
    }

    // === Algorithms ===

    /// Shortest path from `source` to `target`, both inclusive.
    ///
    /// Returns `[source]` when the endpoints coincide and an empty path when
    /// `target` is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNode`] for an unknown label,
    /// [`Error::Precondition`] if Dijkstra is asked to run on negative
    /// weights, or [`Error::NegativeCycle`] if one is found.
    pub fn shortest_path(
        &self,
        source: &L,
        target: &L,
        algorithm: ShortestPathAlgorithm,
    ) -> Result<Vec<L>> {
        let src = self.id(source)?;
        let dst = self.id(target)?;
        if src == dst {
            return Ok(vec![source.clone()]);
        }

        let algorithm = algorithm.resolve(&self.graph);
        debug!(algorithm = algorithm.name(), "shortest path");

        let path = match algorithm {
            ShortestPathAlgorithm::Dijkstra | ShortestPathAlgorithm::Auto => {
                if self.graph.has_negative_weight() {
                    return Err(Error::Precondition(
                        "Dijkstra requires non-negative edge weights".to_string(),
                    ));
                }
                dijkstra(&self.graph, &[src])?.path_to(dst)
            }
            ShortestPathAlgorithm::BellmanFord => bellman_ford(&self.graph, &[src])?
                .into_result(algorithm.name())?
                .path_to(dst),
            ShortestPathAlgorithm::FloydWarshall => floyd_warshall(&self.graph)?
                .into_result(algorithm.name())?
                .path(src, dst),
        };

        Ok(path
            .unwrap_or_default()
            .into_iter()
            .filter_map(|id| self.labels.get(&id).cloned())
            .collect())
    }

    /// Sizes of the connected components, in order of their first-inserted
    /// node.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures.
    pub fn component_sizes(&self) -> Result<Vec<usize>> {
        component_sizes(&self.graph)
    }

    /// Returns true if the graph has exactly one component.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures.
    pub fn is_connected(&self) -> Result<bool> {
        Ok(self.component_sizes()?.len() == 1)
    }

    /// Returns true if the graph is two-colorable.
    ///
    /// # Errors
    ///
    /// Propagates allocation failures.
    pub fn is_bipartite(&self) -> Result<bool> {
        is_bipartite(&self.graph)
    }
}

impl<L: Hash + Eq + Clone + Debug> Default for LabeledGraph<L> {
    fn default() -> Self {
        Self::new(false)
    }
}
