//! Weighted multigraph store with tombstoned node removal.

use grapes_common::types::NodeId;
use grapes_common::utils::error::{Error, Result};
use grapes_common::utils::growth::capacity_for;
use serde::Serialize;
use tracing::debug;

use super::{GraphConfig, NodeSlot};
use crate::index::adjacency::AdjacencyList;

/// Summary counters for a [`GraphStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Whether edges are one-way arcs.
    pub directed: bool,
    /// Live nodes.
    pub node_count: usize,
    /// Logical edges.
    pub edge_count: usize,
    /// Stored arcs (two per undirected edge).
    pub arc_count: usize,
    /// One past the highest node index ever handed out.
    pub node_end: usize,
    /// Removed nodes.
    pub tombstones: usize,
    /// Allocated node slots.
    pub slot_capacity: usize,
    /// Reserved arc slots summed over live nodes.
    pub arc_capacity: usize,
}

/// A mutable weighted multigraph.
///
/// Nodes are numbered densely in creation order. Removing a node tombstones
/// its index instead of compacting, so the ids of surviving nodes stay valid.
/// Parallel edges and self-loops are allowed. An undirected edge is stored as
/// two arcs of equal weight, one in each endpoint's list; an undirected
/// self-loop is two arcs in the same list.
///
/// # Example
///
/// ```
/// use grapes_common::NodeId;
/// use grapes_core::GraphStore;
///
/// let mut graph = GraphStore::with_nodes(false, 3)?;
/// let (a, b, c) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));
/// graph.add_edge(a, b, 1.5)?;
/// graph.add_edge(b, c, 2.0)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.degree(b)?, 2);
///
/// graph.remove_node(b)?;
/// assert_eq!(graph.edge_count(), 0);
/// assert!(!graph.is_live(b));
/// # Ok::<(), grapes_common::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// Whether edges are one-way arcs.
    directed: bool,
    /// Arc capacity given to each node when it goes live.
    arc_capacity: usize,
    /// One slot per index; `slots.len()` is the node capacity.
    slots: Vec<NodeSlot>,
    /// Next index to hand out.
    node_end: usize,
    /// Live nodes.
    node_count: usize,
    /// Logical edges.
    edge_count: usize,
}

fn out_of_range(u: NodeId, node_end: usize) -> Error {
    Error::InvalidArgument(format!("node {u} is out of range (node_end is {node_end})"))
}

fn removed(u: NodeId) -> Error {
    Error::InvalidArgument(format!("node {u} has been removed"))
}

impl GraphStore {
    /// Creates an empty graph without allocating.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            arc_capacity: 0,
            slots: Vec::new(),
            node_end: 0,
            node_count: 0,
            edge_count: 0,
        }
    }

    /// Creates a graph with `node_count` isolated nodes numbered
    /// `0..node_count`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the node table cannot be allocated.
    pub fn with_nodes(directed: bool, node_count: usize) -> Result<Self> {
        Self::with_config(GraphConfig {
            directed,
            initial_node_count: node_count,
            ..GraphConfig::default()
        })
    }

    /// Creates a graph from a [`GraphConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the requested slot count
    /// overflows, or [`Error::OutOfMemory`] if it cannot be allocated.
    pub fn with_config(config: GraphConfig) -> Result<Self> {
        let mut store = Self {
            arc_capacity: config.initial_arc_capacity,
            ..Self::new(config.directed)
        };

        let slots = config
            .initial_node_count
            .checked_add(config.initial_node_capacity)
            .ok_or_else(|| Error::InvalidArgument("node capacity overflows".to_string()))?;
        store.slots.try_reserve_exact(slots)?;
        store.slots.resize_with(slots, NodeSlot::default);

        for _ in 0..config.initial_node_count {
            store.add_node()?;
        }
        Ok(store)
    }

    // === Node Operations ===

    /// Adds an isolated node and returns its id.
    ///
    /// Ids are handed out in increasing order and never reused.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the node table or the node's
    /// adjacency list cannot be allocated. The store is unchanged on failure.
    pub fn add_node(&mut self) -> Result<NodeId> {
        if self.node_end == self.slots.len() {
            self.grow_slots(self.node_end + 1)?;
        }
        let list = AdjacencyList::with_capacity(self.arc_capacity)?;

        let id = NodeId::new(self.node_end);
        self.slots[self.node_end] = NodeSlot::Live(list);
        self.node_end += 1;
        self.node_count += 1;
        Ok(id)
    }

    fn grow_slots(&mut self, required: usize) -> Result<()> {
        let old = self.slots.len();
        let capacity = capacity_for(old, required);
        self.slots.try_reserve_exact(capacity - old)?;
        self.slots.resize_with(capacity, NodeSlot::default);
        debug!(old, capacity, "grew node slots");
        Ok(())
    }

    /// Removes a node and every arc incident to it.
    ///
    /// Every parallel arc is removed, in both directions. The node's index
    /// becomes a tombstone and is not handed out again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `u` is out of range or was
    /// already removed.
    pub fn remove_node(&mut self, u: NodeId) -> Result<()> {
        let node_end = self.node_end;
        let slot = self
            .slots
            .get_mut(u.index())
            .ok_or_else(|| out_of_range(u, node_end))?;
        let list = match std::mem::replace(slot, NodeSlot::Tombstoned) {
            NodeSlot::Live(list) => list,
            NodeSlot::Tombstoned => return Err(removed(u)),
            NodeSlot::Reserved => {
                *slot = NodeSlot::Reserved;
                return Err(out_of_range(u, node_end));
            }
        };

        let self_arcs = list.count(u);
        let outgoing = list.len() - self_arcs;
        drop(list);

        let mut incoming = 0;
        for slot in &mut self.slots[..node_end] {
            if let Some(other) = slot.adjacency_mut() {
                incoming += other.remove_all(u);
            }
        }

        let destroyed = if self.directed {
            outgoing + self_arcs + incoming
        } else {
            outgoing + self_arcs / 2
        };
        self.node_count -= 1;
        self.edge_count -= destroyed;
        debug!(node = %u, destroyed, "removed node");
        Ok(())
    }

    // === Edge Operations ===

    /// Adds an edge `u -> v` with the given weight.
    ///
    /// Undirected graphs store the edge as two arcs. Parallel edges and
    /// self-loops are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either endpoint is not a live
    /// node, or [`Error::OutOfMemory`] if an adjacency list cannot grow. All
    /// buffers are reserved before any arc is written.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<()> {
        self.list(u)?;
        self.list(v)?;

        if self.directed {
            self.list_mut(u)?.push(v, weight)?;
        } else if u == v {
            let list = self.list_mut(u)?;
            list.reserve(2)?;
            list.push(u, weight)?;
            list.push(u, weight)?;
        } else {
            self.list_mut(u)?.reserve(1)?;
            self.list_mut(v)?.reserve(1)?;
            self.list_mut(u)?.push(v, weight)?;
            self.list_mut(v)?.push(u, weight)?;
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Adds an edge of weight 1.0.
    ///
    /// # Errors
    ///
    /// See [`add_edge`](Self::add_edge).
    pub fn add_unit_edge(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        self.add_edge(u, v, 1.0)
    }

    /// Removes one edge `u -> v`.
    ///
    /// For undirected graphs the mirror arc with the same weight is removed
    /// too. When several parallel edges exist, which one goes is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either endpoint is not a live
    /// node, or [`Error::NotFound`] if there is no such edge. Nothing is
    /// removed unless every arc of the edge was found.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> Result<()> {
        self.list(u)?;
        self.list(v)?;
        let missing = move || Error::NotFound(format!("edge {u} -> {v}"));

        if self.directed {
            let list = self.list_mut(u)?;
            let pos = list.position(v).ok_or_else(missing)?;
            list.swap_remove(pos);
        } else if u == v {
            let list = self.list_mut(u)?;
            let first = list.position(u).ok_or_else(missing)?;
            let weight = list.weights()[first];
            let second = list
                .position_of(u, weight, Some(first))
                .ok_or_else(missing)?;
            // Higher index first so the lower one is not moved.
            list.swap_remove(first.max(second));
            list.swap_remove(first.min(second));
        } else {
            let forward_list = self.list(u)?;
            let forward = forward_list.position(v).ok_or_else(missing)?;
            let weight = forward_list.weights()[forward];
            let mirror = self
                .list(v)?
                .position_of(u, weight, None)
                .ok_or_else(missing)?;
            self.list_mut(u)?.swap_remove(forward);
            self.list_mut(v)?.swap_remove(mirror);
        }
        self.edge_count -= 1;
        Ok(())
    }

    /// Returns true if at least one edge `u -> v` exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either endpoint is not a live
    /// node.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> Result<bool> {
        self.list(v)?;
        Ok(self.list(u)?.position(v).is_some())
    }

    // === Accessors ===

    fn list(&self, u: NodeId) -> Result<&AdjacencyList> {
        match self.slots.get(u.index()) {
            Some(NodeSlot::Live(list)) => Ok(list),
            Some(NodeSlot::Tombstoned) => Err(removed(u)),
            _ => Err(out_of_range(u, self.node_end)),
        }
    }

    fn list_mut(&mut self, u: NodeId) -> Result<&mut AdjacencyList> {
        let node_end = self.node_end;
        match self.slots.get_mut(u.index()) {
            Some(NodeSlot::Live(list)) => Ok(list),
            Some(NodeSlot::Tombstoned) => Err(removed(u)),
            _ => Err(out_of_range(u, node_end)),
        }
    }

    /// Whether edges are one-way arcs.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of logical edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of stored arcs.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        if self.directed {
            self.edge_count
        } else {
            2 * self.edge_count
        }
    }

    /// One past the highest node index ever handed out. Result buffers of
    /// the algorithms are sized to this.
    #[must_use]
    pub fn node_end(&self) -> usize {
        self.node_end
    }

    /// Number of allocated node slots.
    #[must_use]
    pub fn node_capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if `u` is a live node.
    #[must_use]
    pub fn is_live(&self, u: NodeId) -> bool {
        self.slots.get(u.index()).is_some_and(NodeSlot::is_live)
    }

    /// The state of slot `u`, or `None` past the node capacity.
    #[must_use]
    pub fn slot(&self, u: NodeId) -> Option<&NodeSlot> {
        self.slots.get(u.index())
    }

    /// Outgoing arcs of `u`, or `None` if `u` is not live.
    #[must_use]
    pub fn adjacency(&self, u: NodeId) -> Option<&AdjacencyList> {
        self.slots.get(u.index()).and_then(NodeSlot::adjacency)
    }

    /// Live nodes with their adjacency lists, in index order.
    pub fn adjacency_lists(&self) -> impl Iterator<Item = (NodeId, &AdjacencyList)> + '_ {
        self.slots[..self.node_end]
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.adjacency().map(|list| (NodeId::new(i), list)))
    }

    /// Live node ids in index order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency_lists().map(|(u, _)| u)
    }

    /// Outgoing `(target, weight)` arcs of `u`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `u` is not a live node.
    pub fn neighbors(&self, u: NodeId) -> Result<impl Iterator<Item = (NodeId, f64)> + '_> {
        Ok(self.list(u)?.iter())
    }

    /// Number of arcs leaving `u`. An undirected self-loop counts twice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `u` is not a live node.
    pub fn degree(&self, u: NodeId) -> Result<usize> {
        Ok(self.list(u)?.len())
    }

    /// Every logical edge as `(source, target, weight)`.
    ///
    /// Undirected edges are reported once with `source <= target`; each
    /// undirected self-loop is reported once.
    #[must_use]
    pub fn edges(&self) -> Vec<(NodeId, NodeId, f64)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (u, list) in self.adjacency_lists() {
            if self.directed {
                edges.extend(list.iter().map(|(v, w)| (u, v, w)));
                continue;
            }

            edges.extend(
                list.iter()
                    .filter(|&(v, _)| u < v)
                    .map(|(v, w)| (u, v, w)),
            );

            // Self-loop arcs come in equal-weight pairs; keep one of each.
            let mut loops: Vec<f64> = list
                .iter()
                .filter(|&(v, _)| v == u)
                .map(|(_, w)| w)
                .collect();
            loops.sort_by(f64::total_cmp);
            edges.extend(loops.iter().step_by(2).map(|&w| (u, u, w)));
        }
        edges
    }

    /// Returns true if any arc has a negative weight.
    #[must_use]
    pub fn has_negative_weight(&self) -> bool {
        self.adjacency_lists()
            .any(|(_, list)| list.weights().iter().any(|&w| w < 0.0))
    }

    /// Summary counters.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let arc_capacity = self
            .adjacency_lists()
            .map(|(_, list)| list.capacity())
            .sum();
        GraphStats {
            directed: self.directed,
            node_count: self.node_count,
            edge_count: self.edge_count,
            arc_count: self.arc_count(),
            node_end: self.node_end,
            tombstones: self.node_end - self.node_count,
            slot_capacity: self.slots.len(),
            arc_capacity,
        }
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    fn sorted_edges(store: &GraphStore) -> Vec<(usize, usize, f64)> {
        let mut edges: Vec<_> = store
            .edges()
            .into_iter()
            .map(|(u, v, w)| (u.index(), v.index(), w))
            .collect();
        edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)).then(a.2.total_cmp(&b.2)));
        edges
    }

    #[test]
    fn test_empty_store() {
        let store = GraphStore::new(true);
        assert!(store.is_directed());
        assert_eq!(store.node_count(), 0);
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.node_end(), 0);
        assert_eq!(store.nodes().count(), 0);
        assert!(store.edges().is_empty());
    }

    #[test]
    fn test_with_nodes() {
        let store = GraphStore::with_nodes(false, 5).unwrap();
        assert_eq!(store.node_count(), 5);
        assert_eq!(store.node_end(), 5);
        assert_eq!(store.nodes().collect::<Vec<_>>(), (0..5).map(n).collect::<Vec<_>>());
        for u in store.nodes() {
            assert_eq!(store.degree(u).unwrap(), 0);
        }
    }

    #[test]
    fn test_with_config_reserves_slots() {
        let config = GraphConfig::directed()
            .with_node_count(2)
            .with_node_capacity(6)
            .with_arc_capacity(3);
        let store = GraphStore::with_config(config).unwrap();
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.node_capacity(), 8);
        assert!(matches!(store.slot(n(5)), Some(NodeSlot::Reserved)));
        assert_eq!(store.adjacency(n(0)).unwrap().capacity(), 3);
        assert_eq!(store.stats().arc_capacity, 6);
    }

    #[test]
    fn test_add_node_grows_slots() {
        let mut store = GraphStore::new(false);
        assert_eq!(store.add_node().unwrap(), n(0));
        assert_eq!(store.node_capacity(), 4);
        for i in 1..5 {
            assert_eq!(store.add_node().unwrap(), n(i));
        }
        assert_eq!(store.node_capacity(), 8);
        assert_eq!(store.node_count(), 5);
    }

    #[test]
    fn test_undirected_edge_stores_mirror_arcs() {
        let mut store = GraphStore::with_nodes(false, 3).unwrap();
        store.add_edge(n(0), n(1), 2.5).unwrap();

        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.arc_count(), 2);
        assert_eq!(store.neighbors(n(0)).unwrap().collect::<Vec<_>>(), vec![(n(1), 2.5)]);
        assert_eq!(store.neighbors(n(1)).unwrap().collect::<Vec<_>>(), vec![(n(0), 2.5)]);
        assert!(store.has_edge(n(1), n(0)).unwrap());
        assert_eq!(sorted_edges(&store), vec![(0, 1, 2.5)]);
    }

    #[test]
    fn test_directed_edge_is_one_arc() {
        let mut store = GraphStore::with_nodes(true, 2).unwrap();
        store.add_unit_edge(n(1), n(0)).unwrap();

        assert_eq!(store.arc_count(), 1);
        assert_eq!(store.degree(n(1)).unwrap(), 1);
        assert_eq!(store.degree(n(0)).unwrap(), 0);
        assert!(!store.has_edge(n(0), n(1)).unwrap());
        assert_eq!(sorted_edges(&store), vec![(1, 0, 1.0)]);
    }

    #[test]
    fn test_add_edge_rejects_invalid_endpoints() {
        let mut store = GraphStore::with_nodes(false, 3).unwrap();
        store.remove_node(n(2)).unwrap();

        for (u, v) in [(n(0), n(7)), (n(7), n(0)), (n(0), n(2)), (n(2), n(2))] {
            let err = store.add_edge(u, v, 1.0).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        }
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.degree(n(0)).unwrap(), 0);
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut store = GraphStore::with_nodes(false, 2).unwrap();
        store.add_edge(n(0), n(0), 3.0).unwrap();
        store.add_edge(n(0), n(1), 1.0).unwrap();

        assert_eq!(store.edge_count(), 2);
        assert_eq!(store.degree(n(0)).unwrap(), 3);
        assert_eq!(sorted_edges(&store), vec![(0, 0, 3.0), (0, 1, 1.0)]);

        store.remove_edge(n(0), n(0)).unwrap();
        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.degree(n(0)).unwrap(), 1);
        assert!(matches!(
            store.remove_edge(n(0), n(0)),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_self_loops_with_different_weights() {
        let mut store = GraphStore::with_nodes(false, 1).unwrap();
        store.add_edge(n(0), n(0), 1.0).unwrap();
        store.add_edge(n(0), n(0), 2.0).unwrap();
        store.add_edge(n(0), n(0), 1.0).unwrap();

        assert_eq!(sorted_edges(&store), vec![(0, 0, 1.0), (0, 0, 1.0), (0, 0, 2.0)]);
        store.remove_edge(n(0), n(0)).unwrap();
        assert_eq!(store.edges().len(), 2);
        assert_eq!(store.degree(n(0)).unwrap(), 4);
    }

    #[test]
    fn test_remove_edge_keeps_mirror_weights_paired() {
        let mut store = GraphStore::with_nodes(false, 3).unwrap();
        store.add_edge(n(0), n(1), 1.0).unwrap();
        store.add_edge(n(0), n(2), 9.0).unwrap();
        store.add_edge(n(1), n(0), 2.0).unwrap();

        store.remove_edge(n(1), n(0)).unwrap();
        let remaining = sorted_edges(&store);
        assert_eq!(remaining.len(), 2);

        // Whatever parallel edge went, both directions still agree.
        let forward: Vec<f64> = store
            .neighbors(n(0))
            .unwrap()
            .filter(|&(v, _)| v == n(1))
            .map(|(_, w)| w)
            .collect();
        let backward: Vec<f64> = store
            .neighbors(n(1))
            .unwrap()
            .filter(|&(v, _)| v == n(0))
            .map(|(_, w)| w)
            .collect();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_remove_edge_not_found() {
        let mut store = GraphStore::with_nodes(true, 2).unwrap();
        store.add_edge(n(0), n(1), 1.0).unwrap();

        assert!(matches!(store.remove_edge(n(1), n(0)), Err(Error::NotFound(_))));
        assert!(matches!(
            store.remove_edge(n(0), n(5)),
            Err(Error::InvalidArgument(_))
        ));
        store.remove_edge(n(0), n(1)).unwrap();
        assert_eq!(store.edge_count(), 0);
        assert!(matches!(store.remove_edge(n(0), n(1)), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_remove_node_drops_all_parallel_arcs_undirected() {
        let mut store = GraphStore::with_nodes(false, 4).unwrap();
        store.add_edge(n(0), n(1), 1.0).unwrap();
        store.add_edge(n(0), n(1), 2.0).unwrap();
        store.add_edge(n(1), n(1), 3.0).unwrap();
        store.add_edge(n(1), n(2), 4.0).unwrap();
        store.add_edge(n(2), n(3), 5.0).unwrap();

        store.remove_node(n(1)).unwrap();
        assert_eq!(store.node_count(), 3);
        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.degree(n(0)).unwrap(), 0);
        assert_eq!(store.degree(n(2)).unwrap(), 1);
        assert_eq!(sorted_edges(&store), vec![(2, 3, 5.0)]);
    }

    #[test]
    fn test_remove_node_directed_counts_both_directions() {
        let mut store = GraphStore::with_nodes(true, 3).unwrap();
        store.add_edge(n(0), n(1), 1.0).unwrap();
        store.add_edge(n(0), n(1), 1.0).unwrap();
        store.add_edge(n(1), n(2), 1.0).unwrap();
        store.add_edge(n(1), n(1), 1.0).unwrap();
        store.add_edge(n(2), n(0), 1.0).unwrap();

        store.remove_node(n(1)).unwrap();
        assert_eq!(store.edge_count(), 1);
        assert_eq!(sorted_edges(&store), vec![(2, 0, 1.0)]);
    }

    #[test]
    fn test_remove_node_twice_fails() {
        let mut store = GraphStore::with_nodes(false, 2).unwrap();
        store.remove_node(n(0)).unwrap();

        assert!(matches!(store.remove_node(n(0)), Err(Error::InvalidArgument(_))));
        assert!(matches!(store.remove_node(n(9)), Err(Error::InvalidArgument(_))));
        assert!(matches!(store.degree(n(0)), Err(Error::InvalidArgument(_))));
        assert!(store.slot(n(0)).is_some_and(NodeSlot::is_tombstoned));
    }

    #[test]
    fn test_reserved_slot_is_not_a_node() {
        let mut store = GraphStore::new(false);
        store.add_node().unwrap();
        assert_eq!(store.node_capacity(), 4);
        assert!(!store.is_live(n(2)));
        assert!(matches!(store.remove_node(n(2)), Err(Error::InvalidArgument(_))));
        assert!(matches!(store.slot(n(2)), Some(NodeSlot::Reserved)));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut store = GraphStore::with_nodes(false, 3).unwrap();
        store.remove_node(n(1)).unwrap();
        assert_eq!(store.add_node().unwrap(), n(3));
        assert_eq!(store.node_end(), 4);
        assert_eq!(store.nodes().collect::<Vec<_>>(), vec![n(0), n(2), n(3)]);
    }

    #[test]
    fn test_five_node_example_shape() {
        let mut store = GraphStore::with_nodes(false, 5).unwrap();
        for (u, v, w) in [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0), (3, 4, 1.0)] {
            store.add_edge(n(u), n(v), w).unwrap();
        }
        assert_eq!(store.edge_count(), 5);
        assert_eq!(store.degree(n(2)).unwrap(), 3);
        assert!(!store.has_negative_weight());
        assert_eq!(
            sorted_edges(&store),
            vec![(0, 1, 1.0), (0, 2, 5.0), (1, 2, 2.0), (2, 3, 1.0), (3, 4, 1.0)]
        );
    }

    #[test]
    fn test_stats() {
        let mut store = GraphStore::with_nodes(false, 3).unwrap();
        store.add_edge(n(0), n(1), -1.0).unwrap();
        store.remove_node(n(2)).unwrap();

        let stats = store.stats();
        assert_eq!(stats.node_count, 2);
        assert_eq!(stats.edge_count, 1);
        assert_eq!(stats.arc_count, 2);
        assert_eq!(stats.tombstones, 1);
        assert_eq!(stats.node_end, 3);
        assert!(store.has_negative_weight());
    }
}
