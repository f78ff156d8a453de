//! Shortest-path algorithms.
//!
//! - Multi-source Dijkstra over a lazy-deletion [`MinHeap`]
//! - Multi-source Bellman-Ford in its SPFA form, ordered by the
//!   Small-Label-First rule on a [`Deque`]
//! - All-pairs Floyd-Warshall with path reconstruction
//!
//! Result buffers are indexed by node id and sized to the store's
//! `node_end`, so removed nodes keep their slots (unreachable, no
//! predecessor). A source is its own predecessor.

use grapes_common::types::NodeId;
use grapes_common::utils::error::{Error, Result};
use grapes_core::{Deque, GraphStore, MinHeap};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::traits::{GraphAlgorithm, Outcome};

/// Name reported by Dijkstra's algorithm.
pub(crate) const DIJKSTRA: &str = "Dijkstra";
/// Name reported by Bellman-Ford.
pub(crate) const BELLMAN_FORD: &str = "Bellman-Ford";
/// Name reported by Floyd-Warshall.
pub(crate) const FLOYD_WARSHALL: &str = "Floyd-Warshall";

// ============================================================================
// Single-source results
// ============================================================================

/// Distances and predecessors from a set of sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortestPaths {
    /// Distance per node; `f64::INFINITY` when unreachable.
    pub distances: Vec<f64>,
    /// Predecessor per node on a shortest path; a source points to itself.
    pub predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    /// Creates empty buffers to be filled by [`dijkstra_into`] or
    /// [`bellman_ford_into`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets both buffers to `len` unreachable entries, reusing their
    /// allocation.
    fn reset(&mut self, len: usize) -> Result<()> {
        self.distances.clear();
        self.predecessors.clear();
        self.distances.try_reserve_exact(len)?;
        self.predecessors.try_reserve_exact(len)?;
        self.distances.resize(len, f64::INFINITY);
        self.predecessors.resize(len, None);
        Ok(())
    }

    /// Number of node slots covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if no slots are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `v`; infinite if unreachable or out of range.
    #[must_use]
    pub fn distance(&self, v: NodeId) -> f64 {
        self.distances
            .get(v.index())
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Predecessor of `v` on a shortest path.
    #[must_use]
    pub fn predecessor(&self, v: NodeId) -> Option<NodeId> {
        self.predecessors.get(v.index()).copied().flatten()
    }

    /// Returns true if some source reaches `v`.
    #[must_use]
    pub fn is_reachable(&self, v: NodeId) -> bool {
        self.predecessor(v).is_some()
    }

    /// Shortest path from the nearest source to `target`, both inclusive.
    ///
    /// Returns `None` if `target` is unreachable.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        let mut path = vec![target];
        let mut node = target;
        loop {
            let pred = self.predecessor(node)?;
            if pred == node {
                break;
            }
            if path.len() > self.predecessors.len() {
                return None;
            }
            path.push(pred);
            node = pred;
        }
        path.reverse();
        Some(path)
    }
}

fn check_sources(store: &GraphStore, sources: &[NodeId]) -> Result<()> {
    match sources.iter().find(|&&s| !store.is_live(s)) {
        Some(s) => Err(Error::InvalidArgument(format!(
            "source {s} is not a live node"
        ))),
        None => Ok(()),
    }
}

// ============================================================================
// Dijkstra's Algorithm
// ============================================================================

/// Multi-source Dijkstra.
///
/// Every source starts at distance 0. Weights are assumed non-negative;
/// negative weights are not detected and give unspecified distances.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a source is not a live node.
///
/// # Example
///
/// ```
/// use grapes_adapters::plugins::algorithms::dijkstra;
/// use grapes_common::NodeId;
/// use grapes_core::GraphStore;
///
/// let mut store = GraphStore::with_nodes(true, 3)?;
/// store.add_edge(NodeId::new(0), NodeId::new(1), 1.0)?;
/// store.add_edge(NodeId::new(1), NodeId::new(2), 1.0)?;
/// store.add_edge(NodeId::new(0), NodeId::new(2), 5.0)?;
///
/// let paths = dijkstra(&store, &[NodeId::new(0)])?;
/// assert_eq!(paths.distance(NodeId::new(2)), 2.0);
/// assert_eq!(paths.predecessor(NodeId::new(2)), Some(NodeId::new(1)));
/// # Ok::<(), grapes_common::Error>(())
/// ```
pub fn dijkstra(store: &GraphStore, sources: &[NodeId]) -> Result<ShortestPaths> {
    let mut paths = ShortestPaths::new();
    dijkstra_into(store, sources, &mut paths)?;
    Ok(paths)
}

/// Multi-source Dijkstra writing into caller-provided buffers.
///
/// `paths` is resized to the store's `node_end` and overwritten.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a source is not a live node, or an
/// allocation error if a scratch buffer cannot be reserved.
pub fn dijkstra_into(
    store: &GraphStore,
    sources: &[NodeId],
    paths: &mut ShortestPaths,
) -> Result<()> {
    check_sources(store, sources)?;
    let n = store.node_end();
    paths.reset(n)?;

    // Each arc is relaxed at most once, after its tail is settled, so the
    // heap never holds more than one entry per arc plus the sources.
    let mut heap = MinHeap::with_capacity(store.arc_count() + sources.len(), sources.len())?;
    let mut settled = vec![false; n];
    let mut settled_count = 0;

    for &s in sources {
        paths.distances[s.index()] = 0.0;
        paths.predecessors[s.index()] = Some(s);
        heap.insert(s, 0.0)?;
    }

    while let Ok(u) = heap.extract_min() {
        if settled[u.index()] {
            continue;
        }
        settled[u.index()] = true;
        settled_count += 1;

        let Some(arcs) = store.adjacency(u) else {
            continue;
        };
        let du = paths.distances[u.index()];
        for (v, weight) in arcs.iter() {
            let alt = du + weight;
            if alt < paths.distances[v.index()] {
                paths.distances[v.index()] = alt;
                paths.predecessors[v.index()] = Some(u);
                heap.insert(v, alt)?;
            }
        }
    }

    trace!(sources = sources.len(), settled = settled_count, "dijkstra finished");
    Ok(())
}

// ============================================================================
// Bellman-Ford Algorithm
// ============================================================================

/// Multi-source Bellman-Ford (SPFA with Small-Label-First).
///
/// Handles negative weights. Returns [`Outcome::NegativeCycle`] if a
/// negative-weight cycle is reachable from the sources.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a source is not a live node.
pub fn bellman_ford(store: &GraphStore, sources: &[NodeId]) -> Result<Outcome<ShortestPaths>> {
    let mut paths = ShortestPaths::new();
    Ok(bellman_ford_into(store, sources, &mut paths)?.map(|()| paths))
}

/// Multi-source Bellman-Ford writing into caller-provided buffers.
///
/// A node is re-queued only if it is not already queued. It goes to the
/// front of the queue when its new distance is smaller than the distance of
/// the node currently at the front, otherwise to the back.
///
/// Each node also carries a relaxation depth: the number of arcs in the walk
/// that produced its current distance. Without a negative cycle that walk
/// never revisits a node, so a depth reaching `node_end` certifies one. The
/// certificate holds for any queue order. On a negative cycle the contents
/// of `paths` are unspecified.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a source is not a live node.
pub fn bellman_ford_into(
    store: &GraphStore,
    sources: &[NodeId],
    paths: &mut ShortestPaths,
) -> Result<Outcome<()>> {
    check_sources(store, sources)?;
    let n = store.node_end();
    paths.reset(n)?;

    let mut queued = vec![false; n];
    let mut depth = vec![0usize; n];
    let mut queue = Deque::with_capacity(n);
    let mut relaxations = 0usize;

    for &s in sources {
        paths.distances[s.index()] = 0.0;
        paths.predecessors[s.index()] = Some(s);
        if !queued[s.index()] {
            queued[s.index()] = true;
            queue.push_back(s);
        }
    }

    while let Ok(u) = queue.pop_front() {
        queued[u.index()] = false;
        let Some(arcs) = store.adjacency(u) else {
            continue;
        };
        let du = paths.distances[u.index()];

        for (v, weight) in arcs.iter() {
            let alt = du + weight;
            if alt >= paths.distances[v.index()] {
                continue;
            }
            paths.distances[v.index()] = alt;
            paths.predecessors[v.index()] = Some(u);
            relaxations += 1;

            depth[v.index()] = depth[u.index()] + 1;
            if depth[v.index()] >= n {
                debug!(node = %v, relaxations, "bellman-ford certified a negative cycle");
                return Ok(Outcome::NegativeCycle);
            }

            if queued[v.index()] {
                continue;
            }
            queued[v.index()] = true;
            match queue.peek_front() {
                Ok(front) if alt < paths.distances[front.index()] => queue.push_front(v),
                _ => queue.push_back(v),
            }
        }
    }

    trace!(sources = sources.len(), relaxations, "bellman-ford converged");
    Ok(Outcome::Converged(()))
}

// ============================================================================
// Floyd-Warshall Algorithm
// ============================================================================

/// All-pairs distances and predecessors in row-major `node_end x node_end`
/// matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsPaths {
    n: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeId>>,
}

impl AllPairsPaths {
    /// Side length of the matrices (the store's `node_end`).
    #[must_use]
    pub fn node_end(&self) -> usize {
        self.n
    }

    fn cell(&self, i: NodeId, j: NodeId) -> Option<usize> {
        (i.index() < self.n && j.index() < self.n).then(|| i.index() * self.n + j.index())
    }

    /// Distance from `i` to `j`; infinite if unreachable or out of range.
    #[must_use]
    pub fn distance(&self, i: NodeId, j: NodeId) -> f64 {
        self.cell(i, j)
            .map_or(f64::INFINITY, |cell| self.distances[cell])
    }

    /// Predecessor of `j` on a shortest path from `i`.
    #[must_use]
    pub fn predecessor(&self, i: NodeId, j: NodeId) -> Option<NodeId> {
        self.cell(i, j).and_then(|cell| self.predecessors[cell])
    }

    /// Row `i` of the distance matrix.
    #[must_use]
    pub fn row(&self, i: NodeId) -> &[f64] {
        let start = (i.index() * self.n).min(self.distances.len());
        let end = (start + self.n).min(self.distances.len());
        &self.distances[start..end]
    }

    /// Shortest path from `i` to `j`, both inclusive.
    ///
    /// Returns `None` if `j` is unreachable from `i`.
    #[must_use]
    pub fn path(&self, i: NodeId, j: NodeId) -> Option<Vec<NodeId>> {
        if !self.distance(i, j).is_finite() {
            return None;
        }
        let mut path = vec![j];
        let mut node = j;
        while node != i {
            node = self.predecessor(i, node)?;
            path.push(node);
            if path.len() > self.n {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// All-pairs shortest paths.
///
/// Parallel arcs seed the matrix with their minimum weight. Returns
/// [`Outcome::NegativeCycle`] if any node ends up with a negative distance
/// to itself. Takes `O(node_end^3)` time and `O(node_end^2)` memory.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the matrix size overflows, or
/// [`Error::OutOfMemory`] if it cannot be allocated.
pub fn floyd_warshall(store: &GraphStore) -> Result<Outcome<AllPairsPaths>> {
    let n = store.node_end();
    let cells = n
        .checked_mul(n)
        .ok_or_else(|| Error::InvalidArgument(format!("{n} x {n} matrix overflows")))?;

    let mut distances = Vec::new();
    let mut predecessors = Vec::new();
    distances.try_reserve_exact(cells)?;
    predecessors.try_reserve_exact(cells)?;
    distances.resize(cells, f64::INFINITY);
    predecessors.resize(cells, None);

    for u in store.nodes() {
        let diagonal = u.index() * n + u.index();
        distances[diagonal] = 0.0;
        predecessors[diagonal] = Some(u);
    }
    for (u, arcs) in store.adjacency_lists() {
        let row = u.index() * n;
        for (v, weight) in arcs.iter() {
            let cell = row + v.index();
            if weight < distances[cell] {
                distances[cell] = weight;
                predecessors[cell] = Some(u);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dik = distances[i * n + k];
            if dik == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let alt = dik + distances[k * n + j];
                if alt < distances[i * n + j] {
                    distances[i * n + j] = alt;
                    predecessors[i * n + j] = predecessors[k * n + j];
                }
            }
        }
    }

    if (0..n).any(|i| distances[i * n + i] < 0.0) {
        debug!(node_end = n, "floyd-warshall certified a negative cycle");
        return Ok(Outcome::NegativeCycle);
    }

    trace!(node_end = n, "floyd-warshall converged");
    Ok(Outcome::Converged(AllPairsPaths {
        n,
        distances,
        predecessors,
    }))
}

// ============================================================================
// Algorithm Wrappers
// ============================================================================

/// Dijkstra from a fixed set of sources.
#[derive(Debug, Clone, Default)]
pub struct DijkstraAlgorithm {
    sources: SmallVec<[NodeId; 4]>,
}

impl DijkstraAlgorithm {
    /// Creates the algorithm for the given sources.
    pub fn new(sources: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
        }
    }

    /// The configured sources.
    #[must_use]
    pub fn sources(&self) -> &[NodeId] {
        &self.sources
    }
}

impl GraphAlgorithm for DijkstraAlgorithm {
    type Output = ShortestPaths;

    fn name(&self) -> &'static str {
        DIJKSTRA
    }

    fn run(&self, store: &GraphStore) -> Result<ShortestPaths> {
        dijkstra(store, &self.sources)
    }
}

/// Bellman-Ford from a fixed set of sources.
#[derive(Debug, Clone, Default)]
pub struct BellmanFordAlgorithm {
    sources: SmallVec<[NodeId; 4]>,
}

impl BellmanFordAlgorithm {
    /// Creates the algorithm for the given sources.
    pub fn new(sources: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
        }
    }

    /// The configured sources.
    #[must_use]
    pub fn sources(&self) -> &[NodeId] {
        &self.sources
    }
}

impl GraphAlgorithm for BellmanFordAlgorithm {
    type Output = Outcome<ShortestPaths>;

    fn name(&self) -> &'static str {
        BELLMAN_FORD
    }

    fn run(&self, store: &GraphStore) -> Result<Outcome<ShortestPaths>> {
        bellman_ford(store, &self.sources)
    }
}

/// All-pairs Floyd-Warshall.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshallAlgorithm;

impl GraphAlgorithm for FloydWarshallAlgorithm {
    type Output = Outcome<AllPairsPaths>;

    fn name(&self) -> &'static str {
        FLOYD_WARSHALL
    }

    fn run(&self, store: &GraphStore) -> Result<Outcome<AllPairsPaths>> {
        floyd_warshall(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    fn build(directed: bool, nodes: usize, edges: &[(usize, usize, f64)]) -> GraphStore {
        let mut store = GraphStore::with_nodes(directed, nodes).unwrap();
        for &(u, v, w) in edges {
            store.add_edge(n(u), n(v), w).unwrap();
        }
        store
    }

    fn five_node_example() -> GraphStore {
        build(
            false,
            5,
            &[
                (0, 1, 1.0),
                (1, 2, 2.0),
                (0, 2, 5.0),
                (2, 3, 1.0),
                (3, 4, 1.0),
            ],
        )
    }

    /// Directed graph with negative weights but no negative cycle.
    fn signed_directed() -> GraphStore {
        build(
            true,
            6,
            &[
                (0, 2, -2.0),
                (1, 0, 4.0),
                (1, 2, 3.0),
                (2, 3, 2.0),
                (3, 1, -1.0),
                (4, 5, -1.0),
            ],
        )
    }

    fn negative_triangle() -> GraphStore {
        build(true, 3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, -3.0)])
    }

    #[test]
    fn test_dijkstra_five_node_example() {
        let store = five_node_example();
        let paths = dijkstra(&store, &[n(0)]).unwrap();

        assert_eq!(paths.distance(n(4)), 5.0);
        assert_eq!(paths.predecessor(n(4)), Some(n(3)));
        assert_eq!(paths.predecessor(n(3)), Some(n(2)));
        assert_eq!(paths.predecessor(n(2)), Some(n(1)));
        assert_eq!(paths.predecessor(n(1)), Some(n(0)));
        assert_eq!(paths.predecessor(n(0)), Some(n(0)));
        assert_eq!(paths.path_to(n(4)), Some(vec![n(0), n(1), n(2), n(3), n(4)]));
    }

    #[test]
    fn test_dijkstra_multi_source() {
        let store = build(false, 5, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]);
        let paths = dijkstra(&store, &[n(0), n(4)]).unwrap();

        assert_eq!(paths.distances, vec![0.0, 1.0, 2.0, 1.0, 0.0]);
        assert_eq!(paths.predecessor(n(4)), Some(n(4)));
        assert_eq!(paths.predecessor(n(3)), Some(n(4)));
    }

    #[test]
    fn test_dijkstra_unreachable_and_tombstones() {
        let mut store = build(true, 4, &[(0, 1, 1.0), (2, 3, 1.0)]);
        store.remove_node(n(2)).unwrap();
        let paths = dijkstra(&store, &[n(0)]).unwrap();

        assert_eq!(paths.len(), 4);
        assert_eq!(paths.distance(n(3)), f64::INFINITY);
        assert_eq!(paths.predecessor(n(2)), None);
        assert!(!paths.is_reachable(n(3)));
        assert_eq!(paths.path_to(n(3)), None);
        assert_eq!(paths.distance(n(99)), f64::INFINITY);
    }

    #[test]
    fn test_dijkstra_rejects_dead_source() {
        let mut store = build(false, 3, &[]);
        store.remove_node(n(1)).unwrap();

        assert!(matches!(dijkstra(&store, &[n(1)]), Err(Error::InvalidArgument(_))));
        assert!(matches!(dijkstra(&store, &[n(7)]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_dijkstra_into_reuses_buffers() {
        let store = five_node_example();
        let mut paths = ShortestPaths::new();

        dijkstra_into(&store, &[n(0)], &mut paths).unwrap();
        assert_eq!(paths.distance(n(4)), 5.0);

        dijkstra_into(&store, &[n(4)], &mut paths).unwrap();
        assert_eq!(paths.distance(n(4)), 0.0);
        assert_eq!(paths.distance(n(0)), 5.0);
        assert_eq!(paths.len(), 5);
    }

    #[test]
    fn test_dijkstra_parallel_edges_and_self_loops() {
        let store = build(false, 2, &[(0, 1, 4.0), (0, 1, 1.5), (0, 0, 0.5)]);
        let paths = dijkstra(&store, &[n(0)]).unwrap();
        assert_eq!(paths.distance(n(1)), 1.5);
        assert_eq!(paths.distance(n(0)), 0.0);
    }

    #[test]
    fn test_no_sources() {
        let store = five_node_example();
        let paths = dijkstra(&store, &[]).unwrap();
        assert!(paths.distances.iter().all(|d| d.is_infinite()));

        let outcome = bellman_ford(&store, &[]).unwrap();
        let paths = outcome.converged().unwrap();
        assert!(paths.predecessors.iter().all(Option::is_none));
    }

    #[test]
    fn test_bellman_ford_negative_weights() {
        let store = signed_directed();
        let paths = bellman_ford(&store, &[n(1)]).unwrap().converged().unwrap();

        assert_eq!(paths.distance(n(0)), 4.0);
        assert_eq!(paths.distance(n(2)), 2.0);
        assert_eq!(paths.distance(n(3)), 4.0);
        assert_eq!(paths.path_to(n(2)), Some(vec![n(1), n(0), n(2)]));
        assert_eq!(paths.path_to(n(3)), Some(vec![n(1), n(0), n(2), n(3)]));
        assert_eq!(paths.path_to(n(5)), None);
    }

    #[test]
    fn test_bellman_ford_matches_dijkstra_on_example() {
        let store = five_node_example();
        let bf = bellman_ford(&store, &[n(0)]).unwrap().converged().unwrap();
        let dj = dijkstra(&store, &[n(0)]).unwrap();
        assert_eq!(bf.distances, dj.distances);
    }

    #[test]
    fn test_bellman_ford_negative_triangle() {
        let store = negative_triangle();
        let outcome = bellman_ford(&store, &[n(0)]).unwrap();
        assert!(outcome.is_negative_cycle());
    }

    #[test]
    fn test_bellman_ford_negative_self_loop() {
        let store = build(true, 2, &[(0, 1, 1.0), (1, 1, -0.5)]);
        assert!(bellman_ford(&store, &[n(0)]).unwrap().is_negative_cycle());
    }

    #[test]
    fn test_bellman_ford_unreachable_cycle_is_ignored() {
        let store = build(
            true,
            5,
            &[(0, 1, 2.0), (2, 3, 1.0), (3, 4, 1.0), (4, 2, -3.0)],
        );
        let paths = bellman_ford(&store, &[n(0)]).unwrap().converged().unwrap();
        assert_eq!(paths.distance(n(1)), 2.0);
        assert!(paths.distance(n(2)).is_infinite());
    }

    #[test]
    fn test_bellman_ford_undirected_negative_edge_is_a_cycle() {
        // An undirected negative edge can be walked back and forth.
        let store = build(false, 2, &[(0, 1, -1.0)]);
        assert!(bellman_ford(&store, &[n(0)]).unwrap().is_negative_cycle());
    }

    #[test]
    fn test_floyd_warshall_five_node_example() {
        let store = five_node_example();
        let all = floyd_warshall(&store).unwrap().converged().unwrap();

        assert_eq!(all.node_end(), 5);
        assert_eq!(all.distance(n(0), n(4)), 5.0);
        assert_eq!(all.distance(n(4), n(0)), 5.0);
        assert_eq!(all.distance(n(2), n(2)), 0.0);
        assert_eq!(all.path(n(0), n(4)), Some(vec![n(0), n(1), n(2), n(3), n(4)]));
        assert_eq!(all.path(n(3), n(3)), Some(vec![n(3)]));
        assert_eq!(all.row(n(0)), &[0.0, 1.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_floyd_warshall_matches_bellman_ford() {
        let store = signed_directed();
        let all = floyd_warshall(&store).unwrap().converged().unwrap();
        for s in store.nodes() {
            let single = bellman_ford(&store, &[s]).unwrap().converged().unwrap();
            for t in store.nodes() {
                assert_eq!(all.distance(s, t), single.distance(t), "{s} -> {t}");
            }
        }
        assert_eq!(all.path(n(1), n(3)), Some(vec![n(1), n(0), n(2), n(3)]));
        assert_eq!(all.path(n(5), n(4)), None);
    }

    #[test]
    fn test_floyd_warshall_seeds_minimum_parallel_arc() {
        let store = build(true, 2, &[(0, 1, 1.0), (0, 1, 7.0), (0, 0, 3.0)]);
        let all = floyd_warshall(&store).unwrap().converged().unwrap();
        assert_eq!(all.distance(n(0), n(1)), 1.0);
        assert_eq!(all.distance(n(0), n(0)), 0.0);
        assert_eq!(all.predecessor(n(0), n(1)), Some(n(0)));
    }

    #[test]
    fn test_floyd_warshall_diagonal_predecessors() {
        let store = build(false, 3, &[(0, 1, 1.0)]);
        let all = floyd_warshall(&store).unwrap().converged().unwrap();
        let single = dijkstra(&store, &[n(0)]).unwrap();

        for u in store.nodes() {
            assert_eq!(all.predecessor(u, u), Some(u), "{u}");
        }
        assert_eq!(all.predecessor(n(0), n(0)), single.predecessor(n(0)));
        assert_eq!(all.predecessor(n(1), n(0)), Some(n(1)));
        assert_eq!(all.predecessor(n(0), n(2)), None);
    }

    #[test]
    fn test_floyd_warshall_negative_cycles() {
        assert!(floyd_warshall(&negative_triangle()).unwrap().is_negative_cycle());

        let self_loop = build(true, 1, &[(0, 0, -1.0)]);
        assert!(floyd_warshall(&self_loop).unwrap().is_negative_cycle());
    }

    #[test]
    fn test_floyd_warshall_tombstoned_rows() {
        let mut store = build(false, 3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        store.remove_node(n(1)).unwrap();
        let all = floyd_warshall(&store).unwrap().converged().unwrap();

        assert_eq!(all.node_end(), 3);
        assert!(all.distance(n(1), n(1)).is_infinite());
        assert_eq!(all.predecessor(n(1), n(1)), None);
        assert!(all.distance(n(0), n(2)).is_infinite());
        assert_eq!(all.path(n(0), n(2)), None);
    }

    #[test]
    fn test_wrappers() {
        let store = five_node_example();

        let dj = DijkstraAlgorithm::new([n(0)]);
        assert_eq!(dj.name(), "Dijkstra");
        assert_eq!(dj.sources(), &[n(0)]);
        assert_eq!(dj.run(&store).unwrap().distance(n(4)), 5.0);

        let bf = BellmanFordAlgorithm::new([n(0)]);
        assert_eq!(bf.name(), "Bellman-Ford");
        let paths = bf.run(&store).unwrap().into_result(bf.name()).unwrap();
        assert_eq!(paths.distance(n(4)), 5.0);

        let fw = FloydWarshallAlgorithm;
        assert_eq!(fw.name(), "Floyd-Warshall");
        let all = fw.run(&store).unwrap().converged().unwrap();
        assert_eq!(all.distance(n(4), n(0)), 5.0);
    }
}
