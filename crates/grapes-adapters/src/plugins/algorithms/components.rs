//! Connectivity algorithms: component sizes and bipartiteness.
//!
//! Both run breadth-first searches over outgoing arcs, starting from each
//! unvisited live node in index order. On an undirected graph this finds the
//! connected components. On a directed graph a node already reached from an
//! earlier start is not revisited, so the partition depends on index order.

use grapes_common::types::NodeId;
use grapes_common::utils::error::Result;
use grapes_core::{Deque, GraphStore};
use tracing::trace;

use super::traits::GraphAlgorithm;

/// Sizes of the components, in order of their lowest-indexed node.
///
/// The sizes sum to the store's `node_count`; an edgeless graph yields one
/// component of size 1 per node.
///
/// # Errors
///
/// Currently infallible; returns `Result` for symmetry with the other
/// algorithms.
pub fn component_sizes(store: &GraphStore) -> Result<Vec<usize>> {
    let mut visited = vec![false; store.node_end()];
    let mut queue = Deque::new();
    let mut sizes = Vec::new();

    for start in store.nodes() {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;
        queue.push_back(start);

        let mut size = 0;
        while let Ok(u) = queue.pop_front() {
            size += 1;
            for &v in neighbors(store, u) {
                if !visited[v.index()] {
                    visited[v.index()] = true;
                    queue.push_back(v);
                }
            }
        }
        sizes.push(size);
    }

    trace!(components = sizes.len(), "component sizes computed");
    Ok(sizes)
}

/// Returns true if the graph has exactly one component.
///
/// An empty graph has no components and is not connected.
///
/// # Errors
///
/// See [`component_sizes`].
pub fn is_connected(store: &GraphStore) -> Result<bool> {
    Ok(component_sizes(store)?.len() == 1)
}

/// Returns true if the nodes can be two-colored so that every arc joins
/// nodes of different colors.
///
/// A self-loop makes a graph non-bipartite. The search stops at the first
/// arc whose endpoints share a color, whichever component it is in.
///
/// # Errors
///
/// Currently infallible; returns `Result` for symmetry with the other
/// algorithms.
pub fn is_bipartite(store: &GraphStore) -> Result<bool> {
    let mut color: Vec<Option<bool>> = vec![None; store.node_end()];
    let mut queue = Deque::new();

    for start in store.nodes() {
        if color[start.index()].is_some() {
            continue;
        }
        color[start.index()] = Some(false);
        queue.push_back(start);

        while let Ok(u) = queue.pop_front() {
            let side = color[u.index()] == Some(true);
            for &v in neighbors(store, u) {
                match color[v.index()] {
                    None => {
                        color[v.index()] = Some(!side);
                        queue.push_back(v);
                    }
                    Some(other) if other == side => {
                        trace!(u = %u, v = %v, "monochromatic arc");
                        return Ok(false);
                    }
                    Some(_) => {}
                }
            }
        }
    }
    Ok(true)
}

fn neighbors(store: &GraphStore, u: NodeId) -> &[NodeId] {
    store
        .adjacency(u)
        .map(|arcs| arcs.targets())
        .unwrap_or_default()
}

// ============================================================================
// Algorithm Wrappers
// ============================================================================

/// Component sizing as a [`GraphAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentSizesAlgorithm;

impl GraphAlgorithm for ComponentSizesAlgorithm {
    type Output = Vec<usize>;

    fn name(&self) -> &'static str {
        "Component Sizes"
    }

    fn run(&self, store: &GraphStore) -> Result<Vec<usize>> {
        component_sizes(store)
    }
}

/// Bipartiteness check as a [`GraphAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BipartiteAlgorithm;

impl GraphAlgorithm for BipartiteAlgorithm {
    type Output = bool;

    fn name(&self) -> &'static str {
        "Bipartite"
    }

    fn run(&self, store: &GraphStore) -> Result<bool> {
        is_bipartite(store)
    }
}
