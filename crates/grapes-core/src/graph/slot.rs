//! Per-index node state.

use crate::index::adjacency::AdjacencyList;

/// State of a single node index.
///
/// Slots past `node_end` are always `Reserved`; slots below it are either
/// `Live` or `Tombstoned`. A tombstone is never handed out again.
#[derive(Debug, Clone, Default)]
pub enum NodeSlot {
    /// Allocated by growth but never handed out.
    #[default]
    Reserved,
    /// A live node and its outgoing arcs.
    Live(AdjacencyList),
    /// A removed node.
    Tombstoned,
}

impl NodeSlot {
    /// Returns true for a live node.
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// Returns true for a removed node.
    #[must_use]
    pub fn is_tombstoned(&self) -> bool {
        matches!(self, Self::Tombstoned)
    }

    /// The node's adjacency list, if it is live.
    #[must_use]
    pub fn adjacency(&self) -> Option<&AdjacencyList> {
        match self {
            Self::Live(list) => Some(list),
            _ => None,
        }
    }

    pub(crate) fn adjacency_mut(&mut self) -> Option<&mut AdjacencyList> {
        match self {
            Self::Live(list) => Some(list),
            _ => None,
        }
    }
}
