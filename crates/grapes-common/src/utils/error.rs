//! Error types shared by every Grapes crate.
//!
//! Structural and argument errors are reported eagerly, before any state is
//! mutated. Negative cycles found by shortest-path algorithms are *outcomes*
//! at the algorithm layer and only become [`Error::NegativeCycle`] when a
//! caller (such as the labeled graph) needs a definite path.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result alias used throughout Grapes.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for graph operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was out of range, refers to a removed node, or is malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The target of a removal does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A bounded structure would have to grow past its maximum capacity.
    #[error("capacity exhausted: maximum capacity is {max_capacity}")]
    OutOfCapacity {
        /// Upper bound the structure was created with.
        max_capacity: usize,
    },

    /// An allocation could not be satisfied.
    #[error("out of memory: {0}")]
    OutOfMemory(String),

    /// A pop, peek or extract was attempted on an empty container.
    #[error("{0} is empty")]
    Empty(&'static str),

    /// A labeled graph has no node with the given label.
    #[error("graph is missing node {0}")]
    MissingNode(String),

    /// A labeled graph already holds a node with the given label.
    #[error("graph already contains node {0}")]
    DuplicateNode(String),

    /// A labeled graph has no edge between the given labels.
    #[error("graph is missing edge {0} -> {1}")]
    MissingEdge(String, String),

    /// A simple graph would gain a self-loop.
    #[error("simple graph cannot contain a loop on {0}")]
    SelfLoop(String),

    /// A simple graph would gain a parallel edge.
    #[error("simple graph cannot contain duplicate edge {0} -> {1}")]
    DuplicateEdge(String, String),

    /// An algorithm precondition does not hold for this graph.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// A shortest-path algorithm certified a negative-weight cycle.
    #[error("{0} found a negative-weight cycle")]
    NegativeCycle(&'static str),
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Self::OutOfMemory(err.to_string())
    }
}

impl Error {
    /// Returns true for errors caused by the caller's arguments rather than
    /// by resource exhaustion.
    #[must_use]
    pub fn is_argument_error(&self) -> bool {
        !matches!(
            self,
            Self::OutOfCapacity { .. } | Self::OutOfMemory(_) | Self::NegativeCycle(_)
        )
    }
}
