//! Shared algorithm traits and result wrappers.

use grapes_common::utils::error::{Error, Result};
use grapes_core::GraphStore;

/// Result of an algorithm that may certify a negative-weight cycle instead
/// of converging.
///
/// A negative cycle is a property of the input graph, not a failure of the
/// call, so it is reported here rather than through [`Error`].
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The algorithm converged.
    Converged(T),
    /// A negative-weight cycle was found; no distances are meaningful.
    NegativeCycle,
}

impl<T> Outcome<T> {
    /// Returns true if a negative cycle was certified.
    #[must_use]
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycle)
    }

    /// The converged value, if any.
    pub fn converged(self) -> Option<T> {
        match self {
            Self::Converged(value) => Some(value),
            Self::NegativeCycle => None,
        }
    }

    /// Maps the converged value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Converged(value) => Outcome::Converged(f(value)),
            Self::NegativeCycle => Outcome::NegativeCycle,
        }
    }

    /// Converts a negative cycle into [`Error::NegativeCycle`] naming
    /// `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCycle`] for [`Outcome::NegativeCycle`].
    pub fn into_result(self, algorithm: &'static str) -> Result<T> {
        self.converged().ok_or(Error::NegativeCycle(algorithm))
    }
}

/// A graph algorithm packaged with its parameters.
///
/// Wrappers implementing this trait let callers pick an algorithm at runtime
/// and run it against any store.
pub trait GraphAlgorithm {
    /// What a successful run produces.
    type Output;

    /// Human-readable algorithm name.
    fn name(&self) -> &'static str;

    /// Runs the algorithm on `store`.
    ///
    /// # Errors
    ///
    /// Fails if the parameters do not fit the store (for example a source
    /// that is not a live node) or a scratch buffer cannot be allocated.
    fn run(&self, store: &GraphStore) -> Result<Self::Output>;
}
