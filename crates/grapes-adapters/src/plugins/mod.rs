//! Algorithm plugins for Grapes.
//!
//! ## Modules
//!
//! - [`algorithms`] - Shortest paths, components, bipartiteness

pub mod algorithms;
