//! # grapes-adapters
//!
//! Algorithm layer for Grapes. Everything here reads a
//! [`GraphStore`](grapes_core::GraphStore) and writes result buffers sized to
//! its `node_end`; nothing mutates the graph.
//!
//! ## Modules
//!
//! - [`plugins`] - Algorithm implementations and their wrapper types

pub mod plugins;
