//! Core type definitions for Grapes.
//!
//! Nodes are addressed by dense, never-reused indices wrapped in [`NodeId`].

mod id;

pub use id::NodeId;
