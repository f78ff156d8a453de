//! # grapes-common
//!
//! Foundation layer for Grapes: identifier types and the shared error type.
//!
//! This crate has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions ([`NodeId`])
//! - [`utils`] - Utility functions and helpers (errors, growth policy)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::NodeId;
pub use utils::error::{Error, Result};
