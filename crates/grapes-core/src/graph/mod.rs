//! The multigraph store.
//!
//! [`GraphStore`] owns one [`NodeSlot`] per node index. Live slots own their
//! adjacency list; removed nodes leave a tombstone so the indices of the
//! surviving nodes never change.

mod config;
mod slot;
mod store;

pub use config::GraphConfig;
pub use slot::NodeSlot;
pub use store::{GraphStats, GraphStore};
