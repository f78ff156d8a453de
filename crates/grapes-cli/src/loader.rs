//! Graph file loading.
//!
//! A graph file is a JSON document:
//!
//! ```json
//! {
//!   "directed": false,
//!   "simple": true,
//!   "nodes": ["a", "b", "c"],
//!   "edges": [
//!     { "source": "a", "target": "b", "weight": 2.0 },
//!     { "source": "b", "target": "c" }
//!   ]
//! }
//! ```
//!
//! `directed` and `simple` default to `false`, `weight` to `1.0`. Nodes that
//! only appear as edge endpoints are added in order of first mention.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use grapes::LabeledGraph;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// On-disk graph description.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub simple: bool,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// One edge in a [`GraphFile`].
#[derive(Debug, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl GraphFile {
    /// Builds the labeled graph this file describes.
    pub fn build(&self) -> Result<LabeledGraph<String>> {
        let mut graph = if self.simple {
            LabeledGraph::simple(self.directed)
        } else {
            LabeledGraph::new(self.directed)
        };

        for label in &self.nodes {
            graph
                .add_node(label.clone())
                .with_context(|| format!("Invalid node list entry {label:?}"))?;
        }

        for (i, edge) in self.edges.iter().enumerate() {
            for endpoint in [&edge.source, &edge.target] {
                if !graph.contains(endpoint) {
                    debug!(label = %endpoint, "adding implicit node");
                    graph.add_node(endpoint.clone())?;
                }
            }
            graph
                .add_edge(&edge.source, &edge.target, edge.weight)
                .with_context(|| format!("Invalid edge #{i}"))?;
        }

        Ok(graph)
    }
}

/// Reads and builds the graph stored at `path`.
pub fn load(path: &Path) -> Result<LabeledGraph<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file {}", path.display()))?;
    let file: GraphFile = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse graph file {}", path.display()))?;
    let graph = file.build()?;

    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}
