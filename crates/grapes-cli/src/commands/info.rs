//! Graph info command.

use std::path::Path;

use anyhow::Result;
use grapes::{GraphStats, LabeledGraph};
use serde::Serialize;

use crate::OutputFormat;
use crate::loader;
use crate::output::{self, Format};

/// Summary of a loaded graph.
#[derive(Serialize)]
struct GraphInfoOutput {
    simple: bool,
    has_negative_weight: bool,
    #[serde(flatten)]
    stats: GraphStats,
}

/// Run the info command.
pub fn run(path: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = loader::load(path)?;
    let output = info_output(&graph);

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            let stats = &output.stats;
            let kind = if stats.directed {
                "directed"
            } else {
                "undirected"
            };
            let items = vec![
                ("Kind", kind.to_string()),
                ("Simple", output.simple.to_string()),
                ("Nodes", stats.node_count.to_string()),
                ("Edges", stats.edge_count.to_string()),
                ("Arcs", stats.arc_count.to_string()),
                ("Tombstones", stats.tombstones.to_string()),
                ("Slot Capacity", stats.slot_capacity.to_string()),
                ("Arc Capacity", stats.arc_capacity.to_string()),
                ("Negative Weights", output.has_negative_weight.to_string()),
            ];
            output::print_key_value_table(&items, quiet);
        }
    }

    Ok(())
}

fn info_output(graph: &LabeledGraph<String>) -> GraphInfoOutput {
    let store = graph.store();
    GraphInfoOutput {
        simple: graph.is_simple(),
        has_negative_weight: store.has_negative_weight(),
        stats: store.stats(),
    }
}
