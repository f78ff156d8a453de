//! All-pairs distance matrix command.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Color};
use grapes::algorithms::floyd_warshall;
use grapes::{Error, LabeledGraph, NodeId, ShortestPathAlgorithm};
use serde::Serialize;

use crate::OutputFormat;
use crate::loader;
use crate::output::{self, Format};

/// Distance matrix in node insertion order; `null` marks unreachable pairs.
#[derive(Debug, Serialize)]
struct AllPairsOutput {
    nodes: Vec<String>,
    distances: Vec<Vec<Option<f64>>>,
}

/// Run the all-pairs command.
pub fn run(path: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = loader::load(path)?;
    let output = distance_matrix(&graph)?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            if !quiet {
                let mut table = output::create_table();
                let mut header = vec![""];
                header.extend(output.nodes.iter().map(String::as_str));
                output::add_header(&mut table, &header);

                for (label, row) in output.nodes.iter().zip(&output.distances) {
                    let mut cells = vec![Cell::new(label).fg(Color::Green)];
                    cells.extend(row.iter().map(|d| {
                        Cell::new(d.map_or_else(|| "inf".to_string(), output::format_distance))
                    }));
                    table.add_row(cells);
                }
                println!("{table}");
            }
        }
    }

    Ok(())
}

fn distance_matrix(graph: &LabeledGraph<String>) -> Result<AllPairsOutput> {
    let algorithm = ShortestPathAlgorithm::FloydWarshall;
    let all = floyd_warshall(graph.store())?.into_result(algorithm.name())?;

    let nodes: Vec<String> = graph.nodes().cloned().collect();
    let ids = nodes
        .iter()
        .map(|label| graph.id(label))
        .collect::<Result<Vec<NodeId>, Error>>()?;

    let distances = ids
        .iter()
        .map(|&i| {
            ids.iter()
                .map(|&j| output::json_distance(all.distance(i, j)))
                .collect()
        })
        .collect();

    Ok(AllPairsOutput { nodes, distances })
}
