//! Single- and multi-source distances command.

use std::path::Path;

use anyhow::Result;
use grapes::algorithms::{ShortestPaths, bellman_ford, dijkstra};
use grapes::{Error, LabeledGraph, NodeId, ShortestPathAlgorithm};
use serde::Serialize;

use crate::output::{self, Format};
use crate::{OutputFormat, SourceAlgorithm, loader};

/// Distance from the nearest source to one node.
#[derive(Serialize)]
struct DistanceRow {
    node: String,
    distance: Option<f64>,
    predecessor: Option<String>,
}

#[derive(Serialize)]
struct DistancesOutput {
    algorithm: &'static str,
    sources: Vec<String>,
    distances: Vec<DistanceRow>,
}

impl From<SourceAlgorithm> for ShortestPathAlgorithm {
    fn from(algorithm: SourceAlgorithm) -> Self {
        match algorithm {
            SourceAlgorithm::Dijkstra => Self::Dijkstra,
            SourceAlgorithm::BellmanFord => Self::BellmanFord,
        }
    }
}

/// Run the distances command.
pub fn run(
    path: &Path,
    sources: &[String],
    algorithm: SourceAlgorithm,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let graph = loader::load(path)?;
    let algorithm = ShortestPathAlgorithm::from(algorithm);
    let paths = shortest_paths(&graph, sources, algorithm)?;

    let distances = graph
        .nodes()
        .map(|label| {
            let id = graph.id(label)?;
            Ok(DistanceRow {
                node: label.clone(),
                distance: output::json_distance(paths.distance(id)),
                predecessor: paths
                    .predecessor(id)
                    .and_then(|p| graph.label(p))
                    .cloned(),
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let output = DistancesOutput {
        algorithm: algorithm.name(),
        sources: sources.to_vec(),
        distances,
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            if !quiet {
                println!(
                    "{} from {}\n",
                    output.algorithm,
                    output.sources.join(", ")
                );

                let mut table = output::create_table();
                output::add_header(&mut table, &["Node", "Distance", "Predecessor"]);
                for row in &output.distances {
                    table.add_row(vec![
                        row.node.clone(),
                        row.distance
                            .map_or_else(|| "inf".to_string(), output::format_distance),
                        row.predecessor.clone().unwrap_or_default(),
                    ]);
                }
                println!("{table}");
            }
        }
    }

    Ok(())
}

/// Runs `algorithm` from every label in `sources` at once.
fn shortest_paths(
    graph: &LabeledGraph<String>,
    sources: &[String],
    algorithm: ShortestPathAlgorithm,
) -> Result<ShortestPaths> {
    let ids = sources
        .iter()
        .map(|label| graph.id(label))
        .collect::<Result<Vec<NodeId>, Error>>()?;
    let store = graph.store();

    let paths = match algorithm {
        ShortestPathAlgorithm::BellmanFord => {
            bellman_ford(store, &ids)?.into_result(algorithm.name())?
        }
        _ => {
            if store.has_negative_weight() {
                return Err(Error::Precondition(
                    "Dijkstra requires non-negative edge weights".to_string(),
                )
                .into());
            }
            dijkstra(store, &ids)?
        }
    };
    Ok(paths)
}
