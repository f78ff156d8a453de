//! Single-pair shortest path command.

use std::path::Path;

use anyhow::Result;
use grapes::{LabeledGraph, ShortestPathAlgorithm};
use serde::Serialize;

use crate::output::{self, Format};
use crate::{OutputFormat, PathAlgorithm, loader};

/// A shortest path and its cost.
#[derive(Serialize)]
struct PathOutput {
    from: String,
    to: String,
    algorithm: &'static str,
    reachable: bool,
    cost: Option<f64>,
    path: Vec<String>,
}

impl From<PathAlgorithm> for ShortestPathAlgorithm {
    fn from(algorithm: PathAlgorithm) -> Self {
        match algorithm {
            PathAlgorithm::Auto => Self::Auto,
            PathAlgorithm::Dijkstra => Self::Dijkstra,
            PathAlgorithm::BellmanFord => Self::BellmanFord,
            PathAlgorithm::FloydWarshall => Self::FloydWarshall,
        }
    }
}

/// Run the path command.
pub fn run(
    path: &Path,
    from: &str,
    to: &str,
    algorithm: PathAlgorithm,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let graph = loader::load(path)?;
    let algorithm = ShortestPathAlgorithm::from(algorithm).resolve(graph.store());

    let nodes = graph.shortest_path(&from.to_string(), &to.to_string(), algorithm)?;
    let cost = path_cost(&graph, &nodes);

    let output = PathOutput {
        from: from.to_string(),
        to: to.to_string(),
        algorithm: algorithm.name(),
        reachable: !nodes.is_empty(),
        cost,
        path: nodes,
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            if !output.reachable {
                output::status(
                    &format!("{} is unreachable from {}", output.to, output.from),
                    quiet,
                );
                return Ok(());
            }
            let items = vec![
                ("Algorithm", output.algorithm.to_string()),
                ("Hops", (output.path.len() - 1).to_string()),
                (
                    "Cost",
                    output.cost.map_or_else(String::new, output::format_distance),
                ),
                ("Path", output.path.join(" -> ")),
            ];
            output::print_key_value_table(&items, quiet);
        }
    }

    Ok(())
}

/// Sums the cheapest arc between each consecutive pair of `nodes`.
fn path_cost(graph: &LabeledGraph<String>, nodes: &[String]) -> Option<f64> {
    if nodes.is_empty() {
        return None;
    }
    let mut cost = 0.0;
    for pair in nodes.windows(2) {
        let step = graph
            .neighbors(&pair[0])
            .ok()?
            .into_iter()
            .filter(|(v, _)| **v == pair[1])
            .map(|(_, w)| w)
            .reduce(f64::min)?;
        cost += step;
    }
    Some(cost)
}
