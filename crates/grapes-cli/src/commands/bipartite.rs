//! Bipartiteness command.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::OutputFormat;
use crate::loader;
use crate::output::{self, Format};

#[derive(Serialize)]
struct BipartiteOutput {
    bipartite: bool,
}

/// Run the bipartite command.
pub fn run(path: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = loader::load(path)?;
    let output = BipartiteOutput {
        bipartite: graph.is_bipartite()?,
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            if output.bipartite {
                output::success("Graph is bipartite", quiet);
            } else {
                output::status("Graph is not bipartite", quiet);
            }
        }
    }

    Ok(())
}
