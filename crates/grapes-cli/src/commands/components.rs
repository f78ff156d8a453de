//! Connected components command.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::OutputFormat;
use crate::loader;
use crate::output::{self, Format};

/// Component sizes of a graph.
#[derive(Serialize)]
struct ComponentsOutput {
    component_count: usize,
    connected: bool,
    sizes: Vec<usize>,
}

/// Run the components command.
pub fn run(path: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = loader::load(path)?;
    let sizes = graph.component_sizes()?;

    let output = ComponentsOutput {
        component_count: sizes.len(),
        connected: sizes.len() == 1,
        sizes,
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            if !quiet {
                println!(
                    "Components: {} (connected: {})\n",
                    output.component_count, output.connected
                );

                let mut table = output::create_table();
                output::add_header(&mut table, &["#", "Size"]);
                for (i, size) in output.sizes.iter().enumerate() {
                    table.add_row(vec![i.to_string(), size.to_string()]);
                }
                println!("{table}");
            }
        }
    }

    Ok(())
}
